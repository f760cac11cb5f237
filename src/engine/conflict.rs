use crate::model::*;

use super::Engine;

impl Engine {
    /// True iff the participant already has a Scheduled interview whose slot
    /// overlaps `slot`. Unknown participants have no bookings to conflict with.
    pub fn has_conflict(&self, participant_id: ParticipantId, slot: &Slot) -> bool {
        self.conflicting_interview(participant_id, slot, None).is_some()
    }

    /// First Scheduled booking of the participant overlapping `slot`, skipping
    /// `exclude`: a booking being moved must not conflict with itself.
    pub(super) fn conflicting_interview(
        &self,
        participant_id: ParticipantId,
        slot: &Slot,
        exclude: Option<InterviewId>,
    ) -> Option<InterviewId> {
        let participant = self.lookup_participant(participant_id)?;
        for &booking_id in participant.active_bookings() {
            if Some(booking_id) == exclude {
                continue;
            }
            // The booking set only ever holds Scheduled ids, but the status
            // check here is the authoritative guard.
            if let Some(interview) = self.lookup_interview(booking_id)
                && interview.status() == InterviewStatus::Scheduled
                && interview.slot().overlaps(slot)
            {
                return Some(booking_id);
            }
        }
        None
    }
}
