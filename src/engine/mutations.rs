use tracing::debug;

use crate::model::*;
use crate::observability;

use super::{Engine, EngineError};

/// Count a rejection under its reason label before handing it back.
fn rejected(err: EngineError) -> EngineError {
    metrics::counter!(
        observability::BOOKING_FAILURES_TOTAL,
        "reason" => observability::failure_label(&err)
    )
    .increment(1);
    err
}

impl Engine {
    pub fn register_participant(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> ParticipantId {
        let id = ParticipantId(self.participant_seq.next());
        self.participants
            .insert(id, Participant::new(id, name.into(), email.into(), role));
        metrics::counter!(observability::PARTICIPANTS_REGISTERED_TOTAL).increment(1);
        debug!(%id, %role, "participant registered");
        id
    }

    /// Books an interview between an HR manager and an interviewer. Argument
    /// order is part of the contract: the HR manager comes first, and a
    /// swapped pair fails with a role mismatch naming the misplaced id.
    ///
    /// All validation runs before any mutation, so a failed call leaves the
    /// registries and both booking sets untouched.
    pub fn book_interview(
        &mut self,
        candidate_name: impl Into<String>,
        position: impl Into<String>,
        hr_manager_id: ParticipantId,
        interviewer_id: ParticipantId,
        slot: Slot,
    ) -> Result<InterviewId, EngineError> {
        self.validate_booking(hr_manager_id, interviewer_id, &slot, None)
            .map_err(rejected)?;

        let id = InterviewId(self.interview_seq.next());
        let interview = Interview::new(
            id,
            candidate_name.into(),
            position.into(),
            hr_manager_id,
            interviewer_id,
            slot,
        );
        self.participants
            .get_mut(&hr_manager_id)
            .expect("resolved during validation")
            .add_booking(id);
        self.participants
            .get_mut(&interviewer_id)
            .expect("resolved during validation")
            .add_booking(id);
        self.interviews.insert(id, interview);

        metrics::counter!(observability::BOOKINGS_TOTAL).increment(1);
        debug!(%id, %hr_manager_id, %interviewer_id, slot.start, slot.end, "interview booked");
        Ok(id)
    }

    /// Flips the record to Cancelled and detaches it from both participants'
    /// booking sets, freeing the slot for future bookings. The record itself
    /// stays in the registry and its id is never reused. Returns false only
    /// for an unknown id; cancelling twice succeeds and changes nothing more.
    pub fn cancel_interview(&mut self, id: InterviewId) -> bool {
        let Some(interview) = self.interviews.get_mut(&id) else {
            return false;
        };
        interview.set_status(InterviewStatus::Cancelled);
        let hr_manager_id = interview.hr_manager_id;
        let interviewer_id = interview.interviewer_id;

        if let Some(hr) = self.participants.get_mut(&hr_manager_id) {
            hr.remove_booking(id);
        }
        if let Some(interviewer) = self.participants.get_mut(&interviewer_id) {
            interviewer.remove_booking(id);
        }

        metrics::counter!(observability::CANCELLATIONS_TOTAL).increment(1);
        debug!(%id, "interview cancelled");
        true
    }

    /// Moves a Scheduled interview to a new slot after re-running the full
    /// availability and conflict checks for both participants. The
    /// interview's own current slot is treated as freed during the check, so
    /// shifting within or adjacent to its old time is allowed. On failure
    /// the record keeps its old slot.
    pub fn reschedule_interview(
        &mut self,
        id: InterviewId,
        new_slot: Slot,
    ) -> Result<(), EngineError> {
        let Some(interview) = self.interviews.get(&id) else {
            return Err(rejected(EngineError::UnknownInterview(id)));
        };
        if interview.status() != InterviewStatus::Scheduled {
            return Err(rejected(EngineError::InterviewNotActive(id)));
        }
        let hr_manager_id = interview.hr_manager_id;
        let interviewer_id = interview.interviewer_id;

        self.validate_booking(hr_manager_id, interviewer_id, &new_slot, Some(id))
            .map_err(rejected)?;

        self.interviews
            .get_mut(&id)
            .expect("resolved above")
            .set_slot(new_slot);

        metrics::counter!(observability::RESCHEDULES_TOTAL).increment(1);
        debug!(%id, new_slot.start, new_slot.end, "interview rescheduled");
        Ok(())
    }

    /// The booking rulebook, in check order: both ids resolve, roles match
    /// their argument positions, each participant has a window containing the
    /// slot, and neither has an overlapping Scheduled interview (the HR
    /// manager is checked first at every step).
    fn validate_booking(
        &self,
        hr_manager_id: ParticipantId,
        interviewer_id: ParticipantId,
        slot: &Slot,
        exclude: Option<InterviewId>,
    ) -> Result<(), EngineError> {
        let hr = self
            .lookup_participant(hr_manager_id)
            .ok_or(EngineError::UnknownParticipant(hr_manager_id))?;
        let interviewer = self
            .lookup_participant(interviewer_id)
            .ok_or(EngineError::UnknownParticipant(interviewer_id))?;

        if hr.role != Role::HrManager {
            return Err(EngineError::RoleMismatch {
                id: hr_manager_id,
                expected: Role::HrManager,
            });
        }
        if interviewer.role != Role::Interviewer {
            return Err(EngineError::RoleMismatch {
                id: interviewer_id,
                expected: Role::Interviewer,
            });
        }

        if !hr.is_available(slot) {
            return Err(EngineError::NotAvailable(hr_manager_id));
        }
        if !interviewer.is_available(slot) {
            return Err(EngineError::NotAvailable(interviewer_id));
        }

        if let Some(interview) = self.conflicting_interview(hr_manager_id, slot, exclude) {
            return Err(EngineError::SlotConflict {
                participant: hr_manager_id,
                interview,
            });
        }
        if let Some(interview) = self.conflicting_interview(interviewer_id, slot, exclude) {
            return Err(EngineError::SlotConflict {
                participant: interviewer_id,
                interview,
            });
        }

        Ok(())
    }
}
