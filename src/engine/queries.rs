use crate::model::*;

use super::Engine;

impl Engine {
    /// All participants holding `role`, in ascending id order.
    pub fn participants_with_role(&self, role: Role) -> Vec<&Participant> {
        self.participants.values().filter(|p| p.role == role).collect()
    }

    /// The participant's current bookings, ascending id. Cancelled interviews
    /// never appear here since cancellation detached them from the booking
    /// set. Unknown participants yield an empty list.
    pub fn interviews_for_participant(&self, id: ParticipantId) -> Vec<&Interview> {
        let Some(participant) = self.lookup_participant(id) else {
            return Vec::new();
        };
        participant
            .active_bookings()
            .iter()
            .filter_map(|booking_id| self.lookup_interview(*booking_id))
            .collect()
    }

    /// Every record ever created, cancelled ones included, ascending id.
    pub fn all_interviews(&self) -> Vec<&Interview> {
        self.interviews.values().collect()
    }

    pub fn stats(&self) -> EngineStats {
        let mut stats = EngineStats {
            participants: self.participants.len(),
            interviews: self.interviews.len(),
            ..EngineStats::default()
        };
        for participant in self.participants.values() {
            match participant.role {
                Role::HrManager => stats.hr_managers += 1,
                Role::Interviewer => stats.interviewers += 1,
            }
        }
        for interview in self.interviews.values() {
            match interview.status() {
                InterviewStatus::Scheduled => stats.scheduled += 1,
                InterviewStatus::Completed => stats.completed += 1,
                InterviewStatus::Cancelled => stats.cancelled += 1,
                InterviewStatus::Rescheduled => stats.rescheduled += 1,
            }
        }
        stats
    }
}
