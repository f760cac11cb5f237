use crate::model::{InterviewId, ParticipantId, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    UnknownParticipant(ParticipantId),
    RoleMismatch {
        id: ParticipantId,
        expected: Role,
    },
    NotAvailable(ParticipantId),
    SlotConflict {
        participant: ParticipantId,
        interview: InterviewId,
    },
    UnknownInterview(InterviewId),
    InterviewNotActive(InterviewId),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownParticipant(id) => write!(f, "unknown participant: {id}"),
            EngineError::RoleMismatch { id, expected } => {
                write!(f, "participant {id} is not an {expected}")
            }
            EngineError::NotAvailable(id) => {
                write!(f, "participant {id} has no availability window covering the slot")
            }
            EngineError::SlotConflict { participant, interview } => {
                write!(
                    f,
                    "slot conflicts with interview {interview} already booked for participant {participant}"
                )
            }
            EngineError::UnknownInterview(id) => write!(f, "unknown interview: {id}"),
            EngineError::InterviewNotActive(id) => {
                write!(f, "interview {id} is no longer scheduled")
            }
        }
    }
}

impl std::error::Error for EngineError {}
