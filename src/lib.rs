pub mod engine;
pub mod model;
pub mod observability;

pub use engine::{Engine, EngineError};
pub use model::{Interview, InterviewId, InterviewStatus, Ms, Participant, ParticipantId, Role, Slot};
