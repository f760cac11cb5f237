mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::EngineError;

use std::collections::BTreeMap;

use crate::model::*;

/// Monotonic id source, one per entity type. Starts at 1, never reuses a
/// value, and belongs to a single engine instance; separate engines hand
/// out independent id spaces.
#[derive(Debug, Default)]
struct IdSequence(u64);

impl IdSequence {
    fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// The scheduling engine: owns the participant and interview registries and
/// enforces role correctness, availability containment, and conflict-freedom
/// on every booking. Mutations take `&mut self`; with one engine per logical
/// scheduler, exclusive ownership is the whole concurrency story.
pub struct Engine {
    participants: BTreeMap<ParticipantId, Participant>,
    interviews: BTreeMap<InterviewId, Interview>,
    participant_seq: IdSequence,
    interview_seq: IdSequence,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            participants: BTreeMap::new(),
            interviews: BTreeMap::new(),
            participant_seq: IdSequence::default(),
            interview_seq: IdSequence::default(),
        }
    }

    pub fn lookup_participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    /// Mutable record access, e.g. for `add_availability`. Availability edits
    /// never re-validate existing bookings.
    pub fn lookup_participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.get_mut(&id)
    }

    pub fn lookup_interview(&self, id: InterviewId) -> Option<&Interview> {
        self.interviews.get(&id)
    }

    /// Mutable record access for caller-driven status and notes transitions
    /// (e.g. marking an interview Completed once it has happened).
    pub fn lookup_interview_mut(&mut self, id: InterviewId) -> Option<&mut Interview> {
        self.interviews.get_mut(&id)
    }
}
