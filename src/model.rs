use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unix milliseconds, the engine's only time type.
pub type Ms = i64;

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: Ms,
    pub end: Ms,
}

impl Slot {
    /// Panics if `start >= end` — zero-length and inverted slots are never valid.
    pub fn new(start: Ms, end: Ms) -> Self {
        assert!(start < end, "slot start must be before end");
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    /// Strict-interior overlap: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if `self` fully contains `other`.
    pub fn contains(&self, other: &Slot) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    HrManager,
    Interviewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::HrManager => write!(f, "HR Manager"),
            Role::Interviewer => write!(f, "Interviewer"),
        }
    }
}

/// Lifecycle of an interview record. Only `Scheduled` blocks other bookings;
/// transitions are caller-driven, nothing moves a record automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterviewStatus::Scheduled => write!(f, "Scheduled"),
            InterviewStatus::Completed => write!(f, "Completed"),
            InterviewStatus::Cancelled => write!(f, "Cancelled"),
            InterviewStatus::Rescheduled => write!(f, "Rescheduled"),
        }
    }
}

/// An HR manager or interviewer: identity, availability windows, and the set
/// of bookings currently holding their time. Owned by the engine registry;
/// interview records refer to participants by id only.
#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub role: Role,
    availability: Vec<Slot>,
    active_bookings: BTreeSet<InterviewId>,
}

impl Participant {
    pub(crate) fn new(id: ParticipantId, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
            availability: Vec::new(),
            active_bookings: BTreeSet::new(),
        }
    }

    /// Appends a window. Windows are kept as given: no merging, no dedup,
    /// overlapping and redundant windows are allowed.
    pub fn add_availability(&mut self, slot: Slot) {
        self.availability.push(slot);
    }

    pub fn availability(&self) -> &[Slot] {
        &self.availability
    }

    /// True iff at least one availability window fully contains `slot`.
    pub fn is_available(&self, slot: &Slot) -> bool {
        self.availability.iter().any(|w| w.contains(slot))
    }

    pub fn active_bookings(&self) -> &BTreeSet<InterviewId> {
        &self.active_bookings
    }

    pub(crate) fn add_booking(&mut self, id: InterviewId) {
        self.active_bookings.insert(id);
    }

    /// Removing an id that is not in the set is a no-op, not an error.
    pub(crate) fn remove_booking(&mut self, id: InterviewId) {
        self.active_bookings.remove(&id);
    }
}

/// A booking record. Dumb data: the setters mutate the record directly and
/// never touch the participants' booking sets; keeping the two consistent
/// is the engine's job.
#[derive(Debug, Clone, Serialize)]
pub struct Interview {
    pub id: InterviewId,
    pub candidate_name: String,
    pub position: String,
    pub hr_manager_id: ParticipantId,
    pub interviewer_id: ParticipantId,
    slot: Slot,
    status: InterviewStatus,
    notes: Option<String>,
}

impl Interview {
    pub(crate) fn new(
        id: InterviewId,
        candidate_name: String,
        position: String,
        hr_manager_id: ParticipantId,
        interviewer_id: ParticipantId,
        slot: Slot,
    ) -> Self {
        Self {
            id,
            candidate_name,
            position,
            hr_manager_id,
            interviewer_id,
            slot,
            status: InterviewStatus::Scheduled,
            notes: None,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn set_status(&mut self, status: InterviewStatus) {
        self.status = status;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }

    pub(crate) fn set_slot(&mut self, slot: Slot) {
        self.slot = slot;
    }
}

/// Registry-wide counts, computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub participants: usize,
    pub hr_managers: usize,
    pub interviewers: usize,
    pub interviews: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub rescheduled: usize,
}
