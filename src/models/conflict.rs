//! Resource conflict model.
//!
//! A conflict records two batches holding the same faculty member or the
//! same non-lab room at the same day and slot. Conflicts are reportable
//! data on a finished timetable, not errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Coord, TimeSlot, Weekday};

/// Kind of double-booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// One faculty member teaching two batches at once.
    FacultyConflict,
    /// One non-lab room hosting two batches at once.
    RoomConflict,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
}

/// A detected double-booking between two batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Conflict kind.
    pub kind: ConflictKind,
    /// Working day.
    pub day: Weekday,
    /// Time slot.
    pub slot: TimeSlot,
    /// Grid coordinate of the collision.
    pub coord: Coord,
    /// The two batch IDs involved, lower first.
    pub batch_ids: (usize, usize),
    /// Faculty name or room name.
    pub resource: String,
    /// Severity.
    pub severity: Severity,
    /// Human-readable description.
    pub description: String,
}

impl Conflict {
    /// Creates a faculty conflict (high severity).
    pub fn faculty(
        day: Weekday,
        slot: TimeSlot,
        coord: Coord,
        batch_ids: (usize, usize),
        faculty: impl Into<String>,
    ) -> Self {
        let faculty = faculty.into();
        Self {
            kind: ConflictKind::FacultyConflict,
            description: format!(
                "{faculty} is assigned to batches {} and {} on {day} at {slot}",
                batch_ids.0, batch_ids.1
            ),
            day,
            slot,
            coord,
            batch_ids,
            resource: faculty,
            severity: Severity::High,
        }
    }

    /// Creates a room conflict (medium severity).
    pub fn room(
        day: Weekday,
        slot: TimeSlot,
        coord: Coord,
        batch_ids: (usize, usize),
        room: impl Into<String>,
    ) -> Self {
        let room = room.into();
        Self {
            kind: ConflictKind::RoomConflict,
            description: format!(
                "{room} is booked by batches {} and {} on {day} at {slot}",
                batch_ids.0, batch_ids.1
            ),
            day,
            slot,
            coord,
            batch_ids,
            resource: room,
            severity: Severity::Medium,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.description)
    }
}
