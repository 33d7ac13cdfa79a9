//! Timetable (solution) model.
//!
//! A timetable holds one slot grid per student batch. Every grid covers
//! exactly `days × time_slots` coordinates; an unset coordinate is an
//! explicit `None`, never a missing entry.
//!
//! Timetables are cloned (deep copy) whenever two search branches diverge
//! from a common ancestor; `Clone` is the only copy operation used.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Algorithm, Conflict, TimeSlot, Weekday};

/// A grid coordinate: indices into [`Timetable::days`] and
/// [`Timetable::time_slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Day index.
    pub day: usize,
    /// Slot index within the day.
    pub slot: usize,
}

impl Coord {
    /// Creates a coordinate.
    #[inline]
    pub fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }
}

/// One scheduled class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAssignment {
    /// Subject name.
    pub subject: String,
    /// Faculty member teaching the class.
    pub faculty: String,
    /// Room the class is held in.
    pub room: String,
    /// Display color (hex) for renderers.
    pub display_color: String,
}

impl ClassAssignment {
    /// Creates an assignment with no display color.
    pub fn new(
        subject: impl Into<String>,
        faculty: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            faculty: faculty.into(),
            room: room.into(),
            display_color: String::new(),
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.display_color = color.into();
        self
    }
}

/// A student cohort and its weekly grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Batch index (0-based, equal to its position in the timetable).
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Grid indexed `[day][slot]`.
    pub schedule: Vec<Vec<Option<ClassAssignment>>>,
}

impl Batch {
    /// Creates a batch with an all-empty `days × slots` grid.
    pub fn empty(id: usize, name: impl Into<String>, days: usize, slots: usize) -> Self {
        Self {
            id,
            name: name.into(),
            schedule: vec![vec![None; slots]; days],
        }
    }

    /// Default display name for a batch index: `Batch A` .. `Batch Z`, then numeric.
    pub fn default_name(id: usize) -> String {
        if id < 26 {
            format!("Batch {}", (b'A' + id as u8) as char)
        } else {
            format!("Batch {}", id + 1)
        }
    }

    /// Class at a coordinate.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&ClassAssignment> {
        self.schedule
            .get(coord.day)
            .and_then(|day| day.get(coord.slot))
            .and_then(|entry| entry.as_ref())
    }

    /// Whether a coordinate holds a class.
    #[inline]
    pub fn is_filled(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Writes a class, returning whatever was there.
    pub fn set(&mut self, coord: Coord, class: ClassAssignment) -> Option<ClassAssignment> {
        self.entry_mut(coord).and_then(|entry| entry.replace(class))
    }

    /// Clears a coordinate, returning its class.
    pub fn clear(&mut self, coord: Coord) -> Option<ClassAssignment> {
        self.entry_mut(coord).and_then(|entry| entry.take())
    }

    /// Moves the class at `from` to `to`. Fails (returns false) if `from`
    /// is empty or `to` is occupied.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> bool {
        if from == to || !self.is_filled(from) || self.is_filled(to) {
            return false;
        }
        match self.clear(from) {
            Some(class) => {
                self.set(to, class);
                true
            }
            None => false,
        }
    }

    /// Exchanges the contents of two coordinates.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        if a == b {
            return;
        }
        let first = self.clear(a);
        let second = self.clear(b);
        if let Some(class) = second {
            self.set(a, class);
        }
        if let Some(class) = first {
            self.set(b, class);
        }
    }

    fn entry_mut(&mut self, coord: Coord) -> Option<&mut Option<ClassAssignment>> {
        self.schedule
            .get_mut(coord.day)
            .and_then(|day| day.get_mut(coord.slot))
    }

    /// Number of coordinates in the grid.
    pub fn capacity(&self) -> usize {
        self.schedule.iter().map(|day| day.len()).sum()
    }

    /// Number of filled coordinates.
    pub fn filled_count(&self) -> usize {
        self.schedule
            .iter()
            .flat_map(|day| day.iter())
            .filter(|entry| entry.is_some())
            .count()
    }

    /// Number of empty coordinates.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.filled_count()
    }

    /// Filled coordinates, day-major.
    pub fn filled_coords(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.is_filled(c)).collect()
    }

    /// Empty coordinates, day-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.coords().filter(|&c| !self.is_filled(c)).collect()
    }

    /// All coordinates, day-major then slot-minor.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.schedule
            .iter()
            .enumerate()
            .flat_map(|(d, day)| (0..day.len()).map(move |s| Coord::new(d, s)))
    }

    /// Occurrences of each subject in this batch.
    pub fn subject_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for class in self.schedule.iter().flatten().flatten() {
            *counts.entry(class.subject.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// A weekly timetable for all batches.
///
/// `fitness`, `conflicts`, and `algorithm_used` are attached once by
/// [`Timetable::finalize`]; on intermediate search candidates they are
/// unset or stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    /// Working days, in configured order.
    pub days: Vec<Weekday>,
    /// Daily time slots, ascending.
    pub time_slots: Vec<TimeSlot>,
    /// One grid per batch; `batches[i].id == i`.
    pub batches: Vec<Batch>,
    /// Fitness of the finished timetable.
    pub fitness: Option<f64>,
    /// Conflicts found in the finished timetable.
    pub conflicts: Vec<Conflict>,
    /// Strategy that produced the timetable.
    pub algorithm_used: Option<Algorithm>,
}

impl Timetable {
    /// Creates an empty timetable with default batch names.
    pub fn empty(days: Vec<Weekday>, time_slots: Vec<TimeSlot>, batch_count: usize) -> Self {
        let batches = (0..batch_count)
            .map(|id| Batch::empty(id, Batch::default_name(id), days.len(), time_slots.len()))
            .collect();
        Self {
            days,
            time_slots,
            batches,
            fitness: None,
            conflicts: Vec::new(),
            algorithm_used: None,
        }
    }

    /// Coordinates per batch per week.
    #[inline]
    pub fn slots_per_batch(&self) -> usize {
        self.days.len() * self.time_slots.len()
    }

    /// Coordinates across all batches.
    pub fn total_slots(&self) -> usize {
        self.slots_per_batch() * self.batches.len()
    }

    /// Filled coordinates across all batches.
    pub fn filled_slots(&self) -> usize {
        self.batches.iter().map(Batch::filled_count).sum()
    }

    /// Fill ratio over all batches (0 when the grid is empty).
    pub fn fill_ratio(&self) -> f64 {
        let total = self.total_slots();
        if total == 0 {
            0.0
        } else {
            self.filled_slots() as f64 / total as f64
        }
    }

    /// All coordinates, day-major then slot-minor.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let slots = self.time_slots.len();
        (0..self.days.len()).flat_map(move |d| (0..slots).map(move |s| Coord::new(d, s)))
    }

    /// Class for a batch at a coordinate.
    pub fn class_at(&self, batch: usize, coord: Coord) -> Option<&ClassAssignment> {
        self.batches.get(batch).and_then(|b| b.get(coord))
    }

    /// Occurrences of each subject across all batches.
    pub fn subject_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for batch in &self.batches {
            for (subject, n) in batch.subject_counts() {
                *counts.entry(subject).or_insert(0) += n;
            }
        }
        counts
    }

    /// Attaches the final fitness, conflict list, and strategy tag.
    pub fn finalize(&mut self, fitness: f64, conflicts: Vec<Conflict>, algorithm: Algorithm) {
        self.fitness = Some(fitness);
        self.conflicts = conflicts;
        self.algorithm_used = Some(algorithm);
    }

    /// Whether [`Timetable::finalize`] has been applied.
    pub fn is_finished(&self) -> bool {
        self.fitness.is_some() && self.algorithm_used.is_some()
    }
}
