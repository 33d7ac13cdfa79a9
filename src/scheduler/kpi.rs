//! Timetable quality metrics (KPIs).
//!
//! Computes reporting indicators from a timetable. Unlike
//! [`FitnessBreakdown`](crate::fitness::FitnessBreakdown), none of these
//! feed back into the search.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilization | Filled / total coordinates over all batches |
//! | Batch utilization | Filled / capacity per batch |
//! | Min free slots | Fewest empty coordinates in any batch |
//! | Faculty load | Classes taught per faculty member |
//! | Subject load | Classes held per subject |
//! | Gap count | Interior empty slots (filled before and after, same day) |
//! | Conflicts | Faculty and room collisions, counted separately |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constraints::detect_conflicts;
use crate::fitness::interior_gaps;
use crate::models::{ConflictKind, Timetable};

/// Timetable performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableKpi {
    /// Filled coordinates over all batches.
    pub filled_slots: usize,
    /// Coordinates over all batches.
    pub total_slots: usize,
    /// Overall fill ratio (0.0..1.0).
    pub utilization: f64,
    /// Fill ratio per batch, by batch index.
    pub utilization_by_batch: Vec<f64>,
    /// Fewest free coordinates of any batch.
    pub min_free_slots: usize,
    /// Classes per faculty member.
    pub classes_by_faculty: BTreeMap<String, usize>,
    /// Classes per subject.
    pub classes_by_subject: BTreeMap<String, usize>,
    /// Interior gaps summed over batches and days.
    pub gap_count: usize,
    /// Faculty double-bookings.
    pub faculty_conflicts: usize,
    /// Non-lab room double-bookings.
    pub room_conflicts: usize,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable.
    ///
    /// Conflicts are taken from `timetable.conflicts` when the timetable is
    /// finished and re-detected otherwise.
    pub fn calculate(timetable: &Timetable) -> Self {
        let mut classes_by_faculty = BTreeMap::new();
        let mut classes_by_subject = BTreeMap::new();
        let mut utilization_by_batch = Vec::with_capacity(timetable.batches.len());
        let mut min_free_slots = usize::MAX;
        let mut gap_count = 0;

        for batch in &timetable.batches {
            let capacity = batch.capacity();
            utilization_by_batch.push(if capacity == 0 {
                0.0
            } else {
                batch.filled_count() as f64 / capacity as f64
            });
            min_free_slots = min_free_slots.min(batch.free_count());
            gap_count += interior_gaps(batch);

            for class in batch.schedule.iter().flatten().flatten() {
                *classes_by_faculty.entry(class.faculty.clone()).or_insert(0) += 1;
                *classes_by_subject.entry(class.subject.clone()).or_insert(0) += 1;
            }
        }
        if timetable.batches.is_empty() {
            min_free_slots = 0;
        }

        let detected;
        let conflicts = if timetable.is_finished() {
            &timetable.conflicts
        } else {
            detected = detect_conflicts(timetable);
            &detected
        };
        let faculty_conflicts = conflicts
            .iter()
            .filter(|c| c.kind == ConflictKind::FacultyConflict)
            .count();

        Self {
            filled_slots: timetable.filled_slots(),
            total_slots: timetable.total_slots(),
            utilization: timetable.fill_ratio(),
            utilization_by_batch,
            min_free_slots,
            classes_by_faculty,
            classes_by_subject,
            gap_count,
            faculty_conflicts,
            room_conflicts: conflicts.len() - faculty_conflicts,
        }
    }

    /// Total conflicts of either kind.
    pub fn conflict_count(&self) -> usize {
        self.faculty_conflicts + self.room_conflicts
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_conflicts: usize, min_utilization: f64) -> bool {
        self.conflict_count() <= max_conflicts && self.utilization >= min_utilization
    }
}
