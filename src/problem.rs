//! Validated search input.
//!
//! [`Problem`] is built once from a [`GenerationRequest`] after validation
//! and is read-only for the rest of the run. It resolves names (subjects,
//! faculty, rooms, batches), the slot grid, and subject display colors so
//! the algorithms never see raw request data.

use crate::models::{
    build_time_slots, Algorithm, ClassAssignment, GenerationRequest, TimeSlot, Timetable, Weekday,
};
use crate::validation::{validate_request, GenerateError};

/// Subject display palette; subject `i` uses `PALETTE[i % PALETTE.len()]`.
pub const PALETTE: [&str; 10] = [
    "#4F86C6", "#E4572E", "#29BF12", "#F3A712", "#A23B72", "#17BEBB", "#8C5383", "#FF6F59",
    "#3D5A80", "#98C1D9",
];

/// Normalized, validated input for the search strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Usable subjects (first `subject_count` course subjects).
    pub subjects: Vec<String>,
    /// Usable faculty (first `faculty_count` course faculty).
    pub faculty: Vec<String>,
    /// Usable rooms.
    pub rooms: Vec<String>,
    /// Working days in configured order.
    pub days: Vec<Weekday>,
    /// Daily slot grid.
    pub time_slots: Vec<TimeSlot>,
    /// Number of batches.
    pub batch_count: usize,
    /// Target weekly occurrences per subject.
    pub weekly_frequency: usize,
    /// Requested strategy.
    pub algorithm: Algorithm,
}

impl Problem {
    /// Validates a request and resolves it into a problem.
    pub fn from_request(request: &GenerationRequest) -> Result<Self, GenerateError> {
        validate_request(request)?;
        let params = &request.parameters;

        let subjects = take_names(&request.course_subjects, params.subject_count as usize);
        let faculty = take_names(&request.course_faculty, params.faculty_count as usize);
        let mut rooms = take_names(&request.rooms, request.rooms.len());
        if rooms.is_empty() {
            rooms = (0..params.classroom_count as usize)
                .map(|i| format!("Room {}", 101 + i))
                .collect();
        }
        let days = params
            .working_days
            .iter()
            .filter_map(|d| Weekday::from_name(d))
            .collect();
        let time_slots = build_time_slots(
            &params.start_time,
            &params.end_time,
            params.max_classes_per_day as usize,
        );

        Ok(Self {
            subjects,
            faculty,
            rooms,
            days,
            time_slots,
            batch_count: params.batch_count as usize,
            weekly_frequency: params.weekly_frequency_per_subject as usize,
            algorithm: params.algorithm(),
        })
    }

    /// Coordinates per batch per week.
    #[inline]
    pub fn slots_per_batch(&self) -> usize {
        self.days.len() * self.time_slots.len()
    }

    /// A fresh all-empty timetable for this problem.
    pub fn empty_timetable(&self) -> Timetable {
        Timetable::empty(self.days.clone(), self.time_slots.clone(), self.batch_count)
    }

    /// Display color for a subject index.
    pub fn color_for(&self, subject_idx: usize) -> &'static str {
        PALETTE[subject_idx % PALETTE.len()]
    }

    /// Faculty member assigned to a subject index (`subject_idx mod |faculty|`).
    pub fn faculty_for(&self, subject_idx: usize) -> &str {
        &self.faculty[subject_idx % self.faculty.len()]
    }

    /// Home room of a batch (`batch_id mod |rooms|`).
    pub fn home_room(&self, batch_id: usize) -> &str {
        &self.rooms[batch_id % self.rooms.len()]
    }

    /// Index of a subject by name.
    pub fn subject_index(&self, subject: &str) -> Option<usize> {
        self.subjects.iter().position(|s| s == subject)
    }

    /// Builds a colored class for a subject index.
    pub fn class_for(&self, subject_idx: usize, faculty: &str, room: &str) -> ClassAssignment {
        ClassAssignment::new(&self.subjects[subject_idx], faculty, room)
            .with_color(self.color_for(subject_idx))
    }
}

/// First `limit` non-blank names, trimmed.
fn take_names(names: &[String], limit: usize) -> Vec<String> {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::GenerationParameters;
    use crate::validation::ValidationErrorKind;

    /// Small problem shared by algorithm tests: 3 subjects, 2 faculty,
    /// 2 rooms, 2 batches, 5 days × 5 slots.
    pub(crate) fn sample_problem() -> Problem {
        let params = GenerationParameters::default()
            .with_batch_count(2)
            .with_classroom_count(2)
            .with_counts(3, 2)
            .with_frequency(2)
            .with_hours("09:00", "14:00", 6);
        let request = GenerationRequest::new(
            ["Math", "Physics", "Chemistry"],
            ["Dr. X", "Dr. Y"],
            params,
        );
        Problem::from_request(&request).unwrap()
    }

    #[test]
    fn test_from_request_resolves_names() {
        let p = sample_problem();
        assert_eq!(p.subjects, ["Math", "Physics", "Chemistry"]);
        assert_eq!(p.faculty, ["Dr. X", "Dr. Y"]);
        assert_eq!(p.rooms, ["Room 101", "Room 102"]);
        assert_eq!(p.days.len(), 5);
        assert_eq!(p.time_slots.len(), 5);
        assert_eq!(p.slots_per_batch(), 25);
        assert_eq!(p.algorithm, Algorithm::Hybrid);
    }

    #[test]
    fn test_counts_limit_lists() {
        let params = GenerationParameters::default().with_counts(2, 1);
        let request = GenerationRequest::new(["A", "", "B", "C"], [" X ", "Y"], params);
        let p = Problem::from_request(&request).unwrap();
        assert_eq!(p.subjects, ["A", "B"]);
        assert_eq!(p.faculty, ["X"]);
    }

    #[test]
    fn test_explicit_rooms() {
        let request = GenerationRequest::new(["A"], ["X"], GenerationParameters::default())
            .with_rooms(["Physics Lab", "Hall 2"]);
        let p = Problem::from_request(&request).unwrap();
        assert_eq!(p.rooms, ["Physics Lab", "Hall 2"]);
        assert_eq!(p.home_room(3), "Hall 2");
    }

    #[test]
    fn test_round_robin_helpers() {
        let p = sample_problem();
        assert_eq!(p.faculty_for(0), "Dr. X");
        assert_eq!(p.faculty_for(2), "Dr. X");
        assert_eq!(p.home_room(1), "Room 102");
        let class = p.class_for(1, "Dr. Y", "Room 101");
        assert_eq!(class.subject, "Physics");
        assert_eq!(class.display_color, PALETTE[1]);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let params = GenerationParameters::default().with_working_days(&[]);
        let request = GenerationRequest::new(["A"], ["X"], params);
        match Problem::from_request(&request) {
            Err(GenerateError::InvalidConfiguration(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::EmptyWorkingDays));
            }
            other => panic!("expected invalid configuration, got {other:?}"),
        }
    }
}
