//! Generation request model.
//!
//! A request carries the course's subjects and faculty plus the
//! parameters of one generation run. Field names are camelCase on the
//! wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search strategy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Evolutionary search.
    Genetic,
    /// Constraint-first greedy placement.
    Constraint,
    /// Greedy seed refined by a cheaper evolutionary loop.
    Hybrid,
}

impl Algorithm {
    /// Parses a recognized tag (case-insensitive).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "genetic" => Some(Algorithm::Genetic),
            "constraint" => Some(Algorithm::Constraint),
            "hybrid" => Some(Algorithm::Hybrid),
            _ => None,
        }
    }

    /// Resolves a tag, falling back to [`Algorithm::Hybrid`] for anything
    /// unrecognized.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Algorithm::Hybrid)
    }

    /// Wire tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Genetic => "genetic",
            Algorithm::Constraint => "constraint",
            Algorithm::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    /// Number of classrooms available.
    pub classroom_count: u32,
    /// Number of student batches.
    pub batch_count: u32,
    /// Number of course subjects to schedule.
    pub subject_count: u32,
    /// Upper bound on daily slots (1..=12).
    pub max_classes_per_day: u32,
    /// Target weekly occurrences per subject.
    pub weekly_frequency_per_subject: u32,
    /// Number of faculty members to draw on.
    pub faculty_count: u32,
    /// Strategy tag: `genetic`, `constraint`, or `hybrid`.
    pub algorithm: String,
    /// First slot start, `"HH:MM"`.
    pub start_time: String,
    /// Day end, `"HH:MM"`.
    pub end_time: String,
    /// Working day names, in display order.
    pub working_days: Vec<String>,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            classroom_count: 4,
            batch_count: 2,
            subject_count: 5,
            max_classes_per_day: 6,
            weekly_frequency_per_subject: 3,
            faculty_count: 5,
            algorithm: Algorithm::Hybrid.tag().to_string(),
            start_time: "09:00".to_string(),
            end_time: "15:00".to_string(),
            working_days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl GenerationParameters {
    /// Resolved strategy (unrecognized tags resolve to hybrid).
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_tag(&self.algorithm)
    }

    /// Sets the strategy tag.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm.tag().to_string();
        self
    }

    /// Sets the number of batches.
    pub fn with_batch_count(mut self, n: u32) -> Self {
        self.batch_count = n;
        self
    }

    /// Sets the number of classrooms.
    pub fn with_classroom_count(mut self, n: u32) -> Self {
        self.classroom_count = n;
        self
    }

    /// Sets subject and faculty counts.
    pub fn with_counts(mut self, subjects: u32, faculty: u32) -> Self {
        self.subject_count = subjects;
        self.faculty_count = faculty;
        self
    }

    /// Sets the weekly frequency per subject.
    pub fn with_frequency(mut self, n: u32) -> Self {
        self.weekly_frequency_per_subject = n;
        self
    }

    /// Sets the daily window and slot cap.
    pub fn with_hours(mut self, start: &str, end: &str, max_per_day: u32) -> Self {
        self.start_time = start.to_string();
        self.end_time = end.to_string();
        self.max_classes_per_day = max_per_day;
        self
    }

    /// Sets the working days.
    pub fn with_working_days(mut self, days: &[&str]) -> Self {
        self.working_days = days.iter().map(|d| d.to_string()).collect();
        self
    }
}

/// Input to one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Course subject names.
    pub course_subjects: Vec<String>,
    /// Course faculty names.
    pub course_faculty: Vec<String>,
    /// Run parameters.
    pub parameters: GenerationParameters,
    /// Explicit room names; when empty, rooms are generated from
    /// `classroom_count`.
    #[serde(default)]
    pub rooms: Vec<String>,
}

impl GenerationRequest {
    /// Creates a request with generated room names.
    pub fn new(
        subjects: impl IntoIterator<Item = impl Into<String>>,
        faculty: impl IntoIterator<Item = impl Into<String>>,
        parameters: GenerationParameters,
    ) -> Self {
        Self {
            course_subjects: subjects.into_iter().map(Into::into).collect(),
            course_faculty: faculty.into_iter().map(Into::into).collect(),
            parameters,
            rooms: Vec::new(),
        }
    }

    /// Sets explicit room names.
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.rooms = rooms.into_iter().map(Into::into).collect();
        self
    }
}
