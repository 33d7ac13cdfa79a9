//! Input validation for generation requests.
//!
//! Every check runs before any search begins, and every problem found is
//! reported rather than only the first. Detects:
//! - Malformed `"HH:MM"` times and inverted time windows
//! - Empty, unknown, or duplicate working days
//! - Zero counts and over-large daily slot caps
//! - Empty subject or faculty lists
//! - Windows too short to hold a single slot

use std::collections::HashSet;
use std::fmt;

use crate::models::{build_time_slots, parse_hhmm, GenerationRequest, Weekday};

/// Largest accepted `max_classes_per_day`.
pub const MAX_CLASSES_PER_DAY: u32 = 12;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A time is not a two-digit `"HH:MM"` string.
    MalformedTime,
    /// Start time is not before end time.
    InvalidTimeRange,
    /// No working days were given.
    EmptyWorkingDays,
    /// A working day name is not recognized.
    UnknownDay,
    /// A working day appears more than once.
    DuplicateDay,
    /// A count that must be at least 1 is zero.
    NonPositiveCount,
    /// `max_classes_per_day` exceeds [`MAX_CLASSES_PER_DAY`].
    TooManyClassesPerDay,
    /// No course subjects were given.
    EmptySubjects,
    /// No course faculty were given.
    EmptyFaculty,
    /// The time window cannot hold a single slot.
    EmptySlotGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Failure of a generation call.
///
/// The only failure mode is a rejected request; once a search starts it
/// always returns a best-effort timetable.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The request failed validation.
    InvalidConfiguration(Vec<ValidationError>),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidConfiguration(errors) => {
                write!(f, "invalid configuration: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<Vec<ValidationError>> for GenerateError {
    fn from(errors: Vec<ValidationError>) -> Self {
        GenerateError::InvalidConfiguration(errors)
    }
}

/// Validates a generation request.
///
/// Checks:
/// 1. Working days are non-empty, recognized, and unique
/// 2. Start and end times are well-formed and `start < end`
/// 3. `max_classes_per_day` is in `1..=12`
/// 4. Batch, subject, faculty, frequency, and classroom counts are at least 1
///    (classroom count is ignored when explicit rooms are given)
/// 5. Subject and faculty lists contain at least one non-blank name
/// 6. The time window holds at least one full slot
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let params = &request.parameters;

    // Working days
    if params.working_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkingDays,
            "At least one working day is required",
        ));
    }
    let mut seen = HashSet::new();
    for name in &params.working_days {
        match Weekday::from_name(name) {
            Some(day) => {
                if !seen.insert(day) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateDay,
                        format!("Duplicate working day: {name}"),
                    ));
                }
            }
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Unknown working day: {name}"),
            )),
        }
    }

    // Time window
    let start = parse_hhmm(&params.start_time);
    let end = parse_hhmm(&params.end_time);
    if start.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MalformedTime,
            format!("Malformed start time: '{}'", params.start_time),
        ));
    }
    if end.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MalformedTime,
            format!("Malformed end time: '{}'", params.end_time),
        ));
    }
    let range_ok = match (start, end) {
        (Some(s), Some(e)) if s >= e => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Start time {} must be before end time {}",
                    params.start_time, params.end_time
                ),
            ));
            false
        }
        (Some(_), Some(_)) => true,
        _ => false,
    };

    // Counts
    let mut counts = vec![
        ("batchCount", params.batch_count),
        ("subjectCount", params.subject_count),
        ("facultyCount", params.faculty_count),
        ("weeklyFrequencyPerSubject", params.weekly_frequency_per_subject),
        ("maxClassesPerDay", params.max_classes_per_day),
    ];
    if !request.rooms.iter().any(|r| !r.trim().is_empty()) {
        counts.push(("classroomCount", params.classroom_count));
    }
    for (field, value) in counts {
        if value == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCount,
                format!("{field} must be at least 1"),
            ));
        }
    }
    if params.max_classes_per_day > MAX_CLASSES_PER_DAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyClassesPerDay,
            format!(
                "maxClassesPerDay is {} (limit {MAX_CLASSES_PER_DAY})",
                params.max_classes_per_day
            ),
        ));
    }

    // Course lists
    if !request.course_subjects.iter().any(|s| !s.trim().is_empty()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySubjects,
            "At least one course subject is required",
        ));
    }
    if !request.course_faculty.iter().any(|s| !s.trim().is_empty()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyFaculty,
            "At least one course faculty member is required",
        ));
    }

    // Slot grid
    if range_ok
        && params.max_classes_per_day > 0
        && build_time_slots(
            &params.start_time,
            &params.end_time,
            params.max_classes_per_day as usize,
        )
        .is_empty()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlotGrid,
            format!(
                "Window {}-{} cannot hold a one-hour slot",
                params.start_time, params.end_time
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
