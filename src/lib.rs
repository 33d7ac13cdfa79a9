//! Weekly class timetable generation.
//!
//! Assigns subjects, faculty, and rooms to a (day × time slot) grid for
//! several student batches. Hard constraints forbid a faculty member or a
//! non-lab room from being in two batches at once. Soft objectives reward
//! high utilization, balanced subject counts, few mid-day gaps, and at
//! least one free period per batch per week.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `TimeSlot`, `ClassAssignment`,
//!   `Batch`, `Timetable`, `Conflict`, `GenerationRequest`
//! - **`validation`**: Request checks, run before any search
//! - **`problem`**: Validated, normalized search input
//! - **`constraints`**: Placement admissibility and exhaustive conflict detection
//! - **`fitness`**: Scalar timetable score with per-term breakdown
//! - **`gap_fill`**: Fills under-used slots and repairs faculty clashes
//! - **`ga`**: Genetic operators and search tuning
//! - **`scheduler`**: Greedy, genetic, and hybrid strategies; the entry point; KPIs
//!
//! # Example
//!
//! ```
//! use u_timetable::{GenerationParameters, GenerationRequest, TimetableGenerator};
//!
//! let request = GenerationRequest::new(
//!     ["Math", "Physics", "Chemistry", "Biology", "English"],
//!     ["Dr. X", "Dr. Y", "Dr. Z", "Dr. W", "Dr. V"],
//!     GenerationParameters::default(),
//! );
//! let generation = TimetableGenerator::new().with_seed(1).generate(&request).unwrap();
//! assert_eq!(generation.timetable.batches.len(), 2);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod constraints;
pub mod fitness;
pub mod ga;
pub mod gap_fill;
pub mod models;
pub mod problem;
pub mod scheduler;
pub mod validation;

pub use models::{GenerationParameters, GenerationRequest, Timetable};
pub use scheduler::{Generation, TimetableGenerator};
pub use validation::GenerateError;
