//! Timetable construction strategies and KPI evaluation.
//!
//! # Strategies
//!
//! | Strategy | Tag | Approach |
//! |----------|-----|----------|
//! | [`ConstraintFirst`] | `constraint` | Priority-ordered greedy placement, checked |
//! | [`Genetic`] | `genetic` | Elitist GA with tournament selection and day crossover |
//! | [`Hybrid`] | `hybrid` | Greedy seed refined by replacing the worst individuals |
//!
//! All three implement [`GenerationStrategy`]; [`TimetableGenerator`] picks
//! one from the request's algorithm tag and reports [`TimetableKpi`].
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod generator;
mod genetic;
mod greedy;
mod hybrid;
mod kpi;
mod strategy;

pub use generator::{Generation, TimetableGenerator};
pub use genetic::Genetic;
pub use greedy::{calculate_optimal_class_count, ConstraintFirst, TARGET_UTILIZATION};
pub use hybrid::Hybrid;
pub use kpi::TimetableKpi;
pub use strategy::{finalize, GenerationStrategy};
