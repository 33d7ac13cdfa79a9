//! Hard constraints: point admissibility checks and exhaustive conflict
//! detection.
//!
//! Two resources are exclusive per (day, slot) across batches:
//! - **Faculty**: a faculty member teaches at most one batch at a time.
//! - **Room**: a room hosts at most one batch at a time, except labs,
//!   which are shareable.
//!
//! [`is_valid_assignment`] guards placement during construction; it only
//! looks at current state and never backtracks. [`detect_conflicts`]
//! scans a finished timetable and reports every collision as data.

mod checker;
mod detector;

pub use checker::{is_lab_room, is_valid_assignment, Placement};
pub use detector::detect_conflicts;
