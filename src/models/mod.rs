//! Timetabling domain models.
//!
//! Provides the data types shared by every search strategy: the slot
//! grid, the per-batch schedule container, conflicts, and the request
//! that parameterizes a generation run.
//!
//! # Domain Mappings
//!
//! | u-timetable | Meaning |
//! |-------------|---------|
//! | Batch | Student cohort with its own weekly grid |
//! | Coord | (day, slot) position in a grid |
//! | ClassAssignment | Subject × faculty × room placed at a coord |
//! | Timetable | All batch grids plus fitness and conflicts |

mod conflict;
mod request;
mod slot;
mod timetable;

pub use conflict::{Conflict, ConflictKind, Severity};
pub use request::{Algorithm, GenerationParameters, GenerationRequest};
pub use slot::{build_time_slots, format_hhmm, parse_hhmm, TimeSlot, Weekday, SLOT_MINUTES};
pub use timetable::{Batch, ClassAssignment, Coord, Timetable};
