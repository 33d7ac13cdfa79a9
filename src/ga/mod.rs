//! Genetic search building blocks for timetables.
//!
//! Individuals are whole [`Timetable`](crate::models::Timetable) values;
//! fitness comes from [`crate::fitness::evaluate`] (higher is better).
//! The generation loops that drive these operators live in
//! [`crate::scheduler`].
//!
//! # Submodules
//!
//! - [`operators`]: initialization, selection, crossover, and mutation
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod config;
pub mod operators;

pub use config::{GaConfig, HybridConfig};
pub use operators::{
    best_index, day_crossover, random_individual, relocation_mutation, tournament_select,
};
