//! Common interface of the search strategies.

use rand::Rng;

use crate::constraints::detect_conflicts;
use crate::fitness::FitnessBreakdown;
use crate::models::{Algorithm, Timetable};
use crate::problem::Problem;

/// A timetable construction strategy.
///
/// Implementors provide [`build`](GenerationStrategy::build), which returns
/// an unscored timetable; [`run`](GenerationStrategy::run) finalizes it.
/// Strategies hold only tuning, never per-run state, so one value can
/// serve any number of runs.
pub trait GenerationStrategy {
    /// Tag attached to timetables this strategy produces.
    fn algorithm(&self) -> Algorithm;

    /// Builds a timetable without attaching fitness or conflicts.
    fn build<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Timetable;

    /// Builds and finalizes a timetable.
    fn run<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Timetable {
        let mut timetable = self.build(problem, rng);
        finalize(&mut timetable, self.algorithm());
        timetable
    }
}

/// Attaches fitness, conflicts, and the strategy tag.
pub fn finalize(timetable: &mut Timetable, algorithm: Algorithm) {
    let conflicts = detect_conflicts(timetable);
    let fitness = FitnessBreakdown::with_conflict_count(timetable, conflicts.len()).total;
    timetable.finalize(fitness, conflicts, algorithm);
}
