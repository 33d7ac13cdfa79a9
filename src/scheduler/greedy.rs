//! Constraint-first greedy construction.
//!
//! # Algorithm
//!
//! 1. Per batch, compute a class target with [`calculate_optimal_class_count`].
//! 2. Expand the target into requests by cycling through the subjects in
//!    rounds; round `r` carries priority `frequency − r`, so rounds past the
//!    weekly frequency rank below every in-frequency request.
//! 3. Sort all requests descending by priority, breaking ties by a random
//!    draw in `[0, 1)` (within frequency) or `[0, 0.5)` (extra rounds).
//! 4. Place each request at the first coordinate (day-major) that is empty
//!    and admissible. Requests with no such coordinate are dropped.
//!
//! Faculty is `faculty[subject mod |faculty|]` and the room is the batch's
//! home room.
//!
//! # Complexity
//! O(n × c × b) for n requests, c coordinates per batch, b batches.

use std::cmp::Ordering;

use log::trace;
use rand::Rng;

use super::GenerationStrategy;
use crate::constraints::{is_valid_assignment, Placement};
use crate::models::{Algorithm, Timetable};
use crate::problem::Problem;

/// Share of a batch's capacity the greedy pass aims to fill.
pub const TARGET_UTILIZATION: f64 = 0.82;

/// Class target for a batch with `capacity` coordinates: 82% of capacity,
/// always leaving at least one coordinate free.
///
/// ```
/// use u_timetable::scheduler::calculate_optimal_class_count;
///
/// assert_eq!(calculate_optimal_class_count(25), 20);
/// assert_eq!(calculate_optimal_class_count(3), 2);
/// assert_eq!(calculate_optimal_class_count(1), 0);
/// ```
pub fn calculate_optimal_class_count(capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let target = (capacity as f64 * TARGET_UTILIZATION).floor() as usize;
    target.min(capacity - 1)
}

#[derive(Debug, Clone, Copy)]
struct AssignmentRequest {
    subject_idx: usize,
    batch: usize,
    priority: i64,
    tie_break: f64,
}

/// Constraint-first greedy strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFirst;

impl ConstraintFirst {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    fn expand_requests<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        rng: &mut R,
    ) -> Vec<AssignmentRequest> {
        let target = calculate_optimal_class_count(problem.slots_per_batch());
        let frequency = problem.weekly_frequency;
        let mut requests = Vec::with_capacity(target * problem.batch_count);

        for batch in 0..problem.batch_count {
            let mut count = 0;
            let mut round = 0;
            while count < target {
                let within = round < frequency;
                for subject_idx in 0..problem.subjects.len() {
                    if count == target {
                        break;
                    }
                    let weight = if within { 1.0 } else { 0.5 };
                    requests.push(AssignmentRequest {
                        subject_idx,
                        batch,
                        priority: frequency as i64 - round as i64,
                        tie_break: rng.random::<f64>() * weight,
                    });
                    count += 1;
                }
                round += 1;
            }
        }

        requests.sort_by(|a, b| match b.priority.cmp(&a.priority) {
            Ordering::Equal => b.tie_break.total_cmp(&a.tie_break),
            other => other,
        });
        requests
    }
}

impl GenerationStrategy for ConstraintFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Constraint
    }

    fn build<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Timetable {
        let mut tt = problem.empty_timetable();
        if problem.subjects.is_empty() {
            return tt;
        }

        for request in self.expand_requests(problem, rng) {
            let class = problem.class_for(
                request.subject_idx,
                problem.faculty_for(request.subject_idx),
                problem.home_room(request.batch),
            );
            let target = tt.coords().find(|&coord| {
                !tt.batches[request.batch].is_filled(coord)
                    && is_valid_assignment(&tt, &Placement::new(request.batch, coord, &class))
            });
            match target {
                Some(coord) => {
                    tt.batches[request.batch].set(coord, class);
                }
                None => trace!(
                    "dropped {} for batch {}: no admissible slot",
                    class.subject,
                    request.batch
                ),
            }
        }
        tt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::detect_conflicts;
    use crate::models::{GenerationParameters, GenerationRequest};
    use crate::problem::tests::sample_problem;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn two_subject_problem(batches: u32) -> Problem {
        let params = GenerationParameters::default()
            .with_counts(2, 1)
            .with_frequency(1)
            .with_batch_count(batches)
            .with_hours("09:00", "14:00", 6);
        let request = GenerationRequest::new(["A", "B"], ["X"], params);
        Problem::from_request(&request).unwrap()
    }

    #[test]
    fn test_optimal_class_count() {
        assert_eq!(calculate_optimal_class_count(0), 0);
        assert_eq!(calculate_optimal_class_count(2), 1);
        assert_eq!(calculate_optimal_class_count(30), 24);
        assert_eq!(calculate_optimal_class_count(72), 59);
    }

    #[test]
    fn test_leaves_free_slot() {
        let problem = two_subject_problem(1);
        let mut rng = SmallRng::seed_from_u64(42);
        let tt = ConstraintFirst::new().build(&problem, &mut rng);

        let batch = &tt.batches[0];
        assert_eq!(batch.capacity(), 25);
        assert!(batch.free_count() >= 1);
        // Single batch, nothing to collide with: the full target lands.
        assert_eq!(batch.filled_count(), 20);
        let counts = batch.subject_counts();
        assert_eq!(counts["A"], 10);
        assert_eq!(counts["B"], 10);
    }

    #[test]
    fn test_in_frequency_requests_first() {
        let problem = two_subject_problem(1);
        let mut rng = SmallRng::seed_from_u64(42);
        let requests = ConstraintFirst::new().expand_requests(&problem, &mut rng);
        assert_eq!(requests.len(), 20);
        assert!(requests[..2].iter().all(|r| r.priority == 1));
        assert!(requests
            .windows(2)
            .all(|w| w[0].priority > w[1].priority
                || (w[0].priority == w[1].priority && w[0].tie_break >= w[1].tie_break)));
    }

    #[test]
    fn test_shared_faculty_never_collides() {
        let problem = two_subject_problem(2);
        let mut rng = SmallRng::seed_from_u64(42);
        let tt = ConstraintFirst::new().build(&problem, &mut rng);

        assert!(detect_conflicts(&tt).is_empty());
        // One faculty member can teach at most once per coordinate.
        assert!(tt.filled_slots() <= 25);
        for batch in &tt.batches {
            assert!(batch.free_count() >= 1);
        }
    }

    #[test]
    fn test_run_finalizes() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let tt = ConstraintFirst::new().run(&problem, &mut rng);
        assert!(tt.is_finished());
        assert_eq!(tt.algorithm_used, Some(Algorithm::Constraint));
        assert_eq!(tt.conflicts, detect_conflicts(&tt));
        for batch in &tt.batches {
            assert_eq!(batch.schedule.len(), 5);
            assert!(batch.schedule.iter().all(|day| day.len() == 5));
        }
    }
}
