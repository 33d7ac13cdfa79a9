//! Genetic operators over whole timetables.
//!
//! An individual is a complete [`Timetable`]; operators clone and edit the
//! batch grids directly rather than going through an intermediate encoding.
//!
//! | Operator | Effect |
//! |----------|--------|
//! | [`random_individual`] | Fills each batch to a target ratio, subjects cycled |
//! | [`tournament_select`] | Best of `k` uniform draws (with replacement) |
//! | [`day_crossover`] | Parent A, plus parent B's classes on back-half days where A is empty |
//! | [`relocation_mutation`] | One batch: move a class to an empty slot, or swap two classes |
//!
//! No operator consults the constraint checker; conflicts introduced here
//! are penalized by fitness and partly repaired by gap filling.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::Timetable;
use crate::problem::Problem;

/// Builds a randomized, utilization-aware individual.
///
/// Each batch receives `floor(capacity × fill_target)` classes. The k-th
/// class teaches `subjects[k mod |subjects|]` with a uniformly random
/// faculty member and room, and goes into the first open coordinate
/// (day-major).
pub fn random_individual<R: Rng + ?Sized>(
    problem: &Problem,
    fill_target: f64,
    rng: &mut R,
) -> Timetable {
    let mut tt = problem.empty_timetable();
    if problem.subjects.is_empty() {
        return tt;
    }
    let fill_target = fill_target.clamp(0.0, 1.0);

    for batch in &mut tt.batches {
        let target = (batch.capacity() as f64 * fill_target).floor() as usize;
        let mut open = batch.empty_coords().into_iter();
        for k in 0..target {
            let Some(coord) = open.next() else {
                break;
            };
            let subject_idx = k % problem.subjects.len();
            let faculty = problem.faculty.choose(rng).map_or("", String::as_str);
            let room = problem.rooms.choose(rng).map_or("", String::as_str);
            batch.set(coord, problem.class_for(subject_idx, faculty, room));
        }
    }
    tt
}

/// Tournament selection over precomputed fitness scores.
///
/// Draws `size` indices uniformly with replacement and returns the one
/// with the highest score; equal scores favor the lower index.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn tournament_select<R: Rng + ?Sized>(scores: &[f64], size: usize, rng: &mut R) -> usize {
    let mut best = rng.random_range(0..scores.len());
    for _ in 1..size.max(1) {
        let idx = rng.random_range(0..scores.len());
        if scores[idx] > scores[best] || (scores[idx] == scores[best] && idx < best) {
            best = idx;
        }
    }
    best
}

/// Single-point crossover on the day axis.
///
/// The child is a copy of `a`. For every day index `>= days / 2`, each
/// coordinate empty in the child takes `b`'s class, if `b` has one.
pub fn day_crossover(a: &Timetable, b: &Timetable) -> Timetable {
    let mut child = a.clone();
    let split = child.days.len() / 2;

    for (batch, donor) in child.batches.iter_mut().zip(&b.batches) {
        for (day, (slots, donor_slots)) in batch
            .schedule
            .iter_mut()
            .zip(&donor.schedule)
            .enumerate()
        {
            if day < split {
                continue;
            }
            for (entry, donor_entry) in slots.iter_mut().zip(donor_slots) {
                if entry.is_none() {
                    entry.clone_from(donor_entry);
                }
            }
        }
    }
    child
}

/// Mutates one uniformly chosen batch.
///
/// A random class moves to a random empty coordinate. When the batch has
/// no empty coordinate, two random filled coordinates swap instead.
/// Returns false when the batch had nothing to move.
pub fn relocation_mutation<R: Rng + ?Sized>(timetable: &mut Timetable, rng: &mut R) -> bool {
    if timetable.batches.is_empty() {
        return false;
    }
    let idx = rng.random_range(0..timetable.batches.len());
    let batch = &mut timetable.batches[idx];

    let filled = batch.filled_coords();
    let Some(&from) = filled.choose(rng) else {
        return false;
    };
    let empty = batch.empty_coords();
    match empty.choose(rng) {
        Some(&to) => batch.relocate(from, to),
        None if filled.len() >= 2 => {
            let a = rng.random_range(0..filled.len());
            let b = rng.random_range(0..filled.len());
            batch.swap(filled[a], filled[b]);
            true
        }
        None => false,
    }
}

/// Index of the highest score; the first one wins ties.
pub fn best_index(scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some(b) if scores[b] >= score => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassAssignment, Coord};
    use crate::problem::tests::sample_problem;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_individual_fill() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let tt = random_individual(&problem, 0.8, &mut rng);

        for batch in &tt.batches {
            assert_eq!(batch.filled_count(), 20);
            // Front-loaded: the last 5 coordinates stay open.
            assert!(batch.filled_coords().iter().all(|c| c.day < 4));
        }
        let counts = tt.batches[0].subject_counts();
        assert_eq!(counts["Math"], 7);
        assert_eq!(counts["Physics"], 7);
        assert_eq!(counts["Chemistry"], 6);
        let first = tt.batches[0].get(Coord::new(0, 0)).unwrap();
        assert!(problem.faculty.contains(&first.faculty));
        assert!(problem.rooms.contains(&first.room));
    }

    #[test]
    fn test_tournament_prefers_best() {
        let scores = [1.0, 5.0, 3.0];
        let mut rng = SmallRng::seed_from_u64(42);
        // Size large enough that index 1 is drawn with near certainty.
        for _ in 0..20 {
            assert_eq!(tournament_select(&scores, 64, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_in_range() {
        let scores = [2.0; 5];
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(tournament_select(&scores, 4, &mut rng) < 5);
        }
    }

    #[test]
    fn test_day_crossover_back_half() {
        let problem = sample_problem();
        let mut a = problem.empty_timetable();
        let mut b = problem.empty_timetable();
        let math = ClassAssignment::new("Math", "Dr. X", "Room 101");
        let phys = ClassAssignment::new("Physics", "Dr. Y", "Room 101");

        a.batches[0].set(Coord::new(3, 0), math.clone());
        b.batches[0].set(Coord::new(3, 0), phys.clone()); // occupied in A: A wins
        b.batches[0].set(Coord::new(3, 1), phys.clone()); // back half, empty in A
        b.batches[0].set(Coord::new(0, 0), phys.clone()); // front half: ignored

        let child = day_crossover(&a, &b);
        assert_eq!(child.batches[0].get(Coord::new(3, 0)), Some(&math));
        assert_eq!(child.batches[0].get(Coord::new(3, 1)), Some(&phys));
        assert!(!child.batches[0].is_filled(Coord::new(0, 0)));
        assert_eq!(child.filled_slots(), 2);
        // Parents untouched.
        assert_eq!(a.filled_slots(), 1);
    }

    #[test]
    fn test_mutation_relocates() {
        let problem = sample_problem();
        let mut tt = problem.empty_timetable();
        tt.batches.truncate(1);
        tt.batches[0].set(Coord::new(0, 0), ClassAssignment::new("Math", "Dr. X", "Room 101"));
        let mut rng = SmallRng::seed_from_u64(42);

        assert!(relocation_mutation(&mut tt, &mut rng));
        assert_eq!(tt.filled_slots(), 1);
        assert!(!tt.batches[0].is_filled(Coord::new(0, 0)));
    }

    #[test]
    fn test_mutation_swaps_when_full() {
        let problem = sample_problem();
        let mut tt = problem.empty_timetable();
        tt.batches.truncate(1);
        let coords: Vec<_> = tt.coords().collect();
        for (i, &c) in coords.iter().enumerate() {
            tt.batches[0].set(c, ClassAssignment::new(format!("S{i}"), "Dr. X", "Room 101"));
        }
        let before = tt.subject_counts().len();
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(relocation_mutation(&mut tt, &mut rng));
        assert_eq!(tt.filled_slots(), 25);
        assert_eq!(tt.subject_counts().len(), before);
    }

    #[test]
    fn test_mutation_on_empty_is_noop() {
        let problem = sample_problem();
        let mut tt = problem.empty_timetable();
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(!relocation_mutation(&mut tt, &mut rng));
    }

    #[test]
    fn test_best_index_first_wins() {
        assert_eq!(best_index(&[1.0, 3.0, 2.0, 3.0]), Some(1));
        assert_eq!(best_index(&[]), None);
    }
}
