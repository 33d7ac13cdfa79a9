//! Gap-filling post-optimizer.
//!
//! Fills empty coordinates with the batch's least-represented subjects
//! while always keeping at least one free slot per batch per week, and
//! repairs faculty conflicts by relocating one of the colliding classes.
//!
//! # Algorithm (per batch)
//!
//! 1. `fillable = min(empty, (capacity − 1) − filled)`
//! 2. For the first `fillable` empty coordinates (day-major), pick the
//!    subject with the lowest count in this batch (uniform random among
//!    ties), teach it with `faculty[subject_idx mod |faculty|]` in the
//!    batch's home room.
//! 3. Place only if the constraint checker accepts; otherwise leave the
//!    coordinate empty (no retry with another subject).

use log::trace;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::constraints::{detect_conflicts, is_valid_assignment, Placement};
use crate::models::{ConflictKind, Coord, Timetable};
use crate::problem::Problem;

/// Fill + repair passes run by [`intensive_gap_fill`].
pub const INTENSIVE_PASSES: usize = 3;

/// Runs one gap-filling pass over every batch.
///
/// Returns the number of classes placed.
pub fn fill_gaps<R: Rng + ?Sized>(timetable: &mut Timetable, problem: &Problem, rng: &mut R) -> usize {
    let mut placed = 0;
    for batch_idx in 0..timetable.batches.len() {
        placed += fill_batch(timetable, problem, batch_idx, rng);
    }
    placed
}

fn fill_batch<R: Rng + ?Sized>(
    timetable: &mut Timetable,
    problem: &Problem,
    batch_idx: usize,
    rng: &mut R,
) -> usize {
    let batch = &timetable.batches[batch_idx];
    let max_allowed = batch.capacity().saturating_sub(1);
    let filled = batch.filled_count();
    let empties = batch.empty_coords();
    let fillable = empties.len().min(max_allowed.saturating_sub(filled));
    if fillable == 0 || problem.subjects.is_empty() {
        return 0;
    }

    let mut counts: Vec<usize> = {
        let present = batch.subject_counts();
        problem
            .subjects
            .iter()
            .map(|s| present.get(s.as_str()).copied().unwrap_or(0))
            .collect()
    };
    let room = problem.home_room(batch.id).to_string();

    let mut placed = 0;
    for coord in empties.into_iter().take(fillable) {
        let Some(subject_idx) = least_used_subject(&counts, rng) else {
            break;
        };
        let class = problem.class_for(subject_idx, problem.faculty_for(subject_idx), &room);
        if is_valid_assignment(timetable, &Placement::new(batch_idx, coord, &class)) {
            timetable.batches[batch_idx].set(coord, class);
            counts[subject_idx] += 1;
            placed += 1;
        } else {
            trace!(
                "gap fill rejected {} for batch {batch_idx} at {:?}",
                class.subject,
                coord
            );
        }
    }
    placed
}

/// Index of a minimum-count subject, uniform random among ties.
fn least_used_subject<R: Rng + ?Sized>(counts: &[usize], rng: &mut R) -> Option<usize> {
    let min = *counts.iter().min()?;
    let tied: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|(_, &n)| n == min)
        .map(|(i, _)| i)
        .collect();
    tied.choose(rng).copied()
}

/// Repairs faculty conflicts by relocating one of the two colliding
/// classes to an empty, admissible coordinate in its own batch.
///
/// For each faculty conflict the higher batch's class is tried first, then
/// the lower one; the first admissible coordinate (day-major) wins. Room
/// conflicts are left alone.
///
/// Returns the number of classes moved.
pub fn resolve_conflicts_by_swapping(timetable: &mut Timetable) -> usize {
    let mut moved = 0;
    for conflict in detect_conflicts(timetable) {
        if conflict.kind != ConflictKind::FacultyConflict {
            continue;
        }
        let (a, b) = conflict.batch_ids;
        let coord = conflict.coord;

        // An earlier move may already have cleared this collision.
        let still_colliding = match (timetable.class_at(a, coord), timetable.class_at(b, coord)) {
            (Some(x), Some(y)) => x.faculty == y.faculty,
            _ => false,
        };
        if !still_colliding {
            continue;
        }

        if relocate_to_valid(timetable, b, coord) || relocate_to_valid(timetable, a, coord) {
            moved += 1;
        }
    }
    moved
}

fn relocate_to_valid(timetable: &mut Timetable, batch_idx: usize, from: Coord) -> bool {
    let Some(class) = timetable.class_at(batch_idx, from).cloned() else {
        return false;
    };
    let target = timetable.batches[batch_idx]
        .empty_coords()
        .into_iter()
        .find(|&to| is_valid_assignment(timetable, &Placement::new(batch_idx, to, &class)));
    match target {
        Some(to) => timetable.batches[batch_idx].relocate(from, to),
        None => false,
    }
}

/// Three rounds of [`fill_gaps`] each followed by
/// [`resolve_conflicts_by_swapping`].
pub fn intensive_gap_fill<R: Rng + ?Sized>(
    timetable: &mut Timetable,
    problem: &Problem,
    rng: &mut R,
) {
    for pass in 0..INTENSIVE_PASSES {
        let placed = fill_gaps(timetable, problem, rng);
        let moved = resolve_conflicts_by_swapping(timetable);
        trace!("intensive pass {pass}: placed {placed}, relocated {moved}");
    }
}
