//! Timetable fitness evaluation.
//!
//! ```text
//! fitness = max(0, 100 − 25·conflicts + utilization − 5·gaps + 8·distribution + bonus)
//! ```
//!
//! | Term | Definition |
//! |------|-----------|
//! | conflicts | Number of detected faculty and room conflicts |
//! | utilization | `50r` if `r ≤ 0.85`, else `42.5 − 20(r − 0.85)`; `r` = fill ratio |
//! | gaps | 2 per interior empty slot (filled slots before and after, same day) |
//! | distribution | `max(0, 15 − variance(subject occurrence counts))` |
//! | bonus | `100 · max(0, r − 0.8)` |
//!
//! Higher is better. Over-filling past 85% is penalized by the utilization
//! term and partly offset by the bonus.

use serde::{Deserialize, Serialize};

use crate::constraints::detect_conflicts;
use crate::models::{Batch, Timetable};

/// Fill ratio beyond which utilization stops rewarding.
pub const TARGET_FILL_RATIO: f64 = 0.85;
/// Fill ratio beyond which the bonus applies.
pub const BONUS_THRESHOLD: f64 = 0.8;

const BASE_SCORE: f64 = 100.0;
const CONFLICT_WEIGHT: f64 = 25.0;
const UTILIZATION_SCALE: f64 = 50.0;
const OVERFILL_PENALTY: f64 = 20.0;
const GAP_WEIGHT: f64 = 5.0;
const GAP_COST: f64 = 2.0;
const DISTRIBUTION_CEILING: f64 = 15.0;
const DISTRIBUTION_WEIGHT: f64 = 8.0;
const BONUS_SCALE: f64 = 100.0;

/// The individual terms of a fitness evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessBreakdown {
    /// Faculty plus room conflicts.
    pub conflict_count: usize,
    /// Filled / total slots over all batches.
    pub fill_ratio: f64,
    /// Utilization term.
    pub utilization_score: f64,
    /// Interior gap penalty (before weighting).
    pub gap_penalty: f64,
    /// Subject balance term (before weighting).
    pub distribution_score: f64,
    /// High-fill bonus.
    pub bonus: f64,
    /// Final fitness, floored at 0.
    pub total: f64,
}

impl FitnessBreakdown {
    /// Evaluates every term for a timetable.
    pub fn calculate(timetable: &Timetable) -> Self {
        let conflict_count = detect_conflicts(timetable).len();
        Self::with_conflict_count(timetable, conflict_count)
    }

    /// Evaluates with a precomputed conflict count.
    pub fn with_conflict_count(timetable: &Timetable, conflict_count: usize) -> Self {
        let fill_ratio = timetable.fill_ratio();
        let utilization_score = utilization_score(fill_ratio);
        let gap_penalty = gap_penalty(timetable);
        let distribution_score = distribution_score(timetable);
        let bonus = (fill_ratio - BONUS_THRESHOLD).max(0.0) * BONUS_SCALE;

        let raw = BASE_SCORE - CONFLICT_WEIGHT * conflict_count as f64 + utilization_score
            - GAP_WEIGHT * gap_penalty
            + DISTRIBUTION_WEIGHT * distribution_score
            + bonus;

        Self {
            conflict_count,
            fill_ratio,
            utilization_score,
            gap_penalty,
            distribution_score,
            bonus,
            total: raw.max(0.0),
        }
    }
}

/// Fitness of a timetable (higher is better, never negative).
pub fn evaluate(timetable: &Timetable) -> f64 {
    FitnessBreakdown::calculate(timetable).total
}

/// Utilization term for a fill ratio.
pub fn utilization_score(fill_ratio: f64) -> f64 {
    if fill_ratio <= TARGET_FILL_RATIO {
        UTILIZATION_SCALE * fill_ratio
    } else {
        TARGET_FILL_RATIO * UTILIZATION_SCALE - (fill_ratio - TARGET_FILL_RATIO) * OVERFILL_PENALTY
    }
}

/// Interior gap penalty summed over all batches and days.
pub fn gap_penalty(timetable: &Timetable) -> f64 {
    timetable
        .batches
        .iter()
        .map(|b| interior_gaps(b) as f64 * GAP_COST)
        .sum()
}

/// Number of empty slots with a filled slot earlier and later the same day.
pub fn interior_gaps(batch: &Batch) -> usize {
    batch
        .schedule
        .iter()
        .map(|day| {
            let first = day.iter().position(Option::is_some);
            let last = day.iter().rposition(Option::is_some);
            match (first, last) {
                (Some(first), Some(last)) => {
                    day[first..=last].iter().filter(|e| e.is_none()).count()
                }
                _ => 0,
            }
        })
        .sum()
}

/// Subject balance term: `max(0, 15 − variance)` over the occurrence counts
/// of subjects present in the timetable.
pub fn distribution_score(timetable: &Timetable) -> f64 {
    let mut counts: Vec<usize> = timetable.subject_counts().into_values().collect();
    // Fixed summation order keeps scores bit-identical across runs.
    counts.sort_unstable();
    let counts: Vec<f64> = counts.into_iter().map(|n| n as f64).collect();
    (DISTRIBUTION_CEILING - variance(&counts)).max(0.0)
}

/// Population variance (0 for an empty slice).
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_time_slots, ClassAssignment, Coord, Weekday};

    fn grid(batches: usize, days: usize, slots_end: &str) -> Timetable {
        Timetable::empty(
            Weekday::ALL[..days].to_vec(),
            build_time_slots("08:00", slots_end, 12),
            batches,
        )
    }

    #[test]
    fn test_pinned_formula_at_target_fill() {
        // 4 days × 5 slots; 17 distinct subjects placed front to back:
        // 85% fill, no interior gaps, zero variance.
        let mut tt = grid(1, 4, "13:00");
        let mut placed = 0;
        for coord in tt.coords().collect::<Vec<_>>() {
            if placed == 17 {
                break;
            }
            tt.batches[0].set(
                coord,
                ClassAssignment::new(format!("S{placed}"), format!("F{placed}"), "Room 101"),
            );
            placed += 1;
        }
        let b = FitnessBreakdown::calculate(&tt);
        assert_eq!(b.conflict_count, 0);
        assert!((b.fill_ratio - 0.85).abs() < 1e-12);
        assert!((b.utilization_score - 42.5).abs() < 1e-9);
        assert_eq!(b.gap_penalty, 0.0);
        assert_eq!(b.distribution_score, 15.0);
        assert!((b.bonus - 5.0).abs() < 1e-9);
        assert!((b.total - 267.5).abs() < 1e-9);
    }

    #[test]
    fn test_utilization_penalizes_overfill() {
        assert!((utilization_score(0.5) - 25.0).abs() < 1e-12);
        assert!((utilization_score(1.0) - (42.5 - 3.0)).abs() < 1e-12);
        assert!(utilization_score(1.0) < utilization_score(0.85));
    }

    #[test]
    fn test_interior_gaps_only() {
        let mut tt = grid(1, 1, "13:00");
        let class = ClassAssignment::new("A", "F", "R");
        // _ X _ _ X  → 2 interior gaps; leading empty is free.
        tt.batches[0].set(Coord::new(0, 1), class.clone());
        tt.batches[0].set(Coord::new(0, 4), class);
        assert_eq!(interior_gaps(&tt.batches[0]), 2);
        assert_eq!(gap_penalty(&tt), 4.0);
    }

    #[test]
    fn test_distribution_variance() {
        let mut tt = grid(1, 1, "13:00");
        // Counts A=3, B=1 → mean 2, variance 1.
        for (s, subject) in ["A", "A", "A", "B"].iter().enumerate() {
            tt.batches[0].set(Coord::new(0, s), ClassAssignment::new(*subject, "F", "R"));
        }
        assert!((distribution_score(&tt) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_conflicts_lower_fitness_and_floor() {
        let mut tt = grid(2, 1, "09:00");
        let at = Coord::new(0, 0);
        tt.batches[0].set(at, ClassAssignment::new("A", "Dr. X", "Room 1"));
        tt.batches[1].set(at, ClassAssignment::new("A", "Dr. X", "Room 2"));
        let with_conflict = FitnessBreakdown::calculate(&tt);
        assert_eq!(with_conflict.conflict_count, 1);

        let forced = FitnessBreakdown::with_conflict_count(&tt, 100);
        assert_eq!(forced.total, 0.0);
    }

    #[test]
    fn test_empty_timetable() {
        let tt = grid(1, 1, "13:00");
        // 100 + 0 − 0 + 8×15 + 0
        assert!((evaluate(&tt) - 220.0).abs() < 1e-12);
    }
}
