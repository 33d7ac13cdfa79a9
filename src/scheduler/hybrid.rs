//! Hybrid strategy: greedy seed refined by a steady-state loop.
//!
//! # Algorithm
//!
//! 1. Build one [`ConstraintFirst`] timetable as the seed.
//! 2. Fill the population with mutated, gap-filled copies of the seed.
//! 3. Each generation, replace the `replace_worst` lowest-fitness
//!    individuals with mutated, gap-filled copies of the current best. The
//!    best and every other survivor are left as they are.
//! 4. Take the best individual and run intensive gap filling.

use log::debug;
use rand::Rng;

use super::{ConstraintFirst, GenerationStrategy};
use crate::fitness::evaluate;
use crate::ga::{best_index, relocation_mutation, HybridConfig};
use crate::gap_fill::{fill_gaps, intensive_gap_fill};
use crate::models::{Algorithm, Timetable};
use crate::problem::Problem;

/// Generations between progress log lines.
const LOG_EVERY: usize = 10;

/// Greedy construction followed by evolutionary refinement.
#[derive(Debug, Clone, Default)]
pub struct Hybrid {
    greedy: ConstraintFirst,
    config: HybridConfig,
}

impl Hybrid {
    /// Creates the strategy with the given tuning.
    pub fn new(config: HybridConfig) -> Self {
        Self {
            greedy: ConstraintFirst::new(),
            config,
        }
    }

    /// Tuning in use.
    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    fn variant_of<R: Rng + ?Sized>(
        parent: &Timetable,
        problem: &Problem,
        rng: &mut R,
    ) -> Timetable {
        let mut variant = parent.clone();
        relocation_mutation(&mut variant, rng);
        fill_gaps(&mut variant, problem, rng);
        variant
    }

    /// Replaces the worst individuals with variants of the best.
    fn step<R: Rng + ?Sized>(
        &self,
        population: &mut [Timetable],
        scores: &[f64],
        problem: &Problem,
        rng: &mut R,
    ) {
        let Some(best) = best_index(scores) else {
            return;
        };
        let mut worst: Vec<usize> = (0..population.len()).filter(|&i| i != best).collect();
        worst.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        let parent = population[best].clone();
        for &i in worst.iter().take(self.config.replace_worst) {
            population[i] = Self::variant_of(&parent, problem, rng);
        }
    }
}

impl GenerationStrategy for Hybrid {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hybrid
    }

    fn build<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Timetable {
        let size = self.config.population_size.max(1);
        let mut population = Vec::with_capacity(size);
        population.push(self.greedy.build(problem, rng));
        while population.len() < size {
            let variant = Self::variant_of(&population[0], problem, rng);
            population.push(variant);
        }

        for generation in 0..self.config.generations {
            let scores: Vec<f64> = population.iter().map(evaluate).collect();
            if generation % LOG_EVERY == 0 {
                if let Some(best) = best_index(&scores) {
                    debug!("hybrid generation {generation}: best fitness {:.2}", scores[best]);
                }
            }
            self.step(&mut population, &scores, problem, rng);
        }

        let scores: Vec<f64> = population.iter().map(evaluate).collect();
        let best = best_index(&scores).unwrap_or(0);
        let mut winner = population.swap_remove(best);
        intensive_gap_fill(&mut winner, problem, rng);
        winner
    }
}
