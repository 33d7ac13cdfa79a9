//! Genetic strategy.
//!
//! # Algorithm
//!
//! 1. Build `population_size` random individuals ([`random_individual`]).
//! 2. Each generation: score everyone, carry the top `elite_fraction`
//!    unchanged, then breed the rest: two tournament parents, day
//!    crossover, mutation with probability `mutation_rate`, and one
//!    gap-filling pass per child.
//! 3. Take the best of the final generation and run intensive gap filling.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning", Ch. 3

use log::debug;
use rand::Rng;

use super::GenerationStrategy;
use crate::fitness::evaluate;
use crate::ga::{
    best_index, day_crossover, random_individual, relocation_mutation, tournament_select,
    GaConfig,
};
use crate::gap_fill::{fill_gaps, intensive_gap_fill};
use crate::models::{Algorithm, Timetable};
use crate::problem::Problem;

/// Generations between progress log lines.
const LOG_EVERY: usize = 25;

/// Evolutionary strategy over whole timetables.
#[derive(Debug, Clone, Default)]
pub struct Genetic {
    config: GaConfig,
}

impl Genetic {
    /// Creates the strategy with the given tuning.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    /// Tuning in use.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    fn next_generation<R: Rng + ?Sized>(
        &self,
        population: &[Timetable],
        scores: &[f64],
        problem: &Problem,
        rng: &mut R,
    ) -> Vec<Timetable> {
        let size = population.len();
        let mut order: Vec<usize> = (0..size).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut next: Vec<Timetable> = order
            .iter()
            .take(self.config.elite_count())
            .map(|&i| population[i].clone())
            .collect();

        while next.len() < size {
            let a = tournament_select(scores, self.config.tournament_size, rng);
            let b = tournament_select(scores, self.config.tournament_size, rng);
            let mut child = day_crossover(&population[a], &population[b]);
            if rng.random_bool(self.config.mutation_rate) {
                relocation_mutation(&mut child, rng);
            }
            fill_gaps(&mut child, problem, rng);
            next.push(child);
        }
        next
    }
}

impl GenerationStrategy for Genetic {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Genetic
    }

    fn build<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Timetable {
        let size = self.config.population_size.max(1);
        let mut population: Vec<Timetable> = (0..size)
            .map(|_| random_individual(problem, self.config.fill_target, rng))
            .collect();

        for generation in 0..self.config.generations {
            let scores: Vec<f64> = population.iter().map(evaluate).collect();
            if generation % LOG_EVERY == 0 {
                if let Some(best) = best_index(&scores) {
                    debug!("genetic generation {generation}: best fitness {:.2}", scores[best]);
                }
            }
            population = self.next_generation(&population, &scores, problem, rng);
        }

        let scores: Vec<f64> = population.iter().map(evaluate).collect();
        let best = best_index(&scores).unwrap_or(0);
        let mut winner = population.swap_remove(best);
        intensive_gap_fill(&mut winner, problem, rng);
        winner
    }
}
