//! Single entry point: request in, finished timetable out.

use std::time::{Duration, Instant};

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{ConstraintFirst, Genetic, GenerationStrategy, Hybrid, TimetableKpi};
use crate::ga::{GaConfig, HybridConfig};
use crate::models::{Algorithm, GenerationRequest, Timetable};
use crate::problem::Problem;
use crate::validation::GenerateError;

/// Outcome of one generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The finished timetable.
    pub timetable: Timetable,
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
    /// Quality indicators of `timetable`.
    pub kpi: TimetableKpi,
}

/// Validates requests and dispatches them to a strategy.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Algorithm, GenerationParameters, GenerationRequest};
/// use u_timetable::scheduler::TimetableGenerator;
///
/// let params = GenerationParameters::default()
///     .with_algorithm(Algorithm::Constraint)
///     .with_counts(3, 2);
/// let request = GenerationRequest::new(["Math", "Physics", "Chemistry"], ["Dr. X", "Dr. Y"], params);
///
/// let generation = TimetableGenerator::new().with_seed(7).generate(&request).unwrap();
/// assert!(generation.timetable.is_finished());
/// assert!(generation.kpi.min_free_slots >= 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    ga: GaConfig,
    hybrid: HybridConfig,
    seed: Option<u64>,
}

impl TimetableGenerator {
    /// Creates a generator with default tuning and an OS-seeded source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the genetic strategy's tuning.
    pub fn with_ga_config(mut self, config: GaConfig) -> Self {
        self.ga = config;
        self
    }

    /// Sets the hybrid strategy's tuning.
    pub fn with_hybrid_config(mut self, config: HybridConfig) -> Self {
        self.hybrid = config;
        self
    }

    /// Fixes the random seed so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates a request and generates a finished timetable.
    ///
    /// Fails only when the request is invalid; any valid request yields a
    /// best-effort timetable, conflicts included.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Generation, GenerateError> {
        let started = Instant::now();
        let problem = Problem::from_request(request)?;
        if Algorithm::parse(&request.parameters.algorithm).is_none() {
            warn!(
                "unrecognized algorithm '{}', falling back to {}",
                request.parameters.algorithm, problem.algorithm
            );
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let timetable = self.run(&problem, &mut rng);
        let elapsed = started.elapsed();
        let kpi = TimetableKpi::calculate(&timetable);

        info!(
            "{} run: {} batches x {} days x {} slots, fitness {:.2}, {} conflicts in {:?}",
            problem.algorithm,
            problem.batch_count,
            problem.days.len(),
            problem.time_slots.len(),
            timetable.fitness.unwrap_or_default(),
            timetable.conflicts.len(),
            elapsed
        );

        Ok(Generation {
            timetable,
            elapsed,
            kpi,
        })
    }

    /// Runs the problem's strategy against a caller-supplied source.
    pub fn run<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Timetable {
        match problem.algorithm {
            Algorithm::Constraint => ConstraintFirst::new().run(problem, rng),
            Algorithm::Genetic => Genetic::new(self.ga.clone()).run(problem, rng),
            Algorithm::Hybrid => Hybrid::new(self.hybrid.clone()).run(problem, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationParameters;

    fn request(algorithm: &str) -> GenerationRequest {
        let mut params = GenerationParameters::default()
            .with_batch_count(2)
            .with_counts(3, 2)
            .with_frequency(2);
        params.algorithm = algorithm.to_string();
        GenerationRequest::new(["Math", "Physics", "Chemistry"], ["Dr. X", "Dr. Y"], params)
    }

    fn fast_generator() -> TimetableGenerator {
        TimetableGenerator::new()
            .with_seed(42)
            .with_ga_config(GaConfig::default().with_population_size(6).with_generations(3))
            .with_hybrid_config(
                HybridConfig::default()
                    .with_population_size(5)
                    .with_generations(3)
                    .with_replace_worst(2),
            )
    }

    #[test]
    fn test_dispatch_by_tag() {
        let generator = fast_generator();
        for (tag, expected) in [
            ("constraint", Algorithm::Constraint),
            ("genetic", Algorithm::Genetic),
            ("hybrid", Algorithm::Hybrid),
            ("simulated-annealing", Algorithm::Hybrid),
        ] {
            let generation = generator.generate(&request(tag)).unwrap();
            assert_eq!(generation.timetable.algorithm_used, Some(expected), "tag {tag}");
            assert!(generation.timetable.is_finished());
        }
    }

    #[test]
    fn test_grid_fully_defined() {
        let generation = fast_generator().generate(&request("hybrid")).unwrap();
        let tt = &generation.timetable;
        assert_eq!(tt.days.len(), 5);
        assert_eq!(tt.time_slots.len(), 6);
        for batch in &tt.batches {
            assert_eq!(batch.schedule.len(), 5);
            assert!(batch.schedule.iter().all(|day| day.len() == 6));
        }
        assert_eq!(generation.kpi.total_slots, 60);
    }

    #[test]
    fn test_seed_reproducible() {
        let generator = fast_generator();
        let a = generator.generate(&request("genetic")).unwrap();
        let b = generator.generate(&request("genetic")).unwrap();
        assert_eq!(a.timetable, b.timetable);
    }

    #[test]
    fn test_invalid_request() {
        let mut req = request("constraint");
        req.parameters.working_days.clear();
        let err = TimetableGenerator::new().generate(&req).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_conflicts_match_detector() {
        let generation = fast_generator().generate(&request("genetic")).unwrap();
        let tt = &generation.timetable;
        assert_eq!(tt.conflicts, crate::constraints::detect_conflicts(tt));
        assert_eq!(generation.kpi.conflict_count(), tt.conflicts.len());
    }
}
