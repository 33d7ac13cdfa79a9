//! Search tuning for the evolutionary strategies.

/// Configuration for the genetic strategy.
///
/// # Examples
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.elite_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Fraction of each generation carried over unchanged.
    pub elite_fraction: f64,

    /// Draws per tournament (with replacement).
    pub tournament_size: usize,

    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,

    /// Fraction of each batch filled by a random initial individual.
    pub fill_target: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 40,
            generations: 150,
            elite_fraction: 0.25,
            tournament_size: 4,
            mutation_rate: 0.12,
            fill_target: 0.80,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_elite_fraction(mut self, f: f64) -> Self {
        self.elite_fraction = f.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournament_size = n.max(1);
        self
    }

    pub fn with_mutation_rate(mut self, p: f64) -> Self {
        self.mutation_rate = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_fill_target(mut self, f: f64) -> Self {
        self.fill_target = f.clamp(0.0, 1.0);
        self
    }

    /// Individuals kept as elite each generation (at least 1).
    pub fn elite_count(&self) -> usize {
        let n = (self.population_size as f64 * self.elite_fraction).floor() as usize;
        n.clamp(1, self.population_size.max(1))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.elite_fraction >= 1.0 {
            return Err("elite_fraction must be below 1.0".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.fill_target) {
            return Err("fill_target must be in [0, 1]".into());
        }
        Ok(())
    }
}

/// Configuration for the hybrid strategy's refinement loop.
///
/// Each generation replaces the `replace_worst` lowest-fitness individuals
/// with mutated, gap-filled copies of the current best.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridConfig {
    /// Individuals in the population, greedy seed included.
    pub population_size: usize,

    /// Number of refinement generations.
    pub generations: usize,

    /// Individuals replaced per generation.
    pub replace_worst: usize,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            replace_worst: 7,
        }
    }
}

impl HybridConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_replace_worst(mut self, n: usize) -> Self {
        self.replace_worst = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.replace_worst >= self.population_size {
            return Err(format!(
                "replace_worst ({}) must be below population_size ({})",
                self.replace_worst, self.population_size
            ));
        }
        Ok(())
    }
}
