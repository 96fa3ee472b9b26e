//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds the five run parameters plus seeding and
//! parallelism switches.

use std::collections::HashSet;

use super::error::ConfigError;
use crate::models::Point;

/// Population size used by [`fastest_route`](crate::route::fastest_route).
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// Elite count used by [`fastest_route`](crate::route::fastest_route).
pub const DEFAULT_ELITE_SIZE: usize = 20;

/// Per-city swap probability used by [`fastest_route`](crate::route::fastest_route).
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Generation count used by [`fastest_route`](crate::route::fastest_route).
pub const DEFAULT_GENERATIONS: usize = 50;

/// Configuration for one evolutionary run.
///
/// Parameters are fixed for the whole run; nothing is adapted between
/// generations.
///
/// # Defaults
///
/// ```
/// use u_salesman::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elite_size, 20);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_salesman::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(50)
///     .with_elite_size(5)
///     .with_mutation_rate(0.02)
///     .with_generations(30)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Number of top-ranked tours carried into the next generation
    /// before mutation.
    ///
    /// Elites are still subject to the mutation pass, so their fitness is
    /// not frozen across generations.
    pub elite_size: usize,

    /// Probability that each position of each tour is swapped (0.0–1.0).
    pub mutation_rate: f64,

    /// Exact number of generations to run. There is no early termination.
    pub generations: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            elite_size: DEFAULT_ELITE_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            generations: DEFAULT_GENERATIONS,
            parallel: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Creates a configuration from the four evolutionary parameters.
    pub fn new(
        population_size: usize,
        elite_size: usize,
        mutation_rate: f64,
        generations: usize,
    ) -> Self {
        Self {
            population_size,
            elite_size,
            mutation_rate,
            generations,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against the city set it will run on.
    pub fn validate(&self, cities: &[Point]) -> Result<(), ConfigError> {
        if self.population_size < 1 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if self.elite_size > self.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                elite_size: self.elite_size,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        let distinct = cities.iter().collect::<HashSet<_>>().len();
        if distinct < 2 {
            return Err(ConfigError::TooFewCities(distinct));
        }
        Ok(())
    }
}
