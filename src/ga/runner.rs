//! Generational driver.
//!
//! [`EvolutionDriver`] runs the full search:
//! initialization → (rank → select → breed → mutate) × generations → rank.

use rand::Rng;
use tracing::{debug, info, instrument};

use super::config::EvolutionConfig;
use super::error::ConfigError;
use super::operators::{breed_population, swap_mutate_all};
use super::population::{Population, PopulationFactory};
use super::selection::Selector;
use crate::models::{Point, Tour};
use crate::random::rng_from_seed;

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The top-ranked tour of the final population.
    pub best: Tour,

    /// Total length of `best`.
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Shortest tour length in the initial population, then after each
    /// generation (`generations + 1` entries).
    pub distance_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use u_salesman::ga::{EvolutionConfig, EvolutionDriver};
/// use u_salesman::models::Point;
///
/// let cities = vec![
///     Point::new(0, 0),
///     Point::new(0, 10),
///     Point::new(10, 10),
///     Point::new(10, 0),
/// ];
/// let config = EvolutionConfig::new(20, 2, 0.02, 10).with_seed(42);
/// let result = EvolutionDriver::run(&cities, &config).unwrap();
/// assert_eq!(result.best.len(), 4);
/// ```
pub struct EvolutionDriver;

impl EvolutionDriver {
    /// Validates `config` and runs the search with an RNG built from
    /// `config.seed`.
    pub fn run(cities: &[Point], config: &EvolutionConfig) -> Result<EvolutionResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(cities, config, &mut rng)
    }

    /// Validates `config` and runs the search drawing from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Panics
    /// Panics if the final tour is not a permutation of `cities`; that
    /// would be an internal bug.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            cities = cities.len(),
            population_size = config.population_size,
            elite_size = config.elite_size,
            mutation_rate = config.mutation_rate,
            generations = config.generations,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        cities: &[Point],
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult, ConfigError> {
        config.validate(cities)?;

        let mut population =
            PopulationFactory::create_population(cities, config.population_size, rng);

        let mut distance_history = Vec::with_capacity(config.generations + 1);
        distance_history.push(shortest_distance(&population));

        for generation in 0..config.generations {
            population = Self::next_generation(&population, config, rng);

            let best = shortest_distance(&population);
            distance_history.push(best);
            debug!(generation = generation + 1, best_distance = best, "generation complete");
        }

        let ranked = Selector::rank(&population, config.parallel);
        let best = population.swap_remove(ranked[0].index);
        assert!(
            best.is_valid_permutation() && best.len() == cities.len(),
            "evolved tour is not a permutation of the input cities: {:?}",
            best.order()
        );
        let best_distance = best.distance();

        info!(best_distance, generations = config.generations, "evolution finished");

        Ok(EvolutionResult {
            best,
            best_distance,
            generations: config.generations,
            distance_history,
        })
    }

    /// Runs one full generation: rank, select, breed, then mutate every tour.
    pub fn next_generation<R: Rng>(
        population: &[Tour],
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Population {
        let mut next = Self::breed_generation(population, config.elite_size, config.parallel, rng);
        swap_mutate_all(&mut next, config.mutation_rate, rng);
        debug_assert!(next.iter().all(Tour::is_valid_permutation));
        next
    }

    /// Rank, select, and breed without the mutation pass.
    ///
    /// The top `elite_size` tours of `population` occupy the first slots of
    /// the result unchanged.
    pub fn breed_generation<R: Rng>(
        population: &[Tour],
        elite_size: usize,
        parallel: bool,
        rng: &mut R,
    ) -> Population {
        let ranked = Selector::rank(population, parallel);
        let indices = Selector::select(&ranked, elite_size, rng);
        let pool = Selector::materialize(population, &indices);
        breed_population(&pool, elite_size, rng)
    }
}

/// Runs the search with the five run parameters and returns the best tour.
///
/// Uses a fresh random seed and parallel evaluation.
pub fn solve(
    cities: &[Point],
    population_size: usize,
    elite_size: usize,
    mutation_rate: f64,
    generations: usize,
) -> Result<Tour, ConfigError> {
    let config = EvolutionConfig::new(population_size, elite_size, mutation_rate, generations);
    EvolutionDriver::run(cities, &config).map(|result| result.best)
}

fn shortest_distance(population: &[Tour]) -> f64 {
    population
        .iter()
        .map(Tour::distance)
        .fold(f64::INFINITY, f64::min)
}

// ============================================================================
// Tests
// ============================================================================
