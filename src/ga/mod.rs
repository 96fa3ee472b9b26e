//! Genetic algorithm for closed tours.
//!
//! Evolves a fixed-size population of [`Tour`](crate::models::Tour)s using
//! elitism, roulette-wheel selection, ordered crossover, and swap mutation.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Run parameters (population, elites, mutation rate, generations)
//! - [`EvolutionDriver`]: Executes the generational loop
//! - [`EvolutionResult`]: Best final tour with per-generation statistics
//! - [`FitnessEvaluator`]: Tour length and inverse-length fitness
//! - [`PopulationFactory`]: Random initial tours
//! - [`Selector`]: Ranking, elitist + roulette selection, mating pool
//!
//! # Submodules
//!
//! - [`operators`]: Ordered crossover, breeding, and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
mod fitness;
pub mod operators;
mod population;
mod runner;
mod selection;

pub use config::{
    EvolutionConfig, DEFAULT_ELITE_SIZE, DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE,
    DEFAULT_POPULATION_SIZE,
};
pub use error::ConfigError;
pub use fitness::{FitnessEvaluator, FitnessRecord, ZERO_DISTANCE_FITNESS};
pub use operators::{
    breed_population, crossover_segment, ordered_crossover, swap_mutate, swap_mutate_all,
};
pub use population::{Population, PopulationFactory};
pub use runner::{solve, EvolutionDriver, EvolutionResult};
pub use selection::{RankedPopulation, RankedTour, RouletteWheel, Selector};
