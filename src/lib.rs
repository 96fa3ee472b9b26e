//! Genetic-algorithm heuristic for the Traveling Salesman Problem.
//!
//! Finds a short closed tour through a set of 2-D integer points by
//! evolving a population of candidate tours:
//!
//! - **Fitness**: inverse of total tour length (closing edge included)
//! - **Selection**: elitism plus fitness-proportional roulette wheel
//! - **Crossover**: ordered crossover (OX) over a random segment
//! - **Mutation**: per-position swap at a fixed rate
//!
//! The search runs for an exact number of generations and returns the best
//! tour of the final population. All randomness flows through an explicit
//! RNG, so runs are reproducible from a seed.
//!
//! # Example
//!
//! ```
//! use u_salesman::ga::{EvolutionConfig, EvolutionDriver};
//! use u_salesman::models::Point;
//!
//! let cities = vec![Point::new(0, 0), Point::new(0, 10), Point::new(10, 10), Point::new(10, 0)];
//! let config = EvolutionConfig::new(50, 5, 0.02, 30).with_seed(42);
//! let result = EvolutionDriver::run(&cities, &config).unwrap();
//! assert_eq!(result.best.len(), 4);
//! ```
//!
//! # Modules
//!
//! - [`models`] — Point and Tour
//! - [`ga`] — Fitness, population, selection, operators, and the driver
//! - [`route`] — Request-level entry point with fixed run parameters
//! - [`random`] — Seeded RNG construction

pub mod ga;
pub mod models;
pub mod random;
pub mod route;
