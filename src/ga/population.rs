//! Initial population generation.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Point, Tour};

/// An ordered collection of tours; its size is fixed for a run.
pub type Population = Vec<Tour>;

/// Produces random tours over a city set.
pub struct PopulationFactory;

impl PopulationFactory {
    /// Creates `size` independent, uniformly random tours over `cities`.
    ///
    /// All tours share a single copy of the city list. Duplicate tours are
    /// permitted.
    pub fn create_population<R: Rng>(cities: &[Point], size: usize, rng: &mut R) -> Population {
        let shared: Arc<[Point]> = Arc::from(cities);
        (0..size)
            .map(|_| Self::create_tour(&shared, rng))
            .collect()
    }

    /// Creates one uniformly random tour over `cities`.
    pub fn create_tour<R: Rng>(cities: &Arc<[Point]>, rng: &mut R) -> Tour {
        let mut order: Vec<usize> = (0..cities.len()).collect();
        order.shuffle(rng);
        Tour::from_parts(Arc::clone(cities), order)
    }
}
