//! Ranking and mating-pool selection.
//!
//! Selection combines elitism with fitness-proportional (roulette wheel)
//! sampling. The wheel is a prefix-sum table of cumulative fitness
//! percentiles over the ranked population; a uniform draw in `[0, 100)`
//! picks the first rank whose cumulative percentile reaches it.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - De Jong (1975), elitist strategy

use rand::Rng;
use rayon::prelude::*;

use super::fitness::FitnessEvaluator;
use crate::models::Tour;

/// A population member's position and fitness after ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTour {
    /// Index of the tour in the population that was ranked.
    pub index: usize,

    /// Fitness of that tour (higher is better).
    pub fitness: f64,
}

/// Population indices sorted by fitness, best first.
pub type RankedPopulation = Vec<RankedTour>;

/// Fitness-proportional sampler over a ranked population.
///
/// # Examples
///
/// ```
/// use u_salesman::ga::{RankedTour, RouletteWheel};
///
/// let ranked = vec![
///     RankedTour { index: 3, fitness: 4.0 },
///     RankedTour { index: 0, fitness: 1.0 },
/// ];
/// let wheel = RouletteWheel::new(&ranked);
/// assert_eq!(wheel.percentiles(), &[80.0, 100.0]);
/// assert_eq!(wheel.position(50.0), 0);
/// assert_eq!(wheel.position(90.0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    percentiles: Vec<f64>,
}

impl RouletteWheel {
    /// Builds the cumulative percentile table for `ranked`, in rank order.
    ///
    /// Weights are divided by the largest fitness before accumulating. The
    /// percentiles are scale-invariant, and this keeps the sums finite even
    /// when a tour carries the zero-distance sentinel fitness.
    pub fn new(ranked: &[RankedTour]) -> Self {
        let max = ranked.iter().map(|r| r.fitness).fold(0.0, f64::max);
        let weights: Vec<f64> = if max > 0.0 {
            ranked.iter().map(|r| r.fitness / max).collect()
        } else {
            vec![1.0; ranked.len()]
        };

        let mut cumulative = 0.0;
        let sums: Vec<f64> = weights
            .iter()
            .map(|w| {
                cumulative += w;
                cumulative
            })
            .collect();
        let total = cumulative;

        Self {
            percentiles: sums.iter().map(|s| 100.0 * s / total).collect(),
        }
    }

    /// Cumulative fitness percentiles, one per rank.
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// First rank whose cumulative percentile is `>= pick`.
    ///
    /// Picks past the last percentile (floating-point shortfall) map to the
    /// last rank.
    ///
    /// # Panics
    /// Panics if the wheel is empty.
    pub fn position(&self, pick: f64) -> usize {
        assert!(!self.percentiles.is_empty(), "cannot spin an empty wheel");
        self.percentiles
            .partition_point(|&p| p < pick)
            .min(self.percentiles.len() - 1)
    }

    /// Draws a rank position with probability proportional to fitness.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let pick = 100.0 * rng.random::<f64>();
        self.position(pick)
    }
}

/// Ranking, selection, and mating-pool construction.
pub struct Selector;

impl Selector {
    /// Ranks `population` by fitness, best first.
    ///
    /// Ties keep ascending population order. With `parallel`, fitness is
    /// evaluated with rayon; the per-tour memo is write-once, so this is
    /// race-free.
    pub fn rank(population: &[Tour], parallel: bool) -> RankedPopulation {
        let fitnesses: Vec<f64> = if parallel {
            population
                .par_iter()
                .map(|tour| FitnessEvaluator::evaluate(tour).fitness)
                .collect()
        } else {
            population
                .iter()
                .map(|tour| FitnessEvaluator::evaluate(tour).fitness)
                .collect()
        };

        let mut ranked: RankedPopulation = fitnesses
            .into_iter()
            .enumerate()
            .map(|(index, fitness)| RankedTour { index, fitness })
            .collect();
        // stable: equal fitness stays in index order
        ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        ranked
    }

    /// Chooses `ranked.len()` population indices for the mating pool.
    ///
    /// The first `elite_size` entries are the top-ranked indices in rank
    /// order. The rest are roulette-wheel draws with replacement over the
    /// whole ranked population, elites included. When `elite_size` covers
    /// the population, no draws are made.
    pub fn select<R: Rng>(ranked: &[RankedTour], elite_size: usize, rng: &mut R) -> Vec<usize> {
        let n = ranked.len();
        let elite_count = elite_size.min(n);

        let mut selected: Vec<usize> = ranked[..elite_count].iter().map(|r| r.index).collect();
        if elite_count < n {
            let wheel = RouletteWheel::new(ranked);
            selected.extend((elite_count..n).map(|_| ranked[wheel.spin(rng)].index));
        }
        selected
    }

    /// Maps selected indices back to tours.
    ///
    /// The pool may hold repeated tours, since selection draws with
    /// replacement.
    ///
    /// # Panics
    /// Panics if an index is out of bounds.
    pub fn materialize(population: &[Tour], indices: &[usize]) -> Vec<Tour> {
        indices.iter().map(|&i| population[i].clone()).collect()
    }
}
