//! Tour length and fitness evaluation.

use crate::models::Tour;

/// Fitness assigned to a tour whose total length is zero.
///
/// Only reachable when every city shares one coordinate, which
/// [`EvolutionConfig::validate`](super::EvolutionConfig::validate) rejects
/// for full runs. Treated as the maximal fitness instead of dividing by zero.
pub const ZERO_DISTANCE_FITNESS: f64 = f64::MAX;

/// Length and fitness of a single tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessRecord {
    /// Total closed-tour length, `>= 0`.
    pub distance: f64,

    /// `1 / distance`, or [`ZERO_DISTANCE_FITNESS`] when `distance == 0`.
    pub fitness: f64,
}

impl FitnessRecord {
    /// Builds a record from a tour length.
    pub fn from_distance(distance: f64) -> Self {
        let fitness = if distance > 0.0 {
            1.0 / distance
        } else {
            ZERO_DISTANCE_FITNESS
        };
        Self { distance, fitness }
    }
}

/// Computes tour length and inverse-length fitness.
///
/// Results are memoized on the tour itself, so ranking the same population
/// twice within a generation evaluates each tour once.
pub struct FitnessEvaluator;

impl FitnessEvaluator {
    /// Returns the (memoized) fitness record of `tour`.
    pub fn evaluate(tour: &Tour) -> FitnessRecord {
        tour.fitness_record()
    }

    /// Computes the fitness record without consulting the memo.
    pub fn compute(tour: &Tour) -> FitnessRecord {
        FitnessRecord::from_distance(Self::route_distance(tour))
    }

    /// Sum of consecutive edge lengths plus the closing edge back to the start.
    pub fn route_distance(tour: &Tour) -> f64 {
        let n = tour.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| tour.city(i).distance(&tour.city((i + 1) % n)))
            .sum()
    }
}
