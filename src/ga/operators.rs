//! Breeding and mutation operators for tours.
//!
//! # Crossover
//!
//! - [`ordered_crossover`] (OX): copies a random contiguous segment of the
//!   first parent into the same positions of the child, then fills the
//!   remaining positions with the second parent's cities in its order.
//! - [`breed_population`]: elitism plus one shuffled, front-to-back pairing
//!   of the mating pool.
//!
//! # Mutation
//!
//! - [`swap_mutate`]: per-position swap with a uniformly random position.
//! - [`swap_mutate_all`]: applies [`swap_mutate`] to every tour, elites
//!   included.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::seq::SliceRandom;
use rand::Rng;

use super::population::Population;
use crate::models::Tour;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover producing one child.
///
/// Both cut points are drawn independently as `floor(u * n)` for uniform
/// `u` in `[0, 1)`; the segment is the half-open range between them, so an
/// empty segment (child equals `parent2`) is possible but not forced.
///
/// # Panics
/// Panics if the parents permute different city lists.
pub fn ordered_crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
    let n = parent1.len();
    let a = cut_point(n, rng);
    let b = cut_point(n, rng);
    crossover_segment(parent1, parent2, a.min(b), a.max(b))
}

/// Ordered crossover with an explicit segment `start..end` of `parent1`.
///
/// Positions inside the segment keep `parent1`'s cities; every other
/// position is filled left to right with `parent2`'s cities in order,
/// skipping those already taken from the segment.
///
/// # Examples
///
/// ```
/// use u_salesman::ga::crossover_segment;
/// use u_salesman::models::{Point, Tour};
///
/// let cities: Vec<Point> = (0..4).map(|i| Point::new(i, 0)).collect();
/// let p1 = Tour::from_order(cities.clone(), vec![0, 1, 2, 3]).unwrap();
/// let p2 = Tour::from_order(cities, vec![1, 3, 0, 2]).unwrap();
/// let child = crossover_segment(&p1, &p2, 1, 3);
/// assert_eq!(child.order(), &[3, 1, 2, 0]);
/// ```
///
/// # Panics
/// Panics if the parents permute different city lists or
/// `start > end` or `end > n`.
pub fn crossover_segment(parent1: &Tour, parent2: &Tour, start: usize, end: usize) -> Tour {
    assert!(
        parent1.same_cities(parent2),
        "parents must permute the same cities"
    );
    let n = parent1.len();
    assert!(start <= end && end <= n, "invalid segment {start}..{end} for {n} cities");

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];
    for i in start..end {
        let city = parent1.order()[i];
        child[i] = city;
        in_segment[city] = true;
    }

    let mut donor = parent2.order().iter().filter(|&&c| !in_segment[c]);
    for slot in (0..start).chain(end..n) {
        child[slot] = *donor
            .next()
            .expect("parent2 holds exactly the cities missing from the segment");
    }

    Tour::from_parts(parent1.cities().clone(), child)
}

/// Builds the next population from a mating pool.
///
/// The first `elite_size` pool members are carried over unchanged. The pool
/// is then shuffled once, and child `i` is bred from shuffled tour `i` and
/// shuffled tour `len - 1 - i`.
pub fn breed_population<R: Rng>(pool: &[Tour], elite_size: usize, rng: &mut R) -> Population {
    let n = pool.len();
    let elite_count = elite_size.min(n);

    let mut children: Population = Vec::with_capacity(n);
    children.extend_from_slice(&pool[..elite_count]);

    let mut shuffled: Vec<&Tour> = pool.iter().collect();
    shuffled.shuffle(rng);

    for i in 0..n - elite_count {
        children.push(ordered_crossover(shuffled[i], shuffled[n - 1 - i], rng));
    }
    children
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: each position, with probability `rate`, trades places
/// with a uniformly random position (possibly itself).
pub fn swap_mutate<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) {
    let n = tour.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
        }
    }
}

/// Applies [`swap_mutate`] to every tour in the population.
pub fn swap_mutate_all<R: Rng>(population: &mut [Tour], rate: f64, rng: &mut R) {
    for tour in population.iter_mut() {
        swap_mutate(tour, rate, rng);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Scale first, then truncate: `floor(u * n)` covers all of `0..n`.
fn cut_point<R: Rng>(n: usize, rng: &mut R) -> usize {
    ((rng.random::<f64>() * n as f64) as usize).min(n.saturating_sub(1))
}

// ============================================================================
// Tests
// ============================================================================
