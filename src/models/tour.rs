//! Tour representation.
//!
//! A tour is a permutation of city indices over a shared, immutable city
//! list. Keeping the order as indices (rather than copying points around)
//! means duplicate coordinates stay distinct cities, and the permutation
//! invariant can be checked in O(n).

use std::sync::{Arc, OnceLock};

use super::Point;
use crate::ga::{FitnessEvaluator, FitnessRecord};

/// A closed visiting order over every city exactly once.
///
/// The last city implicitly connects back to the first. Tours created by
/// the same run share one `Arc<[Point]>`; cloning a tour copies only its
/// index order.
///
/// The fitness record is memoized on first evaluation and cleared whenever
/// the order changes through [`swap`](Tour::swap).
///
/// # Examples
///
/// ```
/// use u_salesman::models::{Point, Tour};
///
/// let cities = vec![Point::new(0, 0), Point::new(0, 3), Point::new(4, 0)];
/// let tour = Tour::identity(cities);
/// assert_eq!(tour.order(), &[0, 1, 2]);
/// assert!((tour.distance() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    cities: Arc<[Point]>,
    order: Vec<usize>,
    record: OnceLock<FitnessRecord>,
}

impl Tour {
    /// Creates a tour visiting `cities` in their given order.
    pub fn identity(cities: impl Into<Arc<[Point]>>) -> Self {
        let cities = cities.into();
        let order = (0..cities.len()).collect();
        Self::from_parts(cities, order)
    }

    /// Creates a tour from an explicit visiting order.
    ///
    /// Returns `None` if `order` is not a permutation of `0..cities.len()`.
    pub fn from_order(cities: impl Into<Arc<[Point]>>, order: Vec<usize>) -> Option<Self> {
        let tour = Self::from_parts(cities.into(), order);
        tour.is_valid_permutation().then_some(tour)
    }

    /// Builds a tour without checking the permutation invariant.
    pub(crate) fn from_parts(cities: Arc<[Point]>, order: Vec<usize>) -> Self {
        Self {
            cities,
            order,
            record: OnceLock::new(),
        }
    }

    /// The shared city list this tour permutes.
    pub fn cities(&self) -> &Arc<[Point]> {
        &self.cities
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The city visited at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn city(&self, position: usize) -> Point {
        self.cities[self.order[position]]
    }

    /// Cities in visiting order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.order.iter().map(|&i| self.cities[i])
    }

    /// Collects the cities in visiting order.
    pub fn to_points(&self) -> Vec<Point> {
        self.points().collect()
    }

    /// Exchanges the cities at two positions.
    ///
    /// Clears the memoized fitness unless `a == b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.order.swap(a, b);
        self.record.take();
    }

    /// Total closed-tour length (memoized).
    pub fn distance(&self) -> f64 {
        self.fitness_record().distance
    }

    /// Fitness: inverse of [`distance`](Tour::distance) (memoized).
    pub fn fitness(&self) -> f64 {
        self.fitness_record().fitness
    }

    /// Returns the memoized fitness record, computing it on first use.
    pub fn fitness_record(&self) -> FitnessRecord {
        *self
            .record
            .get_or_init(|| FitnessEvaluator::compute(self))
    }

    /// Returns true if a fitness record is currently cached.
    pub fn is_evaluated(&self) -> bool {
        self.record.get().is_some()
    }

    /// Returns true if the order visits every city index exactly once.
    pub fn is_valid_permutation(&self) -> bool {
        let n = self.cities.len();
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Returns true if both tours permute the same city list.
    pub fn same_cities(&self, other: &Tour) -> bool {
        Arc::ptr_eq(&self.cities, &other.cities) || self.cities == other.cities
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.same_cities(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(0, 10),
            Point::new(10, 10),
            Point::new(10, 0),
        ]
    }

    #[test]
    fn test_identity_order() {
        let tour = Tour::identity(square());
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_empty());
        assert!(tour.is_valid_permutation());
    }

    #[test]
    fn test_from_order_rejects_duplicates() {
        assert!(Tour::from_order(square(), vec![0, 1, 1, 3]).is_none());
    }

    #[test]
    fn test_from_order_rejects_wrong_length() {
        assert!(Tour::from_order(square(), vec![0, 1, 2]).is_none());
        assert!(Tour::from_order(square(), vec![0, 1, 2, 3, 4]).is_none());
    }

    #[test]
    fn test_points_follow_order() {
        let tour = Tour::from_order(square(), vec![2, 0, 3, 1]).expect("valid");
        assert_eq!(
            tour.to_points(),
            vec![
                Point::new(10, 10),
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(0, 10),
            ]
        );
        assert_eq!(tour.city(0), Point::new(10, 10));
    }

    #[test]
    fn test_swap_clears_memo() {
        let mut tour = Tour::identity(square());
        assert!((tour.distance() - 40.0).abs() < 1e-10);
        assert!(tour.is_evaluated());

        tour.swap(1, 2);
        assert!(!tour.is_evaluated());
        assert_eq!(tour.order(), &[0, 2, 1, 3]);
        assert!(tour.distance() > 40.0);
    }

    #[test]
    fn test_self_swap_keeps_memo() {
        let mut tour = Tour::identity(square());
        tour.distance();
        tour.swap(2, 2);
        assert!(tour.is_evaluated());
    }

    #[test]
    fn test_duplicate_coordinates_stay_distinct() {
        let cities = vec![Point::new(1, 1), Point::new(1, 1), Point::new(5, 5)];
        let tour = Tour::from_order(cities, vec![1, 0, 2]).expect("valid");
        assert!(tour.is_valid_permutation());
        assert_eq!(tour.len(), 3);
    }

    #[test]
    fn test_clone_shares_cities() {
        let tour = Tour::identity(square());
        let cloned = tour.clone();
        assert!(Arc::ptr_eq(tour.cities(), cloned.cities()));
        assert_eq!(tour, cloned);
    }
}
