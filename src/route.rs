//! Request-level entry point.
//!
//! Takes cities in request order and returns them in tour order, using the
//! fixed run parameters of [`EvolutionConfig::default`].

use crate::ga::{ConfigError, EvolutionConfig, EvolutionDriver};
use crate::models::Point;

/// A list of cities to visit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Cities in request order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cities: Vec<Point>,
}

/// Returns `cities` reordered along the shortest tour found.
///
/// Runs with population 100, 20 elites, mutation rate 0.01, and 50
/// generations.
///
/// # Examples
///
/// ```
/// use u_salesman::models::Point;
/// use u_salesman::route::fastest_route;
///
/// let cities = vec![Point::new(1, 2), Point::new(3, 4), Point::new(4, 5)];
/// let route = fastest_route(&cities).unwrap();
/// assert_eq!(route.len(), 3);
/// ```
pub fn fastest_route(cities: &[Point]) -> Result<Vec<Point>, ConfigError> {
    let result = EvolutionDriver::run(cities, &EvolutionConfig::default())?;
    Ok(result.best.to_points())
}

impl RouteRequest {
    /// Solves this request with [`fastest_route`].
    pub fn solve(&self) -> Result<Vec<Point>, ConfigError> {
        fastest_route(&self.cities)
    }
}
