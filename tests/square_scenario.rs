//! End-to-end runs over small, known-optimum instances.

use u_salesman::ga::{solve, EvolutionConfig, EvolutionDriver};
use u_salesman::models::{Point, Tour};

fn square() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(0, 10),
        Point::new(10, 10),
        Point::new(10, 0),
    ]
}

fn is_reordering_of(tour: &Tour, cities: &[Point]) -> bool {
    let mut visited = tour.to_points();
    let mut expected = cities.to_vec();
    visited.sort_by_key(|p| (p.x(), p.y()));
    expected.sort_by_key(|p| (p.x(), p.y()));
    visited == expected
}

#[test]
fn square_converges_to_perimeter_across_seeds() {
    let cities = square();
    let runs = 20u64;
    let optimal = (0..runs)
        .filter(|&seed| {
            let config = EvolutionConfig::new(50, 5, 0.02, 30).with_seed(seed);
            let result = EvolutionDriver::run(&cities, &config).expect("valid config");
            (result.best_distance - 40.0).abs() < 1e-9
        })
        .count();
    assert!(
        optimal as u64 >= runs - 1,
        "expected the perimeter tour in nearly every run, got {optimal}/{runs}"
    );
}

#[test]
fn returned_tour_is_size_stable() {
    let cities: Vec<Point> = (0..9).map(|i| Point::new(i * 7 % 11, i * 3 % 5)).collect();
    for (population, elites, rate, generations) in
        [(1, 0, 0.0, 3), (1, 1, 1.0, 3), (10, 10, 0.5, 4), (25, 0, 0.01, 10), (40, 8, 0.2, 0)]
    {
        for _ in 0..3 {
            let tour = solve(&cities, population, elites, rate, generations).expect("valid config");
            assert_eq!(tour.len(), cities.len());
            assert!(tour.is_valid_permutation());
            assert!(is_reordering_of(&tour, &cities));
        }
    }
}

#[test]
fn duplicate_coordinates_survive_evolution() {
    let cities = vec![
        Point::new(2, 2),
        Point::new(2, 2),
        Point::new(8, 1),
        Point::new(5, 9),
        Point::new(5, 9),
    ];
    let config = EvolutionConfig::new(30, 3, 0.1, 25).with_seed(17);
    let result = EvolutionDriver::run(&cities, &config).expect("valid config");
    assert!(is_reordering_of(&result.best, &cities));
}

#[test]
fn distance_history_tracks_every_generation() {
    let cities: Vec<Point> = (0..10).map(|i| Point::new(i * 13 % 17, i * 5 % 23)).collect();
    let config = EvolutionConfig::new(40, 6, 0.01, 25).with_seed(8);
    let result = EvolutionDriver::run(&cities, &config).expect("valid config");
    assert_eq!(result.distance_history.len(), 26);
    assert!(result.distance_history.iter().all(|d| d.is_finite() && *d > 0.0));
    let last = *result.distance_history.last().expect("non-empty");
    assert!((result.best_distance - last).abs() < 1e-9);
}
