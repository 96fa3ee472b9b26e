//! Criterion benchmarks for full evolutionary runs.
//!
//! Cities are placed on a circle so the optimum (the polygon perimeter) is
//! known and instance generation is deterministic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_salesman::ga::{EvolutionConfig, EvolutionDriver, PopulationFactory, Selector};
use u_salesman::models::Point;
use u_salesman::random::create_rng;

fn ring(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            Point::new(
                (1000.0 * angle.cos()).round() as i32,
                (1000.0 * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution_run");
    group.sample_size(10);

    for (cities, parallel) in [(20usize, false), (50, false), (50, true), (100, true)] {
        let points = ring(cities);
        let config = EvolutionConfig::default()
            .with_parallel(parallel)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(if parallel { "parallel" } else { "sequential" }, cities),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = EvolutionDriver::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for &cities in &[20usize, 100] {
        let points = ring(cities);
        let mut rng = create_rng(42);
        let population = PopulationFactory::create_population(&points, 100, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(cities), &population, |b, pop| {
            b.iter(|| {
                // clone so each iteration starts with an empty fitness memo
                let fresh = pop.clone();
                black_box(Selector::rank(black_box(&fresh), false))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run, bench_rank);
criterion_main!(benches);
