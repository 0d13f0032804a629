//! Criterion benchmarks for the CVRP solver building blocks.
//!
//! Uses synthetic ring instances to measure construction, descent, and the
//! full hybrid loop at a few instance sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use u_cvrp::{nearest_neighbor, solve, vnd, Instance, Neighborhood, SearchParams, SolverConfig};

/// Customers on a ring around the depot, demands cycling 1..=4.
fn ring_instance(n: usize) -> Instance {
    let mut coords = vec![(0.0, 0.0)];
    let mut demands = vec![0];
    for i in 0..n {
        let angle = i as f64 / n as f64 * std::f64::consts::TAU;
        coords.push((30.0 * angle.cos(), 30.0 * angle.sin()));
        demands.push((i % 4 + 1) as i32);
    }
    Instance::from_coords(&coords, demands, 12).expect("valid instance")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");

    for &n in &[20, 50, 100] {
        let instance = ring_instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, instance| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                black_box(nearest_neighbor(black_box(instance), 0.2, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_vnd(c: &mut Criterion) {
    let mut group = c.benchmark_group("vnd");
    group.sample_size(10);

    let neighborhoods = [
        Neighborhood::Swap,
        Neighborhood::Relocate,
        Neighborhood::TwoOpt,
        Neighborhood::CrossExchange,
    ];
    for &n in &[20, 50] {
        let instance = ring_instance(n);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let start = nearest_neighbor(&instance, 0.8, &mut rng);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, start),
            |b, (instance, start)| {
                b.iter(|| {
                    let mut solution = start.clone();
                    vnd(
                        &mut solution,
                        black_box(instance),
                        &neighborhoods,
                        &SearchParams::default(),
                        50,
                    );
                    black_box(solution)
                })
            },
        );
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for &n in &[20, 40] {
        let instance = ring_instance(n);
        let mut config = SolverConfig::default()
            .with_seed(42)
            .with_annealing_schedule(100.0, 1.0, 0.8, 50);
        config.local_search.max_iterations = 2_000;
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, config),
            |b, (instance, config)| {
                b.iter(|| {
                    let outcome = solve(black_box(instance), black_box(config));
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_vnd, bench_solve);
criterion_main!(benches);
