//! Criterion benchmarks for the spanning-tree algorithms.
//! Focus sizes: n in {6, 8, 10}; the exact searches dominate quickly.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kinetic_mst::api::{
    branch_and_bound, draw_point_set, enforce_general_position, kruskal, moving_kruskal,
    optimal_slow, GenBounds, PointSet, ReplayToken,
};

fn sample_points(n: usize, seed: u64) -> PointSet {
    let bounds = GenBounds::default();
    let mut rng = ReplayToken {
        seed,
        index: n as u64,
    }
    .to_std_rng();
    let mut set = draw_point_set(n, bounds, &mut rng);
    enforce_general_position(&mut set, bounds, &mut rng);
    set
}

fn bench_spanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning");
    for &n in &[6usize, 8, 10] {
        group.bench_with_input(BenchmarkId::new("kruskal", n), &n, |b, &n| {
            b.iter_batched(
                || sample_points(n, 43),
                |set| {
                    let _res = kruskal(&set);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("moving_kruskal", n), &n, |b, &n| {
            b.iter_batched(
                || sample_points(n, 43),
                |set| {
                    let _res = moving_kruskal(&set);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("optimal_slow", n), &n, |b, &n| {
            b.iter_batched(
                || sample_points(n, 43),
                |set| {
                    let _res = optimal_slow(&set);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("branch_and_bound", n), &n, |b, &n| {
            b.iter_batched(
                || sample_points(n, 43),
                |set| {
                    let _res = branch_and_bound(&set);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_spanning);
criterion_main!(benches);
