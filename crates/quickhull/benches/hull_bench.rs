//! Criterion benchmarks for the hull computation.
//! Focus sizes: n in {100, 1_000, 10_000}, uniform (average case) vs
//! circle (every point extreme).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use quickhull::prelude::*;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("quickhull");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            b.iter_batched(
                || scatter_uniform(n, ReplayToken { seed: 43, index: 0 }),
                |mut points| {
                    let _edges = compute_hull(&mut points, HullCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || scatter_circle(n),
                |mut points| {
                    let _edges = compute_hull(&mut points, HullCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
