//! Criterion micro-benchmarks for individual layer sampling.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stratum_core::{Coord, ScalarField, VectorField};
use stratum_layers::{BarCycle, HorizontalOscillation};

/// Benchmark: sample every cell of a 100x100 bar cycle.
fn bench_bar_cycle_sample_10k(c: &mut Criterion) {
    let bar = BarCycle::new(0, 100, 255, 255).unwrap();

    c.bench_function("bar_cycle_sample_10k", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for y in 0..100 {
                for x in 0..100 {
                    acc += i64::from(bar.value_at(Coord::new(x, y)));
                }
            }
            black_box(acc);
        });
    });
}

/// Benchmark: sample every cell of a 100x100 oscillation flow.
fn bench_oscillation_sample_10k(c: &mut Criterion) {
    let osc = HorizontalOscillation::new(50);

    c.bench_function("oscillation_sample_10k", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    black_box(osc.value_at(Coord::new(x, y)));
                }
            }
        });
    });
}

/// Benchmark: step a bar cycle through one full period.
fn bench_bar_cycle_period(c: &mut Criterion) {
    c.bench_function("bar_cycle_period_1000", |b| {
        b.iter(|| {
            let mut bar = BarCycle::new(0, 1000, 255, 255).unwrap();
            for _ in 0..1000 {
                bar.step();
            }
            black_box(bar.reference());
        });
    });
}

criterion_group!(
    benches,
    bench_bar_cycle_sample_10k,
    bench_oscillation_sample_10k,
    bench_bar_cycle_period
);
criterion_main!(benches);
