//! Benchmark: dense Gaussian elimination scaling
//!
//! Measures forward elimination and back substitution separately on
//! diagonally dominant systems of increasing order.
//!
//! Run with:
//!   cargo bench -p math-audio-gauss --bench elimination
//!
//! With parallel row updates:
//!   cargo bench -p math-audio-gauss --bench elimination --features rayon

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_gauss::{EliminationConfig, back_substitute, eliminate, eliminate_with};
use ndarray::{Array1, Array2};
use std::time::Duration;

/// Diagonally dominant test matrix with a deterministic fill
fn test_system(n: usize) -> (Array2<f64>, Array1<f64>) {
    let a = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            n as f64 + 1.0
        } else {
            ((i * 7 + j * 13) % 17) as f64 / 17.0 - 0.5
        }
    });
    let b = Array1::from_shape_fn(n, |i| (i % 5) as f64 - 2.0);
    (a, b)
}

fn bench_eliminate(c: &mut Criterion) {
    let mut group = c.benchmark_group("eliminate");
    group.measurement_time(Duration::from_secs(5));

    for &n in &[16, 64, 256, 512] {
        let (a, b) = test_system(n);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |bench, _| {
            let config = EliminationConfig::default().with_parallel_threshold(usize::MAX);
            bench.iter(|| black_box(eliminate_with(&a, &b, &config).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("default", n), &n, |bench, _| {
            bench.iter(|| black_box(eliminate(&a, &b).unwrap()));
        });
    }

    group.finish();
}

fn bench_back_substitute(c: &mut Criterion) {
    let mut group = c.benchmark_group("back_substitute");

    for &n in &[16, 64, 256, 512] {
        let (a, b) = test_system(n);
        let (r, b_prime) = eliminate(&a, &b).unwrap().into_parts();

        group.bench_with_input(BenchmarkId::new("upper", n), &n, |bench, _| {
            bench.iter(|| black_box(back_substitute(&r, &b_prime).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eliminate, bench_back_substitute);
criterion_main!(benches);
