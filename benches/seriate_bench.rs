//! Criterion benchmarks for u-seriate.
//!
//! Uses synthetic block-structured matrices so timings reflect the cost
//! of energy evaluation and the annealing loop alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_seriate::{energy, AnnealConfig, AnnealRunner, CorrelationMatrix, DenseEnergy, EnergyEvaluator};

// ===========================================================================
// Synthetic input: `blocks` interleaved sectors of equal size
// ===========================================================================

fn sector_matrix(n: usize, blocks: usize) -> CorrelationMatrix {
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            data[i * n + j] = if i == j {
                1.0
            } else if i % blocks == j % blocks {
                0.6
            } else {
                0.05
            };
        }
    }
    CorrelationMatrix::from_vec(n, data).expect("square by construction")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for &n in &[50usize, 200, 500] {
        let matrix = sector_matrix(n, 8);
        let ordering: Vec<usize> = (0..n).collect();
        let dense = DenseEnergy::new(&matrix, 0.1);

        group.bench_with_input(BenchmarkId::new("pairwise", n), &n, |b, _| {
            b.iter(|| black_box(energy(black_box(&ordering), &matrix, 0.1)))
        });
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, _| {
            b.iter(|| black_box(dense.energy(black_box(&ordering))))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for &n in &[50usize, 150] {
        let matrix = sector_matrix(n, 5);
        let config = AnnealConfig::default()
            .with_cutoff(0.1)
            .with_cooling_rate(0.999)
            .with_max_iterations(2_000)
            .with_tolerance(0.0)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| {
                let result = AnnealRunner::run(black_box(m), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_energy, bench_anneal);
criterion_main!(benches);
