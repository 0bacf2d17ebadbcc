//! Benchmarks for unfold/fold (matricization) and the mode-n product.
//!
//! Run with:
//! ```bash
//! cargo bench --bench unfold_fold
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scirs2_core::ndarray_ext::Array2;
use std::hint::black_box;
use tenkit_core::DenseND;

fn ramp(shape: &[usize]) -> DenseND<f64> {
    let total: usize = shape.iter().product();
    DenseND::from_vec((0..total).map(|x| x as f64 / total as f64).collect(), shape).unwrap()
}

/// Benchmark group unfolds, including reversed row groups and flattening
fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold_group");

    let test_cases: Vec<(&str, Vec<usize>, Vec<Vec<usize>>)> = vec![
        ("12x18x24", vec![12, 18, 24], vec![vec![1], vec![0, 2], vec![2, 0]]),
        ("8x8x8x8", vec![8, 8, 8, 8], vec![vec![3], vec![1, 2], vec![3, 0, 1]]),
    ];

    for (name, shape, row_groups) in test_cases {
        let tensor = ramp(&shape);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        for rows in row_groups {
            group.bench_with_input(
                BenchmarkId::new(name, format!("rows_{:?}", rows)),
                &rows,
                |b, rows| {
                    b.iter(|| {
                        let unfolded = tensor.unfold_group(black_box(rows)).unwrap();
                        black_box(unfolded);
                    });
                },
            );
        }

        group.bench_with_input(BenchmarkId::new(name, "vectorize_fold"), &tensor, |b, t| {
            b.iter(|| {
                let mut flat = t.vectorize();
                flat.fold_inplace().unwrap();
                black_box(flat);
            });
        });

        // Unfolding an unfolded tensor works on its matrix form.
        let matricized = tensor.unfold(0).unwrap();
        group.bench_with_input(BenchmarkId::new(name, "reunfold"), &matricized, |b, m| {
            b.iter(|| {
                let again = m.unfold(black_box(1)).unwrap();
                black_box(again);
            });
        });
    }

    group.finish();
}

/// Benchmark roundtrip (unfold → fold) operations
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold_fold_roundtrip");

    let test_cases = vec![
        ("3d_small", vec![10, 20, 30]),
        ("3d_medium", vec![50, 60, 70]),
        ("4d_small", vec![10, 10, 10, 10]),
    ];

    for (name, shape) in test_cases {
        let tensor = ramp(&shape);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &tensor, |b, tensor| {
            b.iter(|| {
                let mut work = tensor.clone();
                work.unfold_inplace(black_box(1)).unwrap();
                work.fold_inplace().unwrap();
                black_box(work);
            });
        });
    }

    group.finish();
}

/// Benchmark the mode-n product on folded and unfolded receivers
fn bench_mode_n_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode_n_product");

    for size in [8usize, 16, 32] {
        let tensor = ramp(&[size, size, size]);
        let matrix = Array2::<f64>::from_elem((size, size), 0.5);
        group.throughput(Throughput::Elements((size * size * size * size) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                for mode in 0..3 {
                    let y = tensor
                        .mode_n_product(black_box(&matrix.view()), mode)
                        .unwrap();
                    black_box(y);
                }
            });
        });

        let unfolded = tensor.unfold_group(&[2, 0]).unwrap();
        group.bench_with_input(BenchmarkId::new("unfolded", size), &unfolded, |b, u| {
            b.iter(|| {
                let y = u.mode_n_product(black_box(&matrix.view()), 1).unwrap();
                black_box(y);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unfold, bench_roundtrip, bench_mode_n_product);

criterion_main!(benches);
