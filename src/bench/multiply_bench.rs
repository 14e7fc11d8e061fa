//! Criterion benchmark for the reference product.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use densemat::{Matrix, multiply};

fn patterned<T: densemat::Scalar>(size: usize, to_elem: impl Fn(usize) -> T) -> Matrix<T> {
    let data = (0..size * size).map(|i| to_elem(i % 100)).collect();
    Matrix::from_vec(size, size, data).expect("size is positive")
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [16, 64, 128] {
        let a = patterned(size, |v| v as f64);
        let b = patterned(size, |v| v as f64);
        group.bench_with_input(BenchmarkId::new("f64", size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });

        let a = patterned(size, |v| v as i32);
        let b = patterned(size, |v| v as i32);
        group.bench_with_input(BenchmarkId::new("i32", size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
