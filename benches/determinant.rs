//! Benchmarks the Gaussian-elimination path on dense complex matrices.

use std::hint::black_box;

use complex_linalg::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

/// Deterministic dense matrix with a boosted diagonal so elimination never
/// hits the singular short-circuit.
fn dense(n: usize) -> Matrix {
    let mut m = Matrix::zeros(n, n).unwrap();
    for i in 0..n {
        for j in 0..n {
            let diag = if i == j { n as f64 } else { 0.0 };
            let re = ((i * 31 + j * 17) % 13) as f64 - 6.0 + diag;
            let im = ((i * 7 + j * 3) % 5) as f64 - 2.0;
            m.set(i, j, Complex::new(re, im)).unwrap();
        }
    }
    m
}

fn bench_determinant(c: &mut Criterion) {
    for n in [4, 8, 16, 32] {
        let m = dense(n);
        c.bench_function(&format!("determinant_{n}x{n}"), |b| {
            b.iter(|| black_box(&m).determinant().unwrap())
        });
    }
}

criterion_group!(benches, bench_determinant);
criterion_main!(benches);
