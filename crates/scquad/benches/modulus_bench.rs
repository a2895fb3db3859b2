//! Criterion benchmarks for the modulus function, the full parameter solve
//! and the series expansion.
//! Focus digit counts: {15, 30, 60}.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use scquad::geom::AngleParams;
use scquad::modulus::phi;
use scquad::num::Prec;
use scquad::params::solve;
use scquad::root::RootCfg;
use scquad::series::phi_series_coeffs;

fn bench_phi(c: &mut Criterion) {
    let mut group = c.benchmark_group("phi");
    for &digits in &[15u32, 30, 60] {
        group.bench_with_input(BenchmarkId::new("eval", digits), &digits, |b, &digits| {
            let p = Prec::new(digits);
            let tau = AngleParams::new(p, 0.6, 0.7, 0.4);
            let x = p.real(1.37);
            b.iter(|| phi(p, &x, &tau))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    let verts = [
        Vector2::new(-1.0, 2.0),
        Vector2::new(7.0, 5.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 0.0),
    ];
    for &digits in &[15u32, 30] {
        group.bench_with_input(BenchmarkId::new("quad", digits), &digits, |b, &digits| {
            let p = Prec::new(digits);
            let cfg = RootCfg {
                digits,
                ..RootCfg::default()
            };
            b.iter(|| solve(p, verts, cfg).unwrap())
        });
    }
    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    group.sample_size(10);
    for &n in &[8usize, 15] {
        group.bench_with_input(BenchmarkId::new("phi_coeffs", n), &n, |b, &n| {
            let p = Prec::new(30);
            let tau = AngleParams::new(p, 0.5, 0.5, 0.5);
            b.iter(|| phi_series_coeffs(p, n, &tau))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_phi, bench_solve, bench_series);
criterion_main!(benches);
