//! Criterion benchmarks for bsm_core distributions and solvers.

use bsm_core::math::distributions::{norm_cdf, norm_pdf};
use bsm_core::math::solvers::{
    expand_bracket, BracketConfig, BrentSolver, DirectedSearchSolver, SolverConfig,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark the normal CDF and PDF across a grid of arguments.
fn bench_distributions(c: &mut Criterion) {
    let xs: Vec<f64> = (0..1000).map(|i| -6.0 + 12.0 * i as f64 / 999.0).collect();

    let mut group = c.benchmark_group("distributions");
    group.bench_function("norm_cdf_1000", |b| {
        b.iter(|| xs.iter().map(|&x| norm_cdf(black_box(x))).sum::<f64>())
    });
    group.bench_function("norm_pdf_1000", |b| {
        b.iter(|| xs.iter().map(|&x| norm_pdf(black_box(x))).sum::<f64>())
    });
    group.finish();
}

/// Benchmark the root finders on a normal quantile.
fn bench_solvers(c: &mut Criterion) {
    let f = |x: f64| norm_cdf(x) - 0.9;
    let config = SolverConfig::new(1e-10, 1e-14, 500);

    let mut group = c.benchmark_group("solvers");
    group.bench_function("brent_quantile", |b| {
        let solver = BrentSolver::new(config);
        b.iter(|| solver.find_root(f, black_box(-5.0), black_box(5.0)))
    });
    group.bench_function("directed_quantile", |b| {
        let solver = DirectedSearchSolver::new(config);
        b.iter(|| solver.find_root(f, black_box(0.0), 0.5, -10.0, 10.0))
    });
    group.bench_function("expand_then_brent", |b| {
        let solver = BrentSolver::new(config);
        let bracket = BracketConfig::new(-50.0, 50.0);
        b.iter(|| {
            let (lo, hi) = expand_bracket(f, black_box(-0.1), black_box(0.1), &bracket)?;
            solver.find_root(f, lo, hi)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_distributions, bench_solvers);
criterion_main!(benches);
