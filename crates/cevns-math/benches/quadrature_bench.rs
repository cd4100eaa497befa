use cevns_math::quadrature::{integrate_adaptive, integrate_with_breakpoints, QuadratureConfig};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Exponential-polynomial shaped like a reactor spectrum, in keV.
fn spectrum_like(e_kev: f64) -> f64 {
    let e = (e_kev / 1000.0).max(1.0);
    (3.217 - 3.111 * e + 1.395 * e * e - 0.369 * e.powi(3) + 0.04445 * e.powi(4)
        - 0.002053 * e.powi(5))
    .exp()
        * 1e-3
}

fn bench_smooth(c: &mut Criterion) {
    let cfg = QuadratureConfig::default();
    c.bench_function("gk15_gaussian_0_50", |b| {
        b.iter(|| integrate_adaptive(|x| (-x * x).exp(), 0.0, black_box(50.0), &cfg))
    });
}

fn bench_wide_domain(c: &mut Criterion) {
    let cfg = QuadratureConfig::default();

    let mut group = c.benchmark_group("spectrum_0_1e6_kev");
    group.bench_function("single_interval", |b| {
        b.iter(|| integrate_adaptive(spectrum_like, 0.0, black_box(1.0e6), &cfg))
    });
    group.bench_function("decade_breakpoints", |b| {
        b.iter(|| {
            integrate_with_breakpoints(
                spectrum_like,
                black_box(&[0.0, 1.0e3, 1.0e4, 1.0e5, 1.0e6]),
                &cfg,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_smooth, bench_wide_domain);
criterion_main!(benches);
