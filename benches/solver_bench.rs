//! Benchmarks for the bearing pressure solvers

use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bearing_solver::prelude::*;

fn create_bearing(nz: usize, ntheta: usize) -> JournalBearing {
    let config = BearingConfig {
        nz,
        ntheta,
        nradius: 11,
        length: 0.01,
        omega: 100.0 * 2.0 * PI / 60.0,
        p_in: 0.0,
        p_out: 0.0,
        radius_rotor: 0.08,
        radius_stator: 0.1,
        viscosity: 0.015,
        density: 860.0,
        beta: Some(PI),
        eccentricity: Some(0.001),
        load: None,
    };
    JournalBearing::new(config).unwrap()
}

fn benchmark_load_inversion(c: &mut Criterion) {
    c.bench_function("friswell_load_to_eccentricity", |b| {
        b.iter(|| {
            let config = BearingConfig {
                nz: 8,
                ntheta: 20,
                nradius: 11,
                length: 0.03,
                omega: 157.1,
                p_in: 0.0,
                p_out: 0.0,
                radius_rotor: 0.0499,
                radius_stator: 0.05,
                viscosity: 0.1,
                density: 860.0,
                beta: None,
                eccentricity: None,
                load: Some(525.0),
            };
            black_box(JournalBearing::new(config).unwrap());
        })
    });
}

fn benchmark_analytical(c: &mut Criterion) {
    let mut bearing = create_bearing(32, 257);
    c.bench_function("analytical_finite_length_32x257", |b| {
        b.iter(|| {
            bearing.solve_analytical(AnalyticalMethod::FiniteLength);
            black_box(bearing.p_mat_analytical());
        })
    });
}

fn benchmark_numerical(c: &mut Criterion) {
    let mut group = c.benchmark_group("reynolds_32x257");
    let cases = [
        ("direct", NumericalOptions::direct()),
        ("conjugate_gradient", NumericalOptions::conjugate_gradient()),
        ("relaxation", NumericalOptions::relaxation(1.8)),
    ];

    for (name, options) in cases {
        let mut bearing = create_bearing(32, 257);
        group.bench_function(name, |b| {
            b.iter(|| {
                bearing.solve_numerical_with(options).unwrap();
                black_box(bearing.p_mat_numerical());
            })
        });
    }
    group.finish();
}

fn benchmark_force_integration(c: &mut Criterion) {
    let mut bearing = create_bearing(32, 257);
    bearing.solve_numerical().unwrap();
    c.bench_function("oil_film_force_simpson_32x257", |b| {
        b.iter(|| black_box(bearing.oil_film_force(FieldSource::Numerical)))
    });
}

criterion_group!(
    benches,
    benchmark_load_inversion,
    benchmark_analytical,
    benchmark_numerical,
    benchmark_force_integration,
);

criterion_main!(benches);
