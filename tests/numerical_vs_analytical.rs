//! Numerical Reynolds solution against the closed-form short and long bearing fields

use std::f64::consts::PI;

use approx::assert_relative_eq;
use bearing_solver::prelude::*;

fn rpm_to_rad(rpm: f64) -> f64 {
    rpm * 2.0 * PI / 60.0
}

/// L/D = 0.05
fn short_bearing() -> BearingConfig {
    BearingConfig {
        nz: 8,
        ntheta: 132,
        nradius: 11,
        length: 0.01,
        omega: rpm_to_rad(100.0),
        p_in: 0.0,
        p_out: 0.0,
        radius_rotor: 0.08,
        radius_stator: 0.1,
        viscosity: 0.015,
        density: 860.0,
        beta: Some(PI),
        eccentricity: Some(0.001),
        load: None,
    }
}

/// L/D = 4
fn long_bearing() -> BearingConfig {
    let clearance = 0.000194564;
    let radius_stator = 1.0 + clearance;
    BearingConfig {
        nz: 8,
        ntheta: 132,
        nradius: 11,
        length: 8.0 * radius_stator,
        omega: rpm_to_rad(100.0),
        p_in: 0.0,
        p_out: 0.0,
        radius_rotor: 1.0,
        radius_stator,
        viscosity: 0.015,
        density: 860.0,
        beta: Some(PI),
        eccentricity: Some(0.0001),
        load: None,
    }
}

fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
}

fn mid_plane(field: &bearing_solver::math::Mat, nz: usize) -> Vec<f64> {
    field.row(nz / 2).iter().copied().collect()
}

#[test]
fn short_bearing_mid_plane_pressure() {
    let mut bearing = JournalBearing::new(short_bearing()).unwrap();
    assert_eq!(bearing.bearing_type(), BearingType::Short);

    bearing.solve_numerical().unwrap();
    let numerical = mid_plane(bearing.p_mat_numerical(), bearing.nz());
    let peak = numerical.iter().copied().fold(0.0, f64::max);
    assert!(peak > 0.0);

    for method in [AnalyticalMethod::ShortBearing, AnalyticalMethod::FiniteLength] {
        bearing.solve_analytical(method);
        let analytical = mid_plane(bearing.p_mat_analytical(), bearing.nz());
        let diff = max_abs_diff(&analytical, &numerical);
        assert!(diff < 1e-3, "{method:?}: {diff}");
        assert!(diff < 0.01 * peak, "{method:?}: {diff} against peak {peak}");
    }
}

#[test]
fn short_bearing_forces() {
    let mut bearing = JournalBearing::new(short_bearing()).unwrap();
    bearing.solve_numerical().unwrap();
    bearing.solve_analytical(AnalyticalMethod::ShortBearing);

    let numerical = bearing.oil_film_force(FieldSource::Numerical);
    let analytical = bearing.oil_film_force(FieldSource::Analytical);
    let closed = bearing.closed_form_force(Approximation::Short).unwrap();

    let (n_err, _) = analytical.relative_error(&numerical);
    assert!(n_err <= 0.009, "field normal error {n_err}");

    let (n_err, t_err) = closed.relative_error(&numerical);
    assert!(n_err <= 0.009, "closed-form normal error {n_err}");
    assert!(t_err <= 0.009, "closed-form tangential error {t_err}");
}

/// Relative gap between the long-bearing and numerical mid-plane peaks
fn long_peak_error(config: BearingConfig) -> f64 {
    let mut bearing = JournalBearing::new(config).unwrap();
    assert_eq!(bearing.bearing_type(), BearingType::Long);

    bearing.solve_numerical().unwrap();
    let numerical = mid_plane(bearing.p_mat_numerical(), bearing.nz());
    let numerical_peak = numerical.iter().copied().fold(0.0, f64::max);

    assert_eq!(bearing.solve_analytical(AnalyticalMethod::Auto), AnalyticalMethod::LongBearing);
    let analytical = mid_plane(bearing.p_mat_analytical(), bearing.nz());
    let analytical_peak = analytical.iter().copied().fold(0.0, f64::max);

    (analytical_peak - numerical_peak).abs() / numerical_peak
}

#[test]
fn long_bearing_mid_plane_pressure() {
    // Eight axial nodes put the sampled plane off centre and leave about 3 % discretization error
    let coarse = long_peak_error(long_bearing());
    assert!(coarse < 0.05, "coarse peak error {coarse}");

    let mut refined = long_bearing();
    refined.nz = 32;
    let refined = long_peak_error(refined);
    assert!(refined < coarse, "refined {refined} not below coarse {coarse}");
    assert!(refined < 0.025, "refined peak error {refined}");
}

#[test]
fn long_closed_form_force() {
    let mut config = long_bearing();
    config.nz = 32;
    config.ntheta = 264;
    let mut bearing = JournalBearing::new(config).unwrap();
    bearing.solve_numerical().unwrap();

    let numerical = bearing.oil_film_force(FieldSource::Numerical);
    let closed = bearing.closed_form_force(Approximation::Long).unwrap();
    assert!(closed.normal > 0.0 && closed.tangential > 0.0);

    // At L/D = 4 side leakage still costs the finite film about a fifth of the
    // infinite-bearing normal force, and the gap does not close under refinement
    let (n_err, t_err) = closed.relative_error(&numerical);
    assert!(n_err <= 0.23, "closed-form normal error {n_err}");
    assert!(t_err <= 0.30, "closed-form tangential error {t_err}");
}

#[test]
fn long_bearing_forces() {
    let mut bearing = JournalBearing::new(long_bearing()).unwrap();
    bearing.solve_numerical().unwrap();
    bearing.solve_analytical(AnalyticalMethod::FiniteLength);

    let numerical = bearing.oil_film_force(FieldSource::Numerical);
    let analytical = bearing.oil_film_force(FieldSource::Analytical);

    let (n_err, t_err) = analytical.relative_error(&numerical);
    assert!(n_err <= 0.2, "normal error {n_err}");
    assert!(t_err <= 0.4, "tangential error {t_err}");
}

#[test]
fn iterative_solvers_match_direct() {
    let mut bearing = JournalBearing::new(short_bearing()).unwrap();
    let direct_report = bearing.solve_numerical().unwrap();
    assert_eq!(direct_report.method, NumericalMethod::Direct);
    assert!(direct_report.relative_residual < 1e-8);
    let direct = bearing.p_mat_numerical().clone();
    let scale = direct.max();

    let report = bearing
        .solve_numerical_with(NumericalOptions::conjugate_gradient())
        .unwrap();
    assert_eq!(report.unknowns, 6 * 131);
    assert!(report.iterations > 1);
    assert!((bearing.p_mat_numerical() - &direct).amax() < 1e-6 * scale);

    let report = bearing
        .solve_numerical_with(NumericalOptions::relaxation(1.4))
        .unwrap();
    assert_eq!(report.method, NumericalMethod::Relaxation);
    assert!((bearing.p_mat_numerical() - &direct).amax() < 1e-6 * scale);
}

#[test]
fn exhausted_iteration_budget() {
    let mut bearing = JournalBearing::new(short_bearing()).unwrap();
    let err = bearing
        .solve_numerical_with(NumericalOptions::conjugate_gradient().with_max_iter(2))
        .unwrap_err();
    assert!(matches!(err, BearingError::SolverDivergence { iterations: 2, .. }));
    assert_eq!(bearing.p_mat_numerical().amax(), 0.0);

    let err = bearing
        .solve_numerical_with(NumericalOptions::relaxation(2.5))
        .unwrap_err();
    assert!(matches!(err, BearingError::Configuration(_)));
}

#[test]
fn solves_are_idempotent() {
    let mut bearing = JournalBearing::new(short_bearing()).unwrap();

    bearing.solve_analytical(AnalyticalMethod::FiniteLength);
    let first = bearing.p_mat_analytical().clone();
    bearing.solve_analytical(AnalyticalMethod::FiniteLength);
    assert_eq!(bearing.p_mat_analytical(), &first);

    bearing.solve_numerical().unwrap();
    let first = bearing.p_mat_numerical().clone();
    bearing.solve_numerical().unwrap();
    assert_eq!(bearing.p_mat_numerical(), &first);
}

#[test]
fn supply_pressure_boundaries() {
    let mut config = short_bearing();
    config.p_in = 2.0e3;
    config.p_out = 1.0e3;
    let mut bearing = JournalBearing::new(config).unwrap();
    bearing.solve_numerical().unwrap();
    bearing.solve_analytical(AnalyticalMethod::ShortBearing);

    let last = bearing.nz() - 1;
    for field in [bearing.p_mat_numerical(), bearing.p_mat_analytical()] {
        assert!(field.row(0).iter().all(|&p| p == 2.0e3));
        assert!(field.row(last).iter().all(|&p| p == 1.0e3));
        assert!(field.iter().all(|&p| p >= 0.0));
        // Periodic closure
        let n = bearing.ntheta();
        for i in 0..bearing.nz() {
            assert_relative_eq!(field[(i, 0)], field[(i, n - 1)], max_relative = 1e-9);
        }
    }
}

#[test]
fn rotor_sits_toward_minimum_film() {
    let bearing = JournalBearing::new(short_bearing()).unwrap();
    // β = π puts the widest film at θ = π and the journal centre on +x
    let [x, y] = bearing.rotor_centre();
    assert_relative_eq!(x, 0.001, max_relative = 1e-9);
    assert!(y.abs() < 1e-15);

    let h_min = bearing.film_thickness(0.0);
    let h_max = bearing.film_thickness(PI);
    assert_relative_eq!(h_min, bearing.radial_clearance() - 0.001, max_relative = 1e-9);
    assert_relative_eq!(h_max, bearing.radial_clearance() + 0.001, max_relative = 1e-9);
    assert_eq!(bearing.stator_points().len(), bearing.ntheta());
    assert_eq!(bearing.rotor_points().len(), bearing.ntheta());
}
