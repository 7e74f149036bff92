//! Closed-form solutions of the Reynolds equation
//!
//! Each function returns the hydrodynamic part only; the field builder adds the
//! supply pressure and applies the half-Sommerfeld cut-off.

use crate::analysis::AnalyticalMethod;
use crate::elements::BearingType;
use crate::math::Mat;

use super::FilmProblem;

/// Ocvirk short-bearing pressure at axial position `z` and angle `gamma`
///
/// p = 3 μ ω / c² · (L²/4 - (z - L/2)²) · ε sin γ / (1 + ε cos γ)³
pub fn short_bearing_pressure(problem: &FilmProblem, z: f64, gamma: f64) -> f64 {
    let c = problem.geometry.radial_clearance();
    let l = problem.geometry.length;
    let e = problem.eccentricity_ratio;
    let axial = l * l / 4.0 - (z - l / 2.0).powi(2);

    3.0 * problem.lubricant.viscosity * problem.omega / (c * c) * axial * e * gamma.sin()
        / (1.0 + e * gamma.cos()).powi(3)
}

/// Full Sommerfeld long-bearing pressure at angle `gamma`
///
/// p = 6 μ ω (R/c)² · ε sin γ (2 + ε cos γ) / ((2 + ε²)(1 + ε cos γ)²)
pub fn long_bearing_pressure(problem: &FilmProblem, gamma: f64) -> f64 {
    let e = problem.eccentricity_ratio;
    let cos_g = gamma.cos();

    problem.pressure_scale() * e * gamma.sin() * (2.0 + e * cos_g)
        / ((2.0 + e * e) * (1.0 + e * cos_g).powi(2))
}

/// Short and long solutions combined as p_s p_l / (p_s + p_l)
///
/// Tends to the short solution for narrow bearings and to the long one for wide
/// bearings. Zero wherever either bound is not positive.
pub fn finite_length_pressure(problem: &FilmProblem, z: f64, gamma: f64) -> f64 {
    let ps = short_bearing_pressure(problem, z, gamma);
    let pl = long_bearing_pressure(problem, gamma);
    if ps > 0.0 && pl > 0.0 {
        ps * pl / (ps + pl)
    } else {
        0.0
    }
}

/// Concrete method for `Auto`, chosen from L/D
pub fn resolve_method(method: AnalyticalMethod, bearing_type: BearingType) -> AnalyticalMethod {
    match method {
        AnalyticalMethod::Auto => match bearing_type {
            BearingType::Short => AnalyticalMethod::ShortBearing,
            BearingType::Medium => AnalyticalMethod::FiniteLength,
            BearingType::Long => AnalyticalMethod::LongBearing,
        },
        other => other,
    }
}

/// Build the [z][θ] field for a concrete method
pub fn analytical_field(problem: &FilmProblem, method: AnalyticalMethod) -> Mat {
    let grid = problem.grid;
    let method = resolve_method(method, problem.geometry.bearing_type());

    Mat::from_fn(grid.nz, grid.ntheta, |i, j| {
        if i == 0 {
            return problem.p_in;
        }
        if i == grid.nz - 1 {
            return problem.p_out;
        }

        let z = grid.z(i);
        let gamma = problem.gamma(grid.theta(j));

        let hydrodynamic = match method {
            AnalyticalMethod::ShortBearing => short_bearing_pressure(problem, z, gamma),
            AnalyticalMethod::FiniteLength => finite_length_pressure(problem, z, gamma),
            AnalyticalMethod::LongBearing => long_bearing_pressure(problem, gamma),
            AnalyticalMethod::Auto => unreachable!("resolved above"),
        };

        (problem.supply_pressure(z) + hydrodynamic).max(0.0)
    })
}
