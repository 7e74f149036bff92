//! Short-bearing load capacity and its inversion
//!
//! The static load carried by the film is the resultant of the Ocvirk
//! short-bearing pressure field integrated over the bush. Written with the
//! modified Sommerfeld number
//!
//! ```text
//! Ss = D ω μ L³ / (8 W c²) = (1 - ε²)² / (ε sqrt(π²(1 - ε²) + 16 ε²))
//! ```
//!
//! it is monotone in the eccentricity ratio, so a bracketed search recovers ε
//! from a prescribed load.

use std::f64::consts::PI;

use log::debug;

use crate::analysis::RootFindingOptions;
use crate::elements::{BearingGeometry, Lubricant};
use crate::error::{BearingError, BearingResult};
use crate::math::roots::{brent, RootError};

/// Lower end of the eccentricity search interval
pub const ECCENTRICITY_SEARCH_MIN: f64 = 1e-6;
/// Upper end of the eccentricity search interval
pub const ECCENTRICITY_SEARCH_MAX: f64 = 1.0 - 1e-6;

/// Modified Sommerfeld number as a function of eccentricity ratio
pub fn sommerfeld_from_eccentricity(eccentricity_ratio: f64) -> f64 {
    let e = eccentricity_ratio;
    let e2 = e * e;
    (1.0 - e2).powi(2) / (e * (PI * PI * (1.0 - e2) + 16.0 * e2).sqrt())
}

/// Modified Sommerfeld number Ss = D ω μ L³ / (8 W c²)
pub fn modified_sommerfeld_number(
    load: f64,
    geometry: &BearingGeometry,
    lubricant: &Lubricant,
    omega: f64,
) -> f64 {
    let c = geometry.radial_clearance();
    geometry.diameter() * omega * lubricant.viscosity * geometry.length.powi(3)
        / (8.0 * load * c * c)
}

/// Static load carried at the given eccentricity ratio
pub fn short_bearing_load(
    eccentricity_ratio: f64,
    geometry: &BearingGeometry,
    lubricant: &Lubricant,
    omega: f64,
) -> f64 {
    if eccentricity_ratio == 0.0 {
        return 0.0;
    }
    let c = geometry.radial_clearance();
    let scale = geometry.diameter() * omega * lubricant.viscosity * geometry.length.powi(3)
        / (8.0 * c * c);
    scale / sommerfeld_from_eccentricity(eccentricity_ratio)
}

/// Short-bearing attitude angle φ = atan(π sqrt(1 - ε²) / (4ε))
pub fn attitude_angle(eccentricity_ratio: f64) -> f64 {
    let e = eccentricity_ratio;
    (PI * (1.0 - e * e).sqrt()).atan2(4.0 * e)
}

/// Eccentricity ratio at which the film carries `load`
///
/// Brent's method over (1e-6, 1 - 1e-6). Fails with
/// [`BearingError::Convergence`] when the load lies outside what the film can
/// carry in that interval or the iteration budget runs out.
pub fn eccentricity_ratio_for_load(
    load: f64,
    geometry: &BearingGeometry,
    lubricant: &Lubricant,
    omega: f64,
    options: &RootFindingOptions,
) -> BearingResult<f64> {
    if !(options.tolerance > 0.0) || options.max_iterations == 0 {
        return Err(BearingError::config(
            "root finding needs a positive tolerance and at least one iteration",
        ));
    }

    // Residual scaled by the target so the tolerance stays meaningful at any load
    let residual = |e: f64| short_bearing_load(e, geometry, lubricant, omega) / load - 1.0;

    let result = brent(
        residual,
        ECCENTRICITY_SEARCH_MIN,
        ECCENTRICITY_SEARCH_MAX,
        options.tolerance,
        options.max_iterations,
    );

    match result {
        Ok(root) => {
            debug!(
                "eccentricity search: load {load} N -> ε = {:.6} in {} iterations",
                root.x, root.iterations
            );
            Ok(root.x)
        }
        Err(RootError::NotBracketed { .. }) => {
            let w_min = short_bearing_load(ECCENTRICITY_SEARCH_MIN, geometry, lubricant, omega);
            let w_max = short_bearing_load(ECCENTRICITY_SEARCH_MAX, geometry, lubricant, omega);
            Err(BearingError::Convergence {
                reason: format!(
                    "load outside achievable range [{w_min:e}, {w_max:e}] N for this geometry and speed"
                ),
                load,
                iterations: 0,
            })
        }
        Err(RootError::MaxIterations { best, iterations }) => Err(BearingError::Convergence {
            reason: format!("iteration budget exhausted, last estimate ε = {best}"),
            load,
            iterations,
        }),
        Err(RootError::NonFinite { x }) => Err(BearingError::Convergence {
            reason: format!("load capacity not finite at ε = {x}"),
            load,
            iterations: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn friswell() -> (BearingGeometry, Lubricant, f64) {
        (
            BearingGeometry::new(0.03, 0.0499, 0.05),
            Lubricant::new(0.1, 860.0),
            157.1,
        )
    }

    #[test]
    fn test_sommerfeld_number_matches_load() {
        let (g, oil, omega) = friswell();
        let w = short_bearing_load(0.2663, &g, &oil, omega);
        assert_relative_eq!(
            modified_sommerfeld_number(w, &g, &oil, omega),
            sommerfeld_from_eccentricity(0.2663),
            max_relative = 1e-12
        );
        assert_relative_eq!(sommerfeld_from_eccentricity(0.2663), 1.0098, max_relative = 1e-3);
    }

    #[test]
    fn test_load_inversion() {
        let (g, oil, omega) = friswell();
        let e = eccentricity_ratio_for_load(525.0, &g, &oil, omega, &RootFindingOptions::default())
            .unwrap();
        assert_relative_eq!(e, 0.2663, max_relative = 1e-3);
        assert_relative_eq!(short_bearing_load(e, &g, &oil, omega), 525.0, max_relative = 1e-9);
    }

    #[test]
    fn test_unreachable_load() {
        let (g, oil, omega) = friswell();
        let err = eccentricity_ratio_for_load(1e-6, &g, &oil, omega, &RootFindingOptions::default())
            .unwrap_err();
        assert!(matches!(err, BearingError::Convergence { .. }));
    }

    #[test]
    fn test_attitude_angle_limits() {
        assert_relative_eq!(attitude_angle(0.0), PI / 2.0);
        assert!(attitude_angle(0.99) < 0.2);
    }
}
