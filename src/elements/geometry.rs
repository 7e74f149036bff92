//! Bearing geometry: journal, bush and the oil film between them

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Length-to-diameter regime of a bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BearingType {
    /// L/D <= 0.5, side leakage dominates
    Short,
    /// Between the two limits
    Medium,
    /// L/D >= 2, circumferential flow dominates
    Long,
}

/// Largest L/D treated as a short bearing
pub const SHORT_BEARING_MAX_SLENDERNESS: f64 = 0.5;
/// Smallest L/D treated as a long bearing
pub const LONG_BEARING_MIN_SLENDERNESS: f64 = 2.0;

/// Journal (rotor) inside a bush (stator)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BearingGeometry {
    /// Axial length in m
    pub length: f64,
    /// Journal radius in m
    pub radius_rotor: f64,
    /// Bush radius in m
    pub radius_stator: f64,
}

impl BearingGeometry {
    /// Create a new geometry
    pub fn new(length: f64, radius_rotor: f64, radius_stator: f64) -> Self {
        Self {
            length,
            radius_rotor,
            radius_stator,
        }
    }

    /// Radial clearance c = R_stator - R_rotor
    pub fn radial_clearance(&self) -> f64 {
        self.radius_stator - self.radius_rotor
    }

    /// Bearing (bush) diameter
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius_stator
    }

    /// Length-to-diameter ratio
    pub fn slenderness(&self) -> f64 {
        self.length / self.diameter()
    }

    /// Classify by L/D
    pub fn bearing_type(&self) -> BearingType {
        let ld = self.slenderness();
        if ld <= SHORT_BEARING_MAX_SLENDERNESS {
            BearingType::Short
        } else if ld >= LONG_BEARING_MIN_SLENDERNESS {
            BearingType::Long
        } else {
            BearingType::Medium
        }
    }

    /// Film thickness h = c (1 + ε cos(θ - β))
    #[inline]
    pub fn film_thickness(&self, eccentricity_ratio: f64, beta: f64, theta: f64) -> f64 {
        self.radial_clearance() * (1.0 + eccentricity_ratio * (theta - beta).cos())
    }

    /// Journal centre position; the journal sits toward the minimum film at θ = β + π
    pub fn rotor_centre(&self, eccentricity: f64, beta: f64) -> [f64; 2] {
        let angle = beta + PI;
        [eccentricity * angle.cos(), eccentricity * angle.sin()]
    }

    /// Point on the bush surface along the ray at angle θ
    pub fn stator_point(&self, theta: f64) -> [f64; 2] {
        [self.radius_stator * theta.cos(), self.radius_stator * theta.sin()]
    }

    /// Distance from the bush centre to the journal surface along the ray at angle θ
    pub fn rotor_surface_radius(&self, centre: [f64; 2], theta: f64) -> f64 {
        let proj = centre[0] * theta.cos() + centre[1] * theta.sin();
        let offset_sq = centre[0] * centre[0] + centre[1] * centre[1];
        proj + (proj * proj - offset_sq + self.radius_rotor * self.radius_rotor).sqrt()
    }

    /// Point on the journal surface along the ray at angle θ
    pub fn rotor_point(&self, centre: [f64; 2], theta: f64) -> [f64; 2] {
        let r = self.rotor_surface_radius(centre, theta);
        [r * theta.cos(), r * theta.sin()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bearing_type() {
        assert_eq!(BearingGeometry::new(0.03, 0.0499, 0.05).bearing_type(), BearingType::Short);
        assert_eq!(BearingGeometry::new(0.1, 0.0499, 0.05).bearing_type(), BearingType::Medium);
        assert_eq!(BearingGeometry::new(0.4, 0.0499, 0.05).bearing_type(), BearingType::Long);
    }

    #[test]
    fn test_surface_radius_matches_film() {
        let g = BearingGeometry::new(0.03, 0.0499, 0.05);
        let e = 0.5 * g.radial_clearance();
        let centre = g.rotor_centre(e, 0.0);
        // Widest gap on the ray θ = β
        let gap_max = g.radius_stator - g.rotor_surface_radius(centre, 0.0);
        let gap_min = g.radius_stator - g.rotor_surface_radius(centre, PI);
        assert_relative_eq!(gap_max, g.film_thickness(0.5, 0.0, 0.0), max_relative = 1e-9);
        assert_relative_eq!(gap_min, g.film_thickness(0.5, 0.0, PI), max_relative = 1e-9);
    }
}
