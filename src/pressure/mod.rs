//! Film pressure fields: closed-form approximations and the numerical Reynolds solve

pub mod analytical;
pub mod numerical;

use crate::elements::{BearingGeometry, Grid, Lubricant};

/// Everything a pressure solve reads, borrowed from the bearing
#[derive(Debug, Clone, Copy)]
pub struct FilmProblem<'a> {
    pub geometry: &'a BearingGeometry,
    pub lubricant: &'a Lubricant,
    pub grid: &'a Grid,
    /// Journal speed in rad/s
    pub omega: f64,
    pub eccentricity_ratio: f64,
    /// Angle of the widest film in rad
    pub beta: f64,
    pub p_in: f64,
    pub p_out: f64,
}

impl FilmProblem<'_> {
    /// Angle from the widest film, γ = θ - β
    #[inline]
    pub fn gamma(&self, theta: f64) -> f64 {
        theta - self.beta
    }

    /// Dimensionless film thickness H = h / c
    #[inline]
    pub fn film_ratio(&self, theta: f64) -> f64 {
        1.0 + self.eccentricity_ratio * self.gamma(theta).cos()
    }

    /// Supply pressure varying linearly from inlet to outlet
    #[inline]
    pub fn supply_pressure(&self, z: f64) -> f64 {
        self.p_in + (self.p_out - self.p_in) * z / self.geometry.length
    }

    /// Pressure scale 6 μ ω (R / c)² of the hydrodynamic film
    pub fn pressure_scale(&self) -> f64 {
        let r_over_c = self.geometry.radius_rotor / self.geometry.radial_clearance();
        6.0 * self.lubricant.viscosity * self.omega * r_over_c * r_over_c
    }
}
