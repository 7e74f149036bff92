//! Bearing input configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BearingError, BearingResult};

/// Inputs describing one journal bearing operating point
///
/// Exactly one of `eccentricity` and `load` must be given; the other is
/// derived when the bearing is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingConfig {
    /// Axial grid points
    pub nz: usize,
    /// Circumferential grid points, the last one closing the circle
    pub ntheta: usize,
    /// Radial grid points across the film
    pub nradius: usize,
    /// Axial bearing length in m
    pub length: f64,
    /// Rotor speed in rad/s
    pub omega: f64,
    /// Supply pressure at z = 0 in Pa
    pub p_in: f64,
    /// Supply pressure at z = L in Pa
    pub p_out: f64,
    /// Journal radius in m
    pub radius_rotor: f64,
    /// Bush radius in m
    pub radius_stator: f64,
    /// Dynamic viscosity in Pa s
    pub viscosity: f64,
    /// Density in kg/m³
    pub density: f64,
    /// Angle of the widest film in rad, 0 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// Journal eccentricity in m
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    /// Static load in N
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
}

impl BearingConfig {
    /// Parse a JSON configuration and validate it
    pub fn from_json_str(json: &str) -> BearingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> BearingResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> BearingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the eccentricity and clear any load
    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = Some(eccentricity);
        self.load = None;
        self
    }

    /// Set the load and clear any eccentricity
    pub fn with_load(mut self, load: f64) -> Self {
        self.load = Some(load);
        self.eccentricity = None;
        self
    }

    /// Set the attitude angle β
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Radial clearance c = R_stator - R_rotor
    pub fn radial_clearance(&self) -> f64 {
        self.radius_stator - self.radius_rotor
    }

    /// Check every input against its allowed range
    pub fn validate(&self) -> BearingResult<()> {
        match (self.eccentricity, self.load) {
            (Some(_), Some(_)) => {
                return Err(BearingError::config(
                    "give either eccentricity or load, not both",
                ))
            }
            (None, None) => {
                return Err(BearingError::config("one of eccentricity or load is required"))
            }
            _ => {}
        }

        if self.nz < 3 {
            return Err(BearingError::config(format!("nz must be at least 3, got {}", self.nz)));
        }
        if self.ntheta < 4 {
            return Err(BearingError::config(format!(
                "ntheta must be at least 4, got {}",
                self.ntheta
            )));
        }
        if self.nradius < 2 {
            return Err(BearingError::config(format!(
                "nradius must be at least 2, got {}",
                self.nradius
            )));
        }

        for (name, value) in [
            ("length", self.length),
            ("radius_rotor", self.radius_rotor),
            ("radius_stator", self.radius_stator),
            ("viscosity", self.viscosity),
            ("density", self.density),
            ("omega", self.omega),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BearingError::config(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        if self.radius_rotor >= self.radius_stator {
            return Err(BearingError::config(format!(
                "radius_rotor {} must be smaller than radius_stator {}",
                self.radius_rotor, self.radius_stator
            )));
        }

        for (name, value) in [("p_in", self.p_in), ("p_out", self.p_out)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(BearingError::config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if let Some(beta) = self.beta {
            if !beta.is_finite() {
                return Err(BearingError::config("beta must be finite"));
            }
        }

        if let Some(e) = self.eccentricity {
            let c = self.radial_clearance();
            if !(e.is_finite() && e >= 0.0 && e < c) {
                return Err(BearingError::config(format!(
                    "eccentricity {e} must lie in [0, {c}) (eccentricity ratio in [0, 1))"
                )));
            }
        }

        if let Some(load) = self.load {
            if !(load.is_finite() && load > 0.0) {
                return Err(BearingError::config(format!(
                    "load must be finite and positive, got {load}"
                )));
            }
        }

        Ok(())
    }
}
