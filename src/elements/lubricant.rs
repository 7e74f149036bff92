//! Lubricant properties

use serde::{Deserialize, Serialize};

/// Newtonian, isoviscous lubricant
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lubricant {
    /// Dynamic viscosity in Pa·s
    pub viscosity: f64,
    /// Density in kg/m³
    pub density: f64,
}

impl Lubricant {
    /// Create a new lubricant
    pub fn new(viscosity: f64, density: f64) -> Self {
        Self { viscosity, density }
    }

    /// Kinematic viscosity in m²/s
    pub fn kinematic_viscosity(&self) -> f64 {
        self.viscosity / self.density
    }
}
