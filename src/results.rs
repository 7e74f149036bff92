//! Result types for bearing analysis

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalyticalMethod, NumericalMethod};
use crate::elements::BearingType;
use crate::math::Mat2;

/// Resultant oil film force in the line-of-centres frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OilFilmForce {
    /// Component along the line of centres, positive toward the journal centre
    pub normal: f64,
    /// Component perpendicular to the line of centres, in the direction of rotation
    pub tangential: f64,
}

impl OilFilmForce {
    pub fn new(normal: f64, tangential: f64) -> Self {
        Self { normal, tangential }
    }

    /// Get force magnitude
    pub fn magnitude(&self) -> f64 {
        self.normal.hypot(self.tangential)
    }

    /// Angle between the resultant and the line of centres
    pub fn attitude_angle(&self) -> f64 {
        self.tangential.atan2(self.normal)
    }

    /// Relative difference of each component against a reference force
    pub fn relative_error(&self, reference: &OilFilmForce) -> (f64, f64) {
        (
            (self.normal - reference.normal).abs() / reference.normal.abs(),
            (self.tangential - reference.tangential).abs() / reference.tangential.abs(),
        )
    }
}

/// 2x2 stiffness or damping coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicCoefficients {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
}

impl DynamicCoefficients {
    /// Create from row-major array [xx, xy, yx, yy]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self {
            xx: arr[0],
            xy: arr[1],
            yx: arr[2],
            yy: arr[3],
        }
    }

    /// Scale every coefficient by the same factor
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            xx: self.xx * factor,
            xy: self.xy * factor,
            yx: self.yx * factor,
            yy: self.yy * factor,
        }
    }

    /// As an nalgebra matrix
    pub fn as_matrix(&self) -> Mat2 {
        Mat2::new(self.xx, self.xy, self.yx, self.yy)
    }
}

/// Statistics of the last numerical pressure solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericalReport {
    pub method: NumericalMethod,
    /// Interior unknowns in the linear system
    pub unknowns: usize,
    /// Stored matrix entries
    pub nonzeros: usize,
    /// Iterations used, 1 for the direct solve
    pub iterations: usize,
    /// ‖b - Ax‖ / ‖b‖ of the returned solution
    pub relative_residual: f64,
}

/// Summary of a bearing's resolved state and solved fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingSummary {
    pub eccentricity_ratio: f64,
    /// Eccentricity in m
    pub eccentricity: f64,
    /// Static load in N
    pub load: f64,
    pub radial_clearance: f64,
    /// Short-bearing attitude angle in rad
    pub attitude_angle: f64,
    /// Modified Sommerfeld number
    pub sommerfeld_number: f64,
    /// Length to diameter ratio
    pub slenderness: f64,
    pub bearing_type: BearingType,
    /// Method of the last analytical solve
    pub analytical_method: Option<AnalyticalMethod>,
    /// Peak of the analytical field, if solved
    pub max_pressure_analytical: Option<f64>,
    /// Peak of the numerical field, if solved
    pub max_pressure_numerical: Option<f64>,
    pub numerical_report: Option<NumericalReport>,
}
