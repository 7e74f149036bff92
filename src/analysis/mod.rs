//! Solver selections and options

use serde::{Deserialize, Serialize};

use crate::error::{BearingError, BearingResult};

/// Closed-form approximation used to fill the analytical pressure field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticalMethod {
    /// Ocvirk short-bearing solution (method 0)
    ShortBearing,
    /// Short/long combination with finite-length correction (method 1)
    FiniteLength,
    /// Full Sommerfeld long-bearing solution (method 2)
    LongBearing,
    /// Pick from the length-to-diameter ratio
    Auto,
}

impl Default for AnalyticalMethod {
    fn default() -> Self {
        Self::ShortBearing
    }
}

impl TryFrom<u8> for AnalyticalMethod {
    type Error = BearingError;

    fn try_from(index: u8) -> BearingResult<Self> {
        match index {
            0 => Ok(Self::ShortBearing),
            1 => Ok(Self::FiniteLength),
            2 => Ok(Self::LongBearing),
            _ => Err(BearingError::config(format!(
                "unknown analytical method index {index} (expected 0, 1 or 2)"
            ))),
        }
    }
}

/// Linear solver used for the discretized Reynolds equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericalMethod {
    /// Skyline Cholesky on the RCM-reordered system
    Direct,
    /// Jacobi-preconditioned conjugate gradient
    ConjugateGradient,
    /// Successive over-relaxation
    Relaxation,
}

impl Default for NumericalMethod {
    fn default() -> Self {
        Self::Direct
    }
}

/// Which stored pressure field to integrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    Analytical,
    Numerical,
}

/// Closed-form film force approximation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approximation {
    /// Ocvirk short bearing
    Short,
    /// Half-Sommerfeld long bearing
    Long,
}

/// Quadrature rule for film force integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrature {
    /// Composite Simpson (3/8 rule on the last three panels for odd panel counts)
    Simpson,
    Trapezoidal,
}

impl Default for Quadrature {
    fn default() -> Self {
        Self::Simpson
    }
}

/// Options for the load to eccentricity search
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RootFindingOptions {
    /// Absolute tolerance on the eccentricity ratio
    pub tolerance: f64,
    /// Maximum Brent iterations
    pub max_iterations: usize,
}

impl Default for RootFindingOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 100,
        }
    }
}

impl RootFindingOptions {
    /// Set convergence tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iterations = max_iter;
        self
    }
}

/// Options for the numerical pressure solve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericalOptions {
    /// Linear solver
    pub method: NumericalMethod,
    /// Relative residual target for iterative methods
    pub tolerance: f64,
    /// Iteration cap for iterative methods
    pub max_iterations: usize,
    /// Over-relaxation factor, only used by `Relaxation`
    pub relaxation: f64,
}

impl Default for NumericalOptions {
    fn default() -> Self {
        Self {
            method: NumericalMethod::Direct,
            tolerance: 1e-10,
            max_iterations: 20_000,
            relaxation: 1.5,
        }
    }
}

impl NumericalOptions {
    /// Options for the direct sparse solve
    pub fn direct() -> Self {
        Self::default()
    }

    /// Options for preconditioned conjugate gradient
    pub fn conjugate_gradient() -> Self {
        Self {
            method: NumericalMethod::ConjugateGradient,
            ..Self::default()
        }
    }

    /// Options for successive over-relaxation with the given factor
    pub fn relaxation(factor: f64) -> Self {
        Self {
            method: NumericalMethod::Relaxation,
            relaxation: factor,
            ..Self::default()
        }
    }

    /// Set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iterations = max_iter;
        self
    }

    /// Set convergence tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Reject option combinations the solvers cannot honour
    pub fn validate(&self) -> BearingResult<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(BearingError::config("solver tolerance must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(BearingError::config("solver max_iterations must be at least 1"));
        }
        if self.method == NumericalMethod::Relaxation
            && !(self.relaxation > 0.0 && self.relaxation < 2.0)
        {
            return Err(BearingError::config(format!(
                "relaxation factor {} outside (0, 2)",
                self.relaxation
            )));
        }
        Ok(())
    }
}
