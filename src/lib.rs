//! Bearing Solver - fluid-film journal bearing analysis in native Rust
//!
//! Computes the pressure field in the oil film between a rotating journal and
//! its bush, and the quantities rotordynamics needs from it:
//! - Load ↔ eccentricity resolution through the short-bearing load capacity
//! - Closed-form pressure fields (short, finite-length and long bearing)
//! - Finite-difference solution of the Reynolds equation (direct, CG or SOR)
//! - Oil film forces by surface integration or closed form
//! - Linearized stiffness and damping coefficients
//!
//! ## Example
//! ```rust
//! use bearing_solver::prelude::*;
//!
//! let config = BearingConfig {
//!     nz: 8,
//!     ntheta: 64,
//!     nradius: 11,
//!     length: 0.03,
//!     omega: 157.1,
//!     p_in: 0.0,
//!     p_out: 0.0,
//!     radius_rotor: 0.0499,
//!     radius_stator: 0.05,
//!     viscosity: 0.1,
//!     density: 860.0,
//!     beta: None,
//!     eccentricity: None,
//!     load: Some(525.0),
//! };
//!
//! let mut bearing = JournalBearing::new(config).unwrap();
//! assert!((bearing.eccentricity_ratio() - 0.2663).abs() < 1e-3);
//!
//! bearing.solve_analytical(AnalyticalMethod::ShortBearing);
//! bearing.solve_numerical().unwrap();
//!
//! let force = bearing.oil_film_force(FieldSource::Numerical);
//! let k = bearing.stiffness_matrix().unwrap();
//! ```

pub mod analysis;
pub mod capacity;
pub mod coefficients;
pub mod config;
pub mod elements;
pub mod error;
pub mod math;
pub mod model;
pub mod pressure;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        AnalyticalMethod, Approximation, FieldSource, NumericalMethod, NumericalOptions,
        Quadrature, RootFindingOptions,
    };
    pub use crate::config::BearingConfig;
    pub use crate::elements::{BearingGeometry, BearingType, Grid, Lubricant};
    pub use crate::error::{BearingError, BearingResult};
    pub use crate::model::JournalBearing;
    pub use crate::results::{BearingSummary, DynamicCoefficients, NumericalReport, OilFilmForce};
}
