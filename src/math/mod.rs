//! Numerical utilities: matrix aliases, sparse solvers, quadrature and root finding

pub mod quadrature;
pub mod roots;
pub mod sparse;

use nalgebra::{DMatrix, DVector, Matrix2};

// Re-export sparse utilities
pub use sparse::{
    reverse_cuthill_mckee, solve_pcg, solve_sor, solve_spd_direct, IterativeSolution,
    SparseCholeskySolver, SparseMatrixBuilder,
};

/// Dense matrix, used for the [z][θ] pressure fields
pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
/// 2x2 matrix for dynamic coefficients
pub type Mat2 = Matrix2<f64>;
