//! Finite-difference solution of the Reynolds equation
//!
//! ```text
//! (1/R²) ∂θ(h³/12μ ∂θ p) + ∂z(h³/12μ ∂z p) = (ω/2) ∂θ h
//! ```
//!
//! Scaled with H = h/c, Z = z/R and P = p / (6 μ ω (R/c)²) this becomes
//!
//! ```text
//! ∂θ(H³ ∂θ P) + ∂Z(H³ ∂Z P) = ∂θ H
//! ```
//!
//! discretized with a conservative five-point stencil: circumferential face
//! coefficients use H³ at the half nodes, the right-hand side differences H
//! across the same faces. Axial ends carry the supply pressures, θ wraps
//! around. After a sign flip the matrix is symmetric positive definite.

use log::{debug, warn};
use nalgebra_sparse::CsrMatrix;

use crate::analysis::{NumericalMethod, NumericalOptions};
use crate::error::{BearingError, BearingResult};
use crate::math::sparse::{self, SparseMatrixBuilder};
use crate::math::{Mat, Vec as DVec};
use crate::results::NumericalReport;

use super::FilmProblem;

/// Assembled, dimensionless Reynolds system for the interior nodes
pub struct ReynoldsSystem {
    /// Positive definite system matrix
    pub matrix: CsrMatrix<f64>,
    /// Right-hand side including the Dirichlet contributions
    pub rhs: DVec,
    /// Interior axial nodes per circumferential station
    pub n_axial: usize,
    /// Distinct circumferential stations
    pub n_circ: usize,
    /// Stored entries before CSR compression
    pub nnz: usize,
}

impl ReynoldsSystem {
    /// Unknown index of interior node (i, j), i in 1..nz-1
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        unknown_index(self.n_axial, i, j)
    }

    pub fn unknowns(&self) -> usize {
        self.n_axial * self.n_circ
    }
}

#[inline]
fn unknown_index(n_axial: usize, i: usize, j: usize) -> usize {
    j * n_axial + (i - 1)
}

/// Assemble the scaled system
pub fn assemble(problem: &FilmProblem) -> ReynoldsSystem {
    let grid = problem.grid;
    let nz = grid.nz;
    let n_axial = nz - 2;
    let n_circ = grid.periodic_ntheta();
    let size = n_axial * n_circ;

    let dt = grid.dtheta;
    let dzeta = grid.dz / problem.geometry.radius_rotor;
    let scale = problem.pressure_scale();
    let p_in = problem.p_in / scale;
    let p_out = problem.p_out / scale;

    let h_face = |j: usize| problem.film_ratio((j as f64 + 0.5) * dt);

    let mut builder = SparseMatrixBuilder::new(size);
    let mut rhs = DVec::zeros(size);

    for j in 0..n_circ {
        let h_east = h_face(j);
        let h_west = problem.film_ratio((j as f64 - 0.5) * dt);
        let h_node = problem.film_ratio(grid.theta(j));

        let a_east = h_east.powi(3) / (dt * dt);
        let a_west = h_west.powi(3) / (dt * dt);
        let a_axial = h_node.powi(3) / (dzeta * dzeta);
        let wedge = -(h_east - h_west) / dt;

        let j_east = (j + 1) % n_circ;

        for i in 1..nz - 1 {
            let k = unknown_index(n_axial, i, j);

            builder.add(k, k, a_east + a_west + 2.0 * a_axial);
            builder.add_symmetric(k, unknown_index(n_axial, i, j_east), -a_east);
            if i + 1 < nz - 1 {
                builder.add_symmetric(k, unknown_index(n_axial, i + 1, j), -a_axial);
            }

            rhs[k] = wedge;
            if i == 1 {
                rhs[k] += a_axial * p_in;
            }
            if i == nz - 2 {
                rhs[k] += a_axial * p_out;
            }
        }
    }

    debug!(
        "Reynolds system: {} unknowns, {} entries, sparsity {:.4}",
        size,
        builder.nnz(),
        builder.sparsity()
    );

    ReynoldsSystem {
        matrix: builder.to_csr(),
        rhs,
        n_axial,
        n_circ,
        nnz: builder.nnz(),
    }
}

/// Solve the scaled system with the selected linear solver
pub fn solve_system(
    system: &ReynoldsSystem,
    options: &NumericalOptions,
) -> BearingResult<(DVec, NumericalReport)> {
    options.validate()?;

    let b_norm = system.rhs.norm();
    let (x, iterations) = match options.method {
        NumericalMethod::Direct => {
            let x = sparse::solve_spd_direct(&system.matrix, &system.rhs)
                .map_err(|e| BearingError::LinearSolve(e.to_string()))?;
            (x, 1)
        }
        NumericalMethod::ConjugateGradient | NumericalMethod::Relaxation => {
            let outcome = match options.method {
                NumericalMethod::Relaxation => sparse::solve_sor(
                    &system.matrix,
                    &system.rhs,
                    options.relaxation,
                    options.tolerance,
                    options.max_iterations,
                ),
                _ => sparse::solve_pcg(
                    &system.matrix,
                    &system.rhs,
                    options.tolerance,
                    options.max_iterations,
                ),
            };
            let solution = outcome.ok_or_else(|| {
                BearingError::LinearSolve(format!("{:?} broke down", options.method))
            })?;

            if !solution.converged {
                warn!(
                    "{:?} stopped after {} iterations at relative residual {:e}",
                    options.method, solution.iterations, solution.relative_residual
                );
                return Err(BearingError::SolverDivergence {
                    iterations: solution.iterations,
                    residual: solution.relative_residual,
                });
            }
            (solution.x, solution.iterations)
        }
    };

    let residual = if b_norm > 0.0 {
        (&system.rhs - sparse::sparse_matvec(&system.matrix, &x)).norm() / b_norm
    } else {
        0.0
    };

    let report = NumericalReport {
        method: options.method,
        unknowns: system.unknowns(),
        nonzeros: system.nnz,
        iterations,
        relative_residual: residual,
    };

    Ok((x, report))
}

/// Numerical [z][θ] pressure field with supply pressures at the axial ends
/// and negative gauge pressures truncated to zero
pub fn numerical_field(
    problem: &FilmProblem,
    options: &NumericalOptions,
) -> BearingResult<(Mat, NumericalReport)> {
    let system = assemble(problem);
    let (x, report) = solve_system(&system, options)?;

    let grid = problem.grid;
    let scale = problem.pressure_scale();

    let field = Mat::from_fn(grid.nz, grid.ntheta, |i, j| {
        if i == 0 {
            problem.p_in
        } else if i == grid.nz - 1 {
            problem.p_out
        } else {
            let jj = j % system.n_circ;
            (scale * x[system.index(i, jj)]).max(0.0)
        }
    });

    debug!(
        "numerical solve: {:?}, {} iterations, relative residual {:e}",
        report.method, report.iterations, report.relative_residual
    );

    Ok((field, report))
}
