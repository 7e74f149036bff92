//! Sparse matrix utilities for the Reynolds system
//!
//! The five-point Reynolds stencil leaves at most five non-zeros per row, so the
//! system is stored in COO/CSR form and solved with a skyline Cholesky after
//! bandwidth reduction, or iteratively.

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// Sparse matrix builder using COO format
/// More efficient for incremental assembly
pub struct SparseMatrixBuilder {
    size: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl SparseMatrixBuilder {
    /// Create a new sparse matrix builder
    pub fn new(size: usize) -> Self {
        // Five-point stencil
        let estimated_nnz = size * 5;
        Self {
            size,
            entries: Vec::with_capacity(estimated_nnz),
        }
    }

    /// Add a value to the matrix (accumulates if already exists)
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        if value != 0.0 {
            self.entries.push((row, col, value));
        }
    }

    /// Add a coupling term to both (row, col) and (col, row)
    #[inline]
    pub fn add_symmetric(&mut self, row: usize, col: usize, value: f64) {
        self.add(row, col, value);
        if row != col {
            self.add(col, row, value);
        }
    }

    /// Convert to CSR format for efficient solves
    pub fn to_csr(&self) -> CsrMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);

        for &(row, col, val) in &self.entries {
            coo.push(row, col, val);
        }

        CsrMatrix::from(&coo)
    }

    /// Convert to dense matrix (for comparison/debugging)
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut mat = DMatrix::zeros(self.size, self.size);

        for &(row, col, val) in &self.entries {
            mat[(row, col)] += val;
        }

        mat
    }

    /// Get estimated non-zero count
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Get sparsity ratio
    pub fn sparsity(&self) -> f64 {
        let total = self.size * self.size;
        1.0 - (self.entries.len() as f64 / total as f64)
    }
}

/// Sparse Cholesky solver for symmetric positive definite matrices
///
/// Skyline (variable band) storage: each row keeps the entries from its first
/// non-zero up to the diagonal. Fill-in stays inside that envelope, so a
/// bandwidth-reducing permutation should be applied first.
pub struct SparseCholeskySolver {
    size: usize,
    // Skyline storage: for each row, from the first non-zero to the diagonal
    skyline: Vec<Vec<f64>>,
    // Row heights (distance from diagonal to first non-zero on the left)
    heights: Vec<usize>,
}

impl SparseCholeskySolver {
    /// Create solver from CSR matrix
    pub fn new(csr: &CsrMatrix<f64>) -> Self {
        let size = csr.nrows();

        // Compute row heights (skyline profile)
        let mut heights = vec![0usize; size];
        for (row, col, _val) in csr.triplet_iter() {
            if col < row {
                let height = row - col;
                if height > heights[row] {
                    heights[row] = height;
                }
            }
        }

        let mut skyline: Vec<Vec<f64>> = Vec::with_capacity(size);
        for &h in &heights {
            skyline.push(vec![0.0; h + 1]);
        }

        // Lower triangle only
        for (row, col, &val) in csr.triplet_iter() {
            if col <= row {
                let idx = col - (row - heights[row]);
                skyline[row][idx] += val;
            }
        }

        Self {
            size,
            skyline,
            heights,
        }
    }

    /// Number of stored entries in the envelope
    pub fn envelope_size(&self) -> usize {
        self.skyline.iter().map(Vec::len).sum()
    }

    /// Factorize in place, L stored over the lower envelope
    pub fn factorize(&mut self) -> Result<(), &'static str> {
        for i in 0..self.size {
            let hi = self.heights[i];
            let start_i = i - hi;

            // Compute L[i,j] for j < i
            for j in start_i..i {
                let hj = self.heights[j];
                let start_j = j - hj;

                let start = start_i.max(start_j);
                let mut sum = 0.0;

                for k in start..j {
                    sum += self.get(i, k) * self.get(j, k);
                }

                let diag_j = self.skyline[j][hj];
                if diag_j.abs() < 1e-300 {
                    return Err("Zero pivot in Cholesky factorization");
                }

                let idx = j - start_i;
                self.skyline[i][idx] = (self.skyline[i][idx] - sum) / diag_j;
            }

            // Compute L[i,i] (diagonal)
            let mut sum = 0.0;
            for j in start_i..i {
                let val = self.get(i, j);
                sum += val * val;
            }

            let diag = self.skyline[i][hi] - sum;
            if diag <= 0.0 {
                return Err("Matrix not positive definite");
            }
            self.skyline[i][hi] = diag.sqrt();
        }

        Ok(())
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        if col > row {
            return self.get(col, row);
        }
        let h = self.heights[row];
        let start = row - h;
        if col < start {
            return 0.0;
        }
        self.skyline[row][col - start]
    }

    /// Solve L * L^T * x = b
    pub fn solve(&self, b: &DVector<f64>) -> DVector<f64> {
        let mut x = b.clone();

        // Forward substitution: L * y = b
        for i in 0..self.size {
            let start = i - self.heights[i];

            let mut sum = 0.0;
            for j in start..i {
                sum += self.get(i, j) * x[j];
            }

            x[i] = (x[i] - sum) / self.get(i, i);
        }

        // Backward substitution: L^T * x = y
        for i in (0..self.size).rev() {
            x[i] /= self.get(i, i);

            let start = i - self.heights[i];
            for j in start..i {
                x[j] -= self.get(i, j) * x[i];
            }
        }

        x
    }
}

/// Outcome of an iterative solve
#[derive(Debug, Clone)]
pub struct IterativeSolution {
    /// Last iterate
    pub x: DVector<f64>,
    /// Iterations performed
    pub iterations: usize,
    /// ‖b - Ax‖ / ‖b‖ at the last iterate
    pub relative_residual: f64,
    /// Whether the residual target was met
    pub converged: bool,
}

impl IterativeSolution {
    fn trivial(n: usize) -> Self {
        Self {
            x: DVector::zeros(n),
            iterations: 0,
            relative_residual: 0.0,
            converged: true,
        }
    }
}

fn diagonal(csr: &CsrMatrix<f64>) -> DVector<f64> {
    let mut diag = DVector::zeros(csr.nrows());
    for (row, col, &val) in csr.triplet_iter() {
        if row == col {
            diag[row] += val;
        }
    }
    diag
}

/// Solve sparse linear system using Preconditioned Conjugate Gradient
///
/// Uses Jacobi (diagonal) preconditioner. Stops when ‖r‖ <= tol·‖b‖.
/// Returns `None` on breakdown or a zero diagonal.
pub fn solve_pcg(
    csr: &CsrMatrix<f64>,
    b: &DVector<f64>,
    tol: f64,
    max_iter: usize,
) -> Option<IterativeSolution> {
    let n = csr.nrows();
    let b_norm = b.norm();
    if b_norm == 0.0 {
        return Some(IterativeSolution::trivial(n));
    }

    let diag = diagonal(csr);
    if diag.iter().any(|d| d.abs() < 1e-300) {
        return None;
    }

    let mut x = DVector::zeros(n);
    let mut r = b.clone();

    // z = M^-1 * r (preconditioner application)
    let mut z = r.component_div(&diag);
    let mut p = z.clone();
    let mut r_dot_z = r.dot(&z);
    let mut rel = 1.0;

    for iter in 0..max_iter {
        let ap = sparse_matvec(csr, &p);
        let p_dot_ap = p.dot(&ap);

        if p_dot_ap.abs() < 1e-300 {
            return None;
        }

        let alpha = r_dot_z / p_dot_ap;

        x.axpy(alpha, &p, 1.0);
        r.axpy(-alpha, &ap, 1.0);

        rel = r.norm() / b_norm;
        if rel <= tol {
            return Some(IterativeSolution {
                x,
                iterations: iter + 1,
                relative_residual: rel,
                converged: true,
            });
        }

        z = r.component_div(&diag);
        let r_dot_z_new = r.dot(&z);
        let beta = r_dot_z_new / r_dot_z;
        r_dot_z = r_dot_z_new;

        p = &z + beta * &p;
    }

    Some(IterativeSolution {
        x,
        iterations: max_iter,
        relative_residual: rel,
        converged: false,
    })
}

/// Solve sparse linear system by successive over-relaxation
///
/// `omega` = 1 is Gauss-Seidel. Stops when ‖b - Ax‖ <= tol·‖b‖.
/// Returns `None` when a diagonal entry vanishes.
pub fn solve_sor(
    csr: &CsrMatrix<f64>,
    b: &DVector<f64>,
    omega: f64,
    tol: f64,
    max_iter: usize,
) -> Option<IterativeSolution> {
    let n = csr.nrows();
    let b_norm = b.norm();
    if b_norm == 0.0 {
        return Some(IterativeSolution::trivial(n));
    }

    let diag = diagonal(csr);
    if diag.iter().any(|d| d.abs() < 1e-300) {
        return None;
    }

    let row_offsets = csr.row_offsets();
    let col_indices = csr.col_indices();
    let values = csr.values();

    let mut x = DVector::zeros(n);
    let mut rel = 1.0;

    for iter in 0..max_iter {
        for row in 0..n {
            let mut sigma = 0.0;
            for idx in row_offsets[row]..row_offsets[row + 1] {
                let col = col_indices[idx];
                if col != row {
                    sigma += values[idx] * x[col];
                }
            }
            let gs = (b[row] - sigma) / diag[row];
            x[row] += omega * (gs - x[row]);
        }

        rel = (b - sparse_matvec(csr, &x)).norm() / b_norm;
        if rel <= tol {
            return Some(IterativeSolution {
                x,
                iterations: iter + 1,
                relative_residual: rel,
                converged: true,
            });
        }
    }

    Some(IterativeSolution {
        x,
        iterations: max_iter,
        relative_residual: rel,
        converged: false,
    })
}

/// Sparse matrix-vector multiplication
#[inline]
pub fn sparse_matvec(csr: &CsrMatrix<f64>, x: &DVector<f64>) -> DVector<f64> {
    let n = csr.nrows();
    let mut y = DVector::zeros(n);

    let row_offsets = csr.row_offsets();
    let col_indices = csr.col_indices();
    let values = csr.values();

    for row in 0..n {
        let start = row_offsets[row];
        let end = row_offsets[row + 1];

        let mut sum = 0.0;
        for idx in start..end {
            sum += values[idx] * x[col_indices[idx]];
        }
        y[row] = sum;
    }

    y
}

/// Bandwidth reduction using Reverse Cuthill-McKee algorithm
///
/// Returns a permutation vector: `perm[new] = old`
pub fn reverse_cuthill_mckee(csr: &CsrMatrix<f64>) -> Vec<usize> {
    let n = csr.nrows();
    if n == 0 {
        return vec![];
    }

    // Build adjacency list
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (row, col, &val) in csr.triplet_iter() {
        if val != 0.0 && row != col {
            adj[row].push(col);
        }
    }

    // Get degrees for sorting
    let degrees: Vec<usize> = adj.iter().map(|v| v.len()).collect();

    // Sort adjacencies by degree (for tie-breaking)
    for neighbors in &mut adj {
        neighbors.sort_by_key(|&i| degrees[i]);
    }

    let mut visited = vec![false; n];
    let mut result = Vec::with_capacity(n);
    let mut queue = std::collections::VecDeque::new();

    // Start from node with minimum degree
    let start = (0..n).min_by_key(|&i| degrees[i]).unwrap_or(0);

    queue.push_back(start);
    visited[start] = true;

    while let Some(node) = queue.pop_front() {
        result.push(node);

        for &neighbor in &adj[node] {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }

        // Handle disconnected components
        if queue.is_empty() && result.len() < n {
            if let Some(i) = (0..n).find(|&i| !visited[i]) {
                queue.push_back(i);
                visited[i] = true;
            }
        }
    }

    result.reverse();
    result
}

/// Apply permutation to reorder entries: `out[new] = vec[perm[new]]`
pub fn apply_permutation<T: Clone>(vec: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| vec[i].clone()).collect()
}

/// Create inverse permutation
pub fn inverse_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; perm.len()];
    for (new_idx, &old_idx) in perm.iter().enumerate() {
        inv[old_idx] = new_idx;
    }
    inv
}

/// Symmetrically permute a square matrix: B[new_i, new_j] = A[perm[new_i], perm[new_j]]
pub fn permute_symmetric(csr: &CsrMatrix<f64>, perm: &[usize]) -> CsrMatrix<f64> {
    let inv = inverse_permutation(perm);
    let mut builder = SparseMatrixBuilder::new(csr.nrows());
    for (row, col, &val) in csr.triplet_iter() {
        builder.add(inv[row], inv[col], val);
    }
    builder.to_csr()
}

/// Solve an SPD system directly: RCM reordering, skyline Cholesky, back-permutation
pub fn solve_spd_direct(csr: &CsrMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, &'static str> {
    let perm = reverse_cuthill_mckee(csr);
    let permuted = permute_symmetric(csr, &perm);

    let mut chol = SparseCholeskySolver::new(&permuted);
    chol.factorize()?;

    let b_perm = DVector::from_vec(apply_permutation(b.as_slice(), &perm));
    let y = chol.solve(&b_perm);

    let inv = inverse_permutation(&perm);
    Ok(DVector::from_vec(apply_permutation(y.as_slice(), &inv)))
}
