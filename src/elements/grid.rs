//! Discretized film domain

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Structured (z, θ, r) grid over the oil film
///
/// Axial nodes run from z = 0 to z = L, circumferential nodes from θ = 0 to
/// θ = 2π inclusive, so node `ntheta - 1` closes the circle onto node 0.
/// Radial nodes span the local film gap and are only used to describe its shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Grid {
    /// Axial node count
    pub nz: usize,
    /// Circumferential node count
    pub ntheta: usize,
    /// Radial node count across the film
    pub nradius: usize,
    /// Axial step
    pub dz: f64,
    /// Circumferential step in radians
    pub dtheta: f64,
}

impl Grid {
    /// Build the grid for a bearing of the given length
    pub fn new(nz: usize, ntheta: usize, nradius: usize, length: f64) -> Self {
        Self {
            nz,
            ntheta,
            nradius,
            dz: length / (nz - 1) as f64,
            dtheta: 2.0 * PI / (ntheta - 1) as f64,
        }
    }

    /// Axial coordinate of node i
    #[inline]
    pub fn z(&self, i: usize) -> f64 {
        i as f64 * self.dz
    }

    /// Angular coordinate of node j
    #[inline]
    pub fn theta(&self, j: usize) -> f64 {
        j as f64 * self.dtheta
    }

    /// All axial coordinates
    pub fn z_coords(&self) -> Vec<f64> {
        (0..self.nz).map(|i| self.z(i)).collect()
    }

    /// All angular coordinates
    pub fn theta_coords(&self) -> Vec<f64> {
        (0..self.ntheta).map(|j| self.theta(j)).collect()
    }

    /// Distinct circumferential nodes (the closing node is excluded)
    pub fn periodic_ntheta(&self) -> usize {
        self.ntheta - 1
    }

    /// Index of the mid-axial plane
    pub fn mid_plane(&self) -> usize {
        self.nz / 2
    }

    /// `nradius` equally spaced radii from `inner` to `outer`
    pub fn radial_positions(&self, inner: f64, outer: f64) -> Vec<f64> {
        let n = self.nradius;
        let dr = (outer - inner) / (n - 1) as f64;
        (0..n).map(|k| inner + k as f64 * dr).collect()
    }
}
