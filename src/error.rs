//! Error types for the bearing solver

use thiserror::Error;

/// Main error type for bearing operations
#[derive(Error, Debug)]
pub enum BearingError {
    #[error("Invalid bearing configuration: {0}")]
    Configuration(String),

    #[error("Eccentricity search failed: {reason} (load {load} N, {iterations} iterations)")]
    Convergence {
        reason: String,
        load: f64,
        iterations: usize,
    },

    #[error("Pressure solve diverged after {iterations} iterations (relative residual {residual:e})")]
    SolverDivergence { iterations: usize, residual: f64 },

    #[error("Linear solve failed: {0}")]
    LinearSolve(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BearingError {
    /// Shorthand for a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type for bearing operations
pub type BearingResult<T> = Result<T, BearingError>;
