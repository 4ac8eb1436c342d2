//! Error types for variable-bin histogram distances
//!
//! Provides a unified error type for all varbin crates.

use thiserror::Error;

/// Core error type for histogram construction and distance computation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimensionality disagreement between two inputs
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Value outside the binned range under a strict binning policy
    #[error("Value {value} in dimension {dimension} is outside [{start}, {end})")]
    OutOfRange {
        value: f64,
        dimension: usize,
        start: f64,
        end: f64,
    },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a dimensionality mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::DimensionMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Whether the caller broke an input contract (as opposed to a degenerate input)
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. } | Self::OutOfRange { .. })
    }
}
