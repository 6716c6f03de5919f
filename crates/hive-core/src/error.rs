//! Error types for hive weight analysis
//!
//! Provides a unified error type for all hive-stats crates.

use thiserror::Error;

/// Minimum number of readings needed to compute a single variation
pub const MIN_ANALYSIS_READINGS: usize = 2;

/// Core error type for hive weight operations
#[derive(Error, Debug)]
pub enum Error {
    /// Not enough readings for the requested operation
    #[error("Insufficient data: expected at least {expected} readings, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A reading is NaN or infinite
    #[error("Non-finite reading at position {index}: {value}")]
    NonFinite { index: usize, value: f64 },

    /// A raw record could not be turned into a weight
    #[error("Invalid record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Invalid parameter provided to an analyzer
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a series too short to analyze
    pub fn insufficient_readings(actual: usize) -> Self {
        Self::InsufficientData {
            expected: MIN_ANALYSIS_READINGS,
            actual,
        }
    }

    /// Create an error for a NaN/Inf reading
    pub fn non_finite(index: usize, value: f64) -> Self {
        Self::NonFinite { index, value }
    }

    /// Create an error for a record that failed coercion
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// True for the "not enough records" condition
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
