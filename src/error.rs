//! Error types for the trendcast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while loading data or running the pipeline.
///
/// Data-absence degeneracies (no valid points for a regression, a zero
/// overall average, a zero seasonal index) are not errors; they resolve
/// to neutral defaults inside the stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Calendar month outside 1..=12.
    #[error("invalid calendar month: {0}")]
    InvalidMonth(u32),

    /// No calendar year could be established for the forecast horizon.
    #[error("cannot derive forecast anchor year: {0}")]
    AnchorYear(String),

    /// Factor category that is neither a coefficient nor a unit adjustment.
    #[error("unknown factor kind: {0:?}")]
    UnknownFactorKind(String),

    /// Configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Config(err.to_string())
    }
}
