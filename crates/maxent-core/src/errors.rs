//! Error types for the maximum-entropy weighting service.

use thiserror::Error;

/// Unified error type for all weighting operations.
///
/// Every failure mode surfaces as one of these variants; the numerical
/// routines never return partial or NaN-laden vectors in place of an error.
#[derive(Error, Debug)]
pub enum MaxentError {
    /// Configuration validation errors (contradictory mode flags, bad tunables)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input validation errors (empty or mismatched distribution sets)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Mathematical/numerical errors (non-finite values, infeasible projection)
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl MaxentError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        MaxentError::ConfigError(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        MaxentError::ValidationError(message.into())
    }

    /// Creates a numerical error.
    pub fn numerical(message: impl Into<String>) -> Self {
        MaxentError::NumericalError(message.into())
    }
}

/// Result type alias for weighting operations.
pub type Result<T> = std::result::Result<T, MaxentError>;
