//! Error types for return generation.

use thiserror::Error;

/// Result type for return generation.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while generating returns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A generation parameter is out of range.
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Return matrix dimensions do not agree.
    #[error("shape mismatch: {0}")]
    Shape(String),
}

impl SimError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
