//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid significance level on the command line.
    #[error("Invalid significance level: {0}. Must be strictly between 0 and 1.")]
    InvalidSignificance(f64),

    /// Invalid trading day count on the command line.
    #[error("Invalid number of trading days: {0}. Must be at least 1.")]
    InvalidDays(usize),

    /// Invalid notional on the command line.
    #[error("Invalid notional: {0}. Must be a positive amount.")]
    InvalidNotional(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] tailrisk_config::ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
