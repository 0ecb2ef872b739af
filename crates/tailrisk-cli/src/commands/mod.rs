//! CLI command implementations.

pub mod config;
pub mod report;

pub use config::ConfigArgs;
pub use report::ReportArgs;

use rust_decimal::Decimal;

use crate::error::{CliError, CliResult};

/// Validates a significance level ε.
pub fn validate_significance(significance: f64) -> CliResult<f64> {
    if !(significance > 0.0 && significance < 1.0) {
        return Err(CliError::InvalidSignificance(significance));
    }
    Ok(significance)
}

/// Validates a trading day count.
pub fn validate_days(days: usize) -> CliResult<usize> {
    if days == 0 {
        return Err(CliError::InvalidDays(days));
    }
    Ok(days)
}

/// Parses a positive notional amount such as `1000000` or `2.5e6`.
pub fn parse_notional(s: &str) -> CliResult<Decimal> {
    let notional = s
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| CliError::InvalidNotional(s.to_string()))?;
    if notional <= Decimal::ZERO {
        return Err(CliError::InvalidNotional(s.to_string()));
    }
    Ok(notional)
}
