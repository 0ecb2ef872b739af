//! Error types for risk calculations.

use std::fmt;

use tailrisk_math::MathError;
use tailrisk_sim::SimError;
use thiserror::Error;

/// Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// The statistic being computed when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Portfolio aggregation of asset returns.
    PortfolioReturns,
    /// Annualized volatility.
    Volatility,
    /// Annualized downside deviation.
    DownsideDeviation,
    /// Historical Value-at-Risk.
    ValueAtRisk,
    /// Historical Conditional Value-at-Risk.
    ConditionalValueAtRisk,
    /// Monetary loss amounts.
    LossAmount,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statistic::PortfolioReturns => "portfolio returns",
            Statistic::Volatility => "annualized volatility",
            Statistic::DownsideDeviation => "annualized downside deviation",
            Statistic::ValueAtRisk => "historical VaR",
            Statistic::ConditionalValueAtRisk => "historical CVaR",
            Statistic::LossAmount => "loss amount",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during risk calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Fewer observations than the statistic requires.
    #[error("insufficient data for {statistic}: {context} (need at least {required}, got {actual})")]
    InsufficientData {
        /// Statistic that could not be computed.
        statistic: Statistic,
        /// Which observations were counted.
        context: String,
        /// Minimum required observations.
        required: usize,
        /// Observations available.
        actual: usize,
    },

    /// A parameter is outside its valid range.
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A computed statistic came out NaN or infinite.
    #[error("{statistic} is not finite: {value}")]
    NonFinite {
        /// Statistic that produced the value.
        statistic: Statistic,
        /// The offending value.
        value: f64,
    },
}

impl RiskError {
    /// Creates an insufficient data error.
    pub fn insufficient_data(
        statistic: Statistic,
        context: impl Into<String>,
        required: usize,
        actual: usize,
    ) -> Self {
        Self::InsufficientData {
            statistic,
            context: context.into(),
            required,
            actual,
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Tags a statistics error with the statistic and sample it came from.
    pub fn from_math(statistic: Statistic, context: &str, err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => {
                Self::insufficient_data(statistic, context, required, actual)
            }
            MathError::InvalidInput { reason } => {
                Self::invalid_parameter(statistic.to_string(), reason)
            }
            MathError::NonFinite { index, value } => Self::invalid_parameter(
                context,
                format!("observation {index} is not finite ({value})"),
            ),
        }
    }

    /// Fails unless `value` is finite.
    pub fn ensure_finite(statistic: Statistic, value: f64) -> RiskResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { statistic, value })
        }
    }
}

impl From<SimError> for RiskError {
    fn from(err: SimError) -> Self {
        match err {
            SimError::InvalidParameter { parameter, reason } => {
                Self::InvalidParameter { parameter, reason }
            }
            SimError::Shape(reason) => Self::invalid_parameter("returns", reason),
        }
    }
}
