//! Tail probability for VaR and CVaR.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

/// Significance level ε, the tail probability used by VaR and CVaR.
///
/// Always strictly between 0 and 1. A 5% level corresponds to 95%
/// confidence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// The reference level of 5%.
    pub const DEFAULT: SignificanceLevel = SignificanceLevel(0.05);

    /// Creates a significance level.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidParameter`] unless `0 < epsilon < 1`.
    pub fn new(epsilon: f64) -> RiskResult<Self> {
        if epsilon > 0.0 && epsilon < 1.0 {
            Ok(Self(epsilon))
        } else {
            Err(RiskError::invalid_parameter(
                "significance",
                format!("must be strictly between 0 and 1, got {epsilon}"),
            ))
        }
    }

    /// Creates a significance level from a confidence level (`1 - ε`).
    pub fn from_confidence(confidence: f64) -> RiskResult<Self> {
        Self::new(1.0 - confidence)
    }

    /// The tail probability ε.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The confidence level `1 - ε`.
    pub fn confidence(self) -> f64 {
        1.0 - self.0
    }

    /// ε expressed as a percentage.
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for SignificanceLevel {
    type Error = RiskError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SignificanceLevel> for f64 {
    fn from(level: SignificanceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SignificanceLevel {
    /// Formats as a percentage without trailing zeros, e.g. `5%` or `2.5%`.
    /// Levels too small for four decimals use the shortest exact form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = format!("{:.4}", self.as_percent());
        let pct = pct.trim_end_matches('0').trim_end_matches('.');
        if pct == "0" {
            write!(f, "{}%", self.as_percent())
        } else {
            write!(f, "{pct}%")
        }
    }
}
