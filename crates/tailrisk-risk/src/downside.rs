//! Annualized downside deviation.
//!
//! Downside deviation here is the Bessel-corrected sample standard
//! deviation of the strictly negative returns, annualized by `√T`. Zero
//! returns are not losses and are excluded.

use std::fmt;

use serde::{Deserialize, Serialize};
use tailrisk_math::descriptive::{ensure_finite, sample_std_dev};

use crate::error::{RiskError, RiskResult, Statistic};
use crate::volatility::validate_annualization;

/// What to report when there are too few negative returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownsidePolicy {
    /// Fail with insufficient data for fewer than two negative returns.
    #[default]
    Fail,
    /// Report `0.0` when there are no negative returns at all. Exactly one
    /// negative return still fails: its dispersion is undefined, not zero.
    ZeroWhenEmpty,
}

impl DownsidePolicy {
    /// Returns the snake_case name of the policy.
    pub fn as_str(self) -> &'static str {
        match self {
            DownsidePolicy::Fail => "fail",
            DownsidePolicy::ZeroWhenEmpty => "zero_when_empty",
        }
    }
}

impl fmt::Display for DownsidePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DownsidePolicy {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "fail" => Ok(DownsidePolicy::Fail),
            "zero_when_empty" | "zero" => Ok(DownsidePolicy::ZeroWhenEmpty),
            other => Err(RiskError::invalid_parameter(
                "downside_policy",
                format!("unknown policy '{other}', expected 'fail' or 'zero_when_empty'"),
            )),
        }
    }
}

/// The strictly negative returns, in their original order.
pub fn negative_returns(returns: &[f64]) -> Vec<f64> {
    returns.iter().copied().filter(|r| *r < 0.0).collect()
}

/// Annualized downside deviation: `stdev(R⁻) · √T` where `R⁻ = {r < 0}`.
///
/// # Errors
///
/// Returns [`RiskError::InsufficientData`] when fewer than two returns are
/// negative, unless `policy` is [`DownsidePolicy::ZeroWhenEmpty`] and none
/// are negative.
pub fn annualized_downside_deviation(
    returns: &[f64],
    annualization_factor: f64,
    policy: DownsidePolicy,
) -> RiskResult<f64> {
    validate_annualization(annualization_factor)?;
    if returns.is_empty() {
        return Err(RiskError::insufficient_data(
            Statistic::DownsideDeviation,
            "returns",
            2,
            0,
        ));
    }

    ensure_finite(returns)
        .map_err(|e| RiskError::from_math(Statistic::DownsideDeviation, "returns", e))?;

    let losses = negative_returns(returns);
    log::debug!("{} of {} returns are negative", losses.len(), returns.len());

    if losses.is_empty() && policy == DownsidePolicy::ZeroWhenEmpty {
        return Ok(0.0);
    }

    let sd = sample_std_dev(&losses)
        .map_err(|e| RiskError::from_math(Statistic::DownsideDeviation, "negative returns", e))?;
    RiskError::ensure_finite(
        Statistic::DownsideDeviation,
        sd * annualization_factor.sqrt(),
    )
}
