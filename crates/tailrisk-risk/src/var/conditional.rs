//! Historical CVaR (expected shortfall) calculation.

use tailrisk_math::descriptive::mean;
use tailrisk_math::quantile::QuantileMethod;

use super::historical::{historical_var_sorted, sort_returns};
use super::VaRResult;
use crate::error::{RiskError, RiskResult, Statistic};
use crate::significance::SignificanceLevel;

/// Mean of the returns at or below `threshold`, with the tail size.
///
/// # Errors
///
/// Returns [`RiskError::InsufficientData`] if no return lies at or below
/// the threshold.
pub fn tail_mean(returns: &[f64], threshold: f64) -> RiskResult<(f64, usize)> {
    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= threshold).collect();
    let cvar = mean(&tail).map_err(|e| {
        RiskError::from_math(Statistic::ConditionalValueAtRisk, "returns at or below VaR", e)
    })?;
    Ok((RiskError::ensure_finite(Statistic::ConditionalValueAtRisk, cvar)?, tail.len()))
}

/// Historical VaR and CVaR in one pass over the sorted returns.
pub fn historical_tail_risk(
    returns: &[f64],
    significance: SignificanceLevel,
    method: QuantileMethod,
) -> RiskResult<VaRResult> {
    let sorted = sort_returns(returns, Statistic::ConditionalValueAtRisk)?;
    let var = historical_var_sorted(&sorted, significance, method)?;
    let (cvar, tail_size) = tail_mean(&sorted, var)?;

    log::debug!(
        "tail at {}: var={var:.6} cvar={cvar:.6} over {tail_size} of {} returns",
        significance,
        returns.len()
    );

    Ok(VaRResult {
        var,
        cvar,
        significance,
        tail_size,
        method,
    })
}

/// Calculate historical CVaR: the mean of returns at or below historical VaR.
///
/// A tail of a single observation is valid; CVaR then equals that return.
pub fn historical_cvar(
    returns: &[f64],
    significance: SignificanceLevel,
    method: QuantileMethod,
) -> RiskResult<f64> {
    historical_tail_risk(returns, significance, method).map(|r| r.cvar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level(eps: f64) -> SignificanceLevel {
        SignificanceLevel::new(eps).unwrap()
    }

    #[test]
    fn test_cvar_averages_tail() {
        let returns: Vec<f64> = (0..20).map(|i| -0.05 + 0.005 * f64::from(i)).collect();
        // h = 0.2 * 19 = 3.8 -> var between -0.035 and -0.03
        let result = historical_tail_risk(&returns, level(0.2), QuantileMethod::Linear).unwrap();
        assert_eq!(result.tail_size, 4);
        assert_relative_eq!(result.cvar, (-0.05 - 0.045 - 0.04 - 0.035) / 4.0, epsilon = 1e-15);
        assert!(result.cvar <= result.var);
    }

    #[test]
    fn test_single_observation_tail() {
        let returns = [-0.10, -0.01, 0.0, 0.01, 0.02];
        // h = 0.05 * 4 = 0.2 -> var = -0.082; only -0.10 lies below
        let result = historical_tail_risk(&returns, level(0.05), QuantileMethod::Linear).unwrap();
        assert_eq!(result.tail_size, 1);
        assert_eq!(result.cvar, -0.10);
    }

    #[test]
    fn test_tail_includes_ties_at_var() {
        let returns = [-0.02, -0.02, -0.02, 0.01, 0.03];
        let result = historical_tail_risk(&returns, level(0.4), QuantileMethod::Linear).unwrap();
        assert_eq!(result.var, -0.02);
        assert_eq!(result.tail_size, 3);
        assert_eq!(result.cvar, -0.02);
    }

    #[test]
    fn test_empty_tail_is_an_error() {
        let err = tail_mean(&[0.01, 0.02], -0.5).unwrap_err();
        assert!(matches!(
            err,
            RiskError::InsufficientData {
                statistic: Statistic::ConditionalValueAtRisk,
                actual: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_cvar_empty_returns() {
        assert!(historical_cvar(&[], level(0.05), QuantileMethod::Linear).is_err());
    }

    #[test]
    fn test_display() {
        let result = historical_tail_risk(&[-0.02, 0.01], level(0.05), QuantileMethod::Linear).unwrap();
        assert!(result.to_string().starts_with("VaR(5%)"));
    }
}
