//! Historical VaR calculation.

use tailrisk_math::quantile::{quantile_sorted, sort_ascending, QuantileMethod};

use crate::error::{RiskError, RiskResult, Statistic};
use crate::significance::SignificanceLevel;

/// Calculate historical VaR from a series of returns.
///
/// # Arguments
///
/// * `returns` - Historical returns (as decimals, e.g., -0.01 for -1%)
/// * `significance` - Tail probability ε (e.g., 0.05 for 95% confidence)
/// * `method` - Quantile rule; `Linear` interpolates at position `ε·(n-1)`
///
/// # Returns
///
/// The ε-quantile of `returns`, a signed return.
pub fn historical_var(
    returns: &[f64],
    significance: SignificanceLevel,
    method: QuantileMethod,
) -> RiskResult<f64> {
    let sorted = sort_returns(returns, Statistic::ValueAtRisk)?;
    historical_var_sorted(&sorted, significance, method)
}

/// Historical VaR of returns already sorted ascending.
pub fn historical_var_sorted(
    sorted: &[f64],
    significance: SignificanceLevel,
    method: QuantileMethod,
) -> RiskResult<f64> {
    let var = quantile_sorted(sorted, significance.value(), method)
        .map_err(|e| RiskError::from_math(Statistic::ValueAtRisk, "returns", e))?;
    RiskError::ensure_finite(Statistic::ValueAtRisk, var)
}

pub(crate) fn sort_returns(returns: &[f64], statistic: Statistic) -> RiskResult<Vec<f64>> {
    if returns.is_empty() {
        return Err(RiskError::insufficient_data(statistic, "returns", 1, 0));
    }
    sort_ascending(returns).map_err(|e| RiskError::from_math(statistic, "returns", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level(eps: f64) -> SignificanceLevel {
        SignificanceLevel::new(eps).unwrap()
    }

    #[test]
    fn test_historical_var() {
        let returns: Vec<f64> = vec![
            -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
        ];

        // h = 0.05 * 9 = 0.45 -> -0.02 + 0.45 * 0.005
        let var = historical_var(&returns, level(0.05), QuantileMethod::Linear).unwrap();
        assert_relative_eq!(var, -0.01775, epsilon = 1e-15);

        let lower = historical_var(&returns, level(0.05), QuantileMethod::Lower).unwrap();
        assert_eq!(lower, -0.02);
    }

    #[test]
    fn test_historical_var_is_order_independent() {
        let a = [0.01, -0.03, 0.02, -0.01, 0.0];
        let b = [-0.01, 0.0, 0.02, 0.01, -0.03];
        assert_eq!(
            historical_var(&a, level(0.2), QuantileMethod::Linear).unwrap(),
            historical_var(&b, level(0.2), QuantileMethod::Linear).unwrap()
        );
    }

    #[test]
    fn test_historical_var_empty() {
        let returns: Vec<f64> = vec![];
        let result = historical_var(&returns, level(0.05), QuantileMethod::Linear);
        assert!(matches!(
            result,
            Err(RiskError::InsufficientData {
                statistic: Statistic::ValueAtRisk,
                required: 1,
                actual: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_historical_var_single_observation() {
        let var = historical_var(&[-0.04], level(0.05), QuantileMethod::Linear).unwrap();
        assert_eq!(var, -0.04);
    }

    #[test]
    fn test_historical_var_rejects_nan() {
        let result = historical_var(&[0.01, f64::NAN], level(0.05), QuantileMethod::Linear);
        assert!(matches!(result, Err(RiskError::InvalidParameter { .. })));
    }
}
