//! Annualized volatility.

use tailrisk_math::descriptive::sample_std_dev;

use crate::error::{RiskError, RiskResult, Statistic};

/// Trading days per year used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Checks an annualization factor (periods per year).
pub fn validate_annualization(factor: f64) -> RiskResult<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(RiskError::invalid_parameter(
            "annualization_factor",
            format!("must be positive and finite, got {factor}"),
        ))
    }
}

/// Annualized volatility: `stdev(R) · √T`.
///
/// Uses the Bessel-corrected sample standard deviation of the full series.
///
/// # Errors
///
/// Returns [`RiskError::InsufficientData`] for fewer than two returns.
///
/// # Example
///
/// ```rust
/// use tailrisk_risk::volatility::{annualized_volatility, TRADING_DAYS_PER_YEAR};
///
/// let returns = [0.01, -0.01, 0.01, -0.01];
/// let vol = annualized_volatility(&returns, TRADING_DAYS_PER_YEAR).unwrap();
/// // sample sd = sqrt(4e-4 / 3)
/// assert!((vol - (4e-4_f64 / 3.0).sqrt() * 252_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn annualized_volatility(returns: &[f64], annualization_factor: f64) -> RiskResult<f64> {
    validate_annualization(annualization_factor)?;
    let sd = sample_std_dev(returns)
        .map_err(|e| RiskError::from_math(Statistic::Volatility, "returns", e))?;
    RiskError::ensure_finite(Statistic::Volatility, sd * annualization_factor.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_returns_have_zero_volatility() {
        let vol = annualized_volatility(&[0.25; 20], TRADING_DAYS_PER_YEAR).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_annualization_scales_by_sqrt() {
        let returns = [0.02, -0.01, 0.005, -0.015, 0.01];
        let daily = annualized_volatility(&returns, 1.0).unwrap();
        let annual = annualized_volatility(&returns, 252.0).unwrap();
        assert_relative_eq!(annual, daily * 252_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_insufficient_data() {
        for returns in [&[][..], &[0.01][..]] {
            let err = annualized_volatility(returns, TRADING_DAYS_PER_YEAR).unwrap_err();
            assert!(matches!(
                err,
                RiskError::InsufficientData {
                    statistic: Statistic::Volatility,
                    required: 2,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_bad_annualization_factor() {
        let returns = [0.01, -0.01];
        assert!(annualized_volatility(&returns, 0.0).is_err());
        assert!(annualized_volatility(&returns, -252.0).is_err());
        assert!(annualized_volatility(&returns, f64::NAN).is_err());
    }

    #[test]
    fn test_nan_return_rejected() {
        let err = annualized_volatility(&[0.01, f64::NAN, 0.02], 252.0).unwrap_err();
        assert!(matches!(err, RiskError::InvalidParameter { .. }));
    }
}
