//! Risk report.

use std::fmt;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tailrisk_math::quantile::QuantileMethod;

use crate::error::{RiskError, RiskResult, Statistic};
use crate::significance::SignificanceLevel;

/// Label for annualized volatility.
pub const VOLATILITY_LABEL: &str = "Annualized Volatility";
/// Label for annualized downside deviation.
pub const DOWNSIDE_LABEL: &str = "Annualized Downside Deviation";

/// The four risk statistics of a portfolio return series.
///
/// Computed once by [`RiskCalculator::report`](crate::RiskCalculator::report)
/// and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Annualized volatility.
    pub volatility: f64,
    /// Annualized downside deviation.
    pub downside_deviation: f64,
    /// Historical VaR (signed return).
    pub var: f64,
    /// Historical CVaR (signed return).
    pub cvar: f64,
    /// Significance level ε used for VaR and CVaR.
    pub significance: SignificanceLevel,
    /// Quantile rule used for VaR.
    pub quantile_method: QuantileMethod,
    /// Periods per year used for annualization.
    pub annualization_factor: f64,
    /// Number of returns in the series.
    pub observations: usize,
    /// Number of strictly negative returns.
    pub negative_returns: usize,
    /// Number of returns at or below VaR.
    pub tail_size: usize,
}

impl RiskReport {
    /// Label for the VaR line, e.g. `VaR (5%)`.
    pub fn var_label(&self) -> String {
        format!("VaR ({})", self.significance)
    }

    /// Label for the CVaR line, e.g. `CVaR (5%)`.
    pub fn cvar_label(&self) -> String {
        format!("CVaR ({})", self.significance)
    }

    /// The four headline statistics as `(label, value)` pairs.
    pub fn metrics(&self) -> [(String, f64); 4] {
        [
            (VOLATILITY_LABEL.to_string(), self.volatility),
            (DOWNSIDE_LABEL.to_string(), self.downside_deviation),
            (self.var_label(), self.var),
            (self.cvar_label(), self.cvar),
        ]
    }

    /// Converts VaR and CVaR into monetary losses on a notional.
    ///
    /// A return of `-0.0106` on a notional of 1,000,000 is a loss of
    /// 10,600.00. Amounts are rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidParameter`] for a non-positive notional.
    pub fn loss_amounts(&self, notional: Decimal) -> RiskResult<LossAmounts> {
        if notional <= Decimal::ZERO {
            return Err(RiskError::invalid_parameter(
                "notional",
                format!("must be positive, got {notional}"),
            ));
        }

        let to_loss = |ret: f64| -> RiskResult<Decimal> {
            let ret = Decimal::from_f64(ret).ok_or(RiskError::NonFinite {
                statistic: Statistic::LossAmount,
                value: ret,
            })?;
            Ok((-ret * notional).round_dp(2))
        };

        Ok(LossAmounts {
            notional,
            var: to_loss(self.var)?,
            cvar: to_loss(self.cvar)?,
        })
    }
}

impl fmt::Display for RiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = self.metrics();
        let width = metrics.iter().map(|(l, _)| l.len() + 1).max().unwrap_or(0);
        for (label, value) in metrics {
            writeln!(f, "{:<width$} {:.6}", format!("{label}:"), value)?;
        }
        Ok(())
    }
}

/// VaR and CVaR expressed as monetary losses.
///
/// Positive amounts are losses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossAmounts {
    /// Notional the returns were applied to.
    pub notional: Decimal,
    /// Loss at VaR.
    pub var: Decimal,
    /// Expected loss beyond VaR.
    pub cvar: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_report() -> RiskReport {
        RiskReport {
            volatility: 0.112_828_276,
            downside_deviation: 0.065_460_332,
            var: -0.010_616_717,
            cvar: -0.014_405_680,
            significance: SignificanceLevel::DEFAULT,
            quantile_method: QuantileMethod::Linear,
            annualization_factor: 252.0,
            observations: 252,
            negative_returns: 122,
            tail_size: 13,
        }
    }

    #[test]
    fn test_display_six_decimals() {
        let text = sample_report().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Annualized Volatility:"));
        assert!(lines[0].ends_with("0.112828"));
        assert!(lines[1].ends_with("0.065460"));
        assert!(lines[2].starts_with("VaR (5%):"));
        assert!(lines[2].ends_with("-0.010617"));
        assert!(lines[3].starts_with("CVaR (5%):"));
        assert!(lines[3].ends_with("-0.014406"));
    }

    #[test]
    fn test_loss_amounts() {
        let losses = sample_report().loss_amounts(dec!(1000000)).unwrap();
        assert_eq!(losses.var, dec!(10616.72));
        assert_eq!(losses.cvar, dec!(14405.68));
    }

    #[test]
    fn test_loss_amounts_reject_non_positive_notional() {
        assert!(sample_report().loss_amounts(Decimal::ZERO).is_err());
        assert!(sample_report().loss_amounts(dec!(-5)).is_err());
    }

    #[test]
    fn test_serde_shape() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"quantile_method\":\"linear\""));
        let back: RiskReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tail_size, report.tail_size);
        assert_eq!(back.quantile_method, report.quantile_method);
        approx::assert_relative_eq!(back.var, report.var, max_relative = 1e-12);
        approx::assert_relative_eq!(
            back.significance.value(),
            report.significance.value(),
            max_relative = 1e-12
        );
    }
}
