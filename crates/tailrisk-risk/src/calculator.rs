//! Integrated risk calculator for a portfolio return series.
//!
//! This module provides a high-level `RiskCalculator` that computes all
//! four risk statistics (volatility, downside deviation, VaR, CVaR) from
//! one return series under a single set of conventions.
//!
//! # Example
//!
//! ```rust
//! use tailrisk_risk::{RiskCalculator, SignificanceLevel};
//!
//! let returns = [0.012, -0.004, 0.003, -0.015, 0.007, -0.009, 0.001, -0.002];
//! let calc = RiskCalculator::new().with_significance(SignificanceLevel::new(0.1).unwrap());
//! let report = calc.report(&returns).unwrap();
//!
//! assert!(report.cvar <= report.var);
//! println!("{report}");
//! ```

use tailrisk_math::quantile::QuantileMethod;

use crate::downside::{annualized_downside_deviation, negative_returns, DownsidePolicy};
use crate::error::{RiskError, RiskResult, Statistic};
use crate::report::RiskReport;
use crate::significance::SignificanceLevel;
use crate::var::{historical_tail_risk, historical_var};
use crate::volatility::{annualized_volatility, validate_annualization, TRADING_DAYS_PER_YEAR};

/// Calculator for portfolio return risk statistics.
///
/// Holds conventions only, no data: the same calculator applied to the
/// same returns always yields bit-identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskCalculator {
    significance: SignificanceLevel,
    annualization_factor: f64,
    quantile_method: QuantileMethod,
    downside_policy: DownsidePolicy,
}

impl Default for RiskCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskCalculator {
    /// Creates a calculator with the reference conventions: ε = 5%,
    /// 252 trading days, linear quantiles, failing on sparse downside data.
    pub fn new() -> Self {
        Self {
            significance: SignificanceLevel::DEFAULT,
            annualization_factor: TRADING_DAYS_PER_YEAR,
            quantile_method: QuantileMethod::Linear,
            downside_policy: DownsidePolicy::Fail,
        }
    }

    /// Sets the significance level.
    #[must_use]
    pub fn with_significance(mut self, significance: SignificanceLevel) -> Self {
        self.significance = significance;
        self
    }

    /// Sets the annualization factor (periods per year).
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidParameter`] unless the factor is positive
    /// and finite.
    pub fn with_annualization_factor(mut self, factor: f64) -> RiskResult<Self> {
        validate_annualization(factor)?;
        self.annualization_factor = factor;
        Ok(self)
    }

    /// Sets the quantile rule used for VaR.
    #[must_use]
    pub fn with_quantile_method(mut self, method: QuantileMethod) -> Self {
        self.quantile_method = method;
        self
    }

    /// Sets the downside deviation policy.
    #[must_use]
    pub fn with_downside_policy(mut self, policy: DownsidePolicy) -> Self {
        self.downside_policy = policy;
        self
    }

    /// The significance level in use.
    pub fn significance(&self) -> SignificanceLevel {
        self.significance
    }

    /// The annualization factor in use.
    pub fn annualization_factor(&self) -> f64 {
        self.annualization_factor
    }

    /// The quantile rule in use.
    pub fn quantile_method(&self) -> QuantileMethod {
        self.quantile_method
    }

    /// The downside deviation policy in use.
    pub fn downside_policy(&self) -> DownsidePolicy {
        self.downside_policy
    }

    /// Annualized volatility of `returns`.
    pub fn volatility(&self, returns: &[f64]) -> RiskResult<f64> {
        annualized_volatility(returns, self.annualization_factor)
    }

    /// Annualized downside deviation of `returns`.
    pub fn downside_deviation(&self, returns: &[f64]) -> RiskResult<f64> {
        annualized_downside_deviation(returns, self.annualization_factor, self.downside_policy)
    }

    /// Historical VaR of `returns`.
    pub fn value_at_risk(&self, returns: &[f64]) -> RiskResult<f64> {
        historical_var(returns, self.significance, self.quantile_method)
    }

    /// Historical CVaR of `returns`.
    pub fn conditional_value_at_risk(&self, returns: &[f64]) -> RiskResult<f64> {
        historical_tail_risk(returns, self.significance, self.quantile_method).map(|r| r.cvar)
    }

    /// Computes all four statistics.
    ///
    /// # Errors
    ///
    /// Fails on the first statistic that cannot be computed; no partial
    /// report is returned.
    pub fn report(&self, returns: &[f64]) -> RiskResult<RiskReport> {
        if returns.is_empty() {
            return Err(RiskError::insufficient_data(
                Statistic::Volatility,
                "returns",
                2,
                0,
            ));
        }

        let volatility = self.volatility(returns)?;
        let downside_deviation = self.downside_deviation(returns)?;
        let tail = historical_tail_risk(returns, self.significance, self.quantile_method)?;

        let report = RiskReport {
            volatility,
            downside_deviation,
            var: tail.var,
            cvar: tail.cvar,
            significance: self.significance,
            quantile_method: self.quantile_method,
            annualization_factor: self.annualization_factor,
            observations: returns.len(),
            negative_returns: negative_returns(returns).len(),
            tail_size: tail.tail_size,
        };

        log::debug!(
            "risk report over {} returns: vol={:.6} dd={:.6} var={:.6} cvar={:.6}",
            report.observations,
            report.volatility,
            report.downside_deviation,
            report.var,
            report.cvar
        );
        Ok(report)
    }
}
