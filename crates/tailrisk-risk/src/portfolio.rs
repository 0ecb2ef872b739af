//! Portfolio aggregation.
//!
//! Reduces an `assets × days` return matrix to a single daily portfolio
//! return series. Weights are fixed across the whole period (daily
//! rebalancing), so day `t` of the portfolio is `Σ w_i · r_i,t`.

use ndarray::{Array1, Axis};
use serde::{Deserialize, Serialize};
use tailrisk_sim::AssetReturns;

use crate::error::{RiskError, RiskResult, Statistic};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// How asset returns are combined into a portfolio return.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Unweighted arithmetic mean across assets.
    #[default]
    Equal,
    /// Explicit per-asset weights, in asset order, summing to one.
    Custom(Vec<f64>),
}

impl Weighting {
    /// Checks the weights against an asset count.
    pub fn validate(&self, n_assets: usize) -> RiskResult<()> {
        if n_assets == 0 {
            return Err(RiskError::insufficient_data(
                Statistic::PortfolioReturns,
                "assets",
                1,
                0,
            ));
        }
        let Weighting::Custom(weights) = self else {
            return Ok(());
        };

        if weights.len() != n_assets {
            return Err(RiskError::invalid_parameter(
                "weights",
                format!("{} weights for {} assets", weights.len(), n_assets),
            ));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(RiskError::invalid_parameter(
                "weights",
                format!("weights must be finite and non-negative, got {w}"),
            ));
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RiskError::invalid_parameter(
                "weights",
                format!("weights must sum to 1, got {total}"),
            ));
        }
        Ok(())
    }
}

/// Daily portfolio return series.
///
/// Same length and day indexing as the asset series it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioReturns(Vec<f64>);

impl PortfolioReturns {
    /// Wraps an existing return series.
    pub fn new(returns: Vec<f64>) -> Self {
        Self(returns)
    }

    /// The returns, indexed by trading day.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of trading days.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the series, returning the underlying vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for PortfolioReturns {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for PortfolioReturns {
    fn from(returns: Vec<f64>) -> Self {
        Self(returns)
    }
}

/// Combines asset returns into portfolio returns.
#[derive(Debug, Clone, Default)]
pub struct PortfolioAggregator {
    weighting: Weighting,
}

impl PortfolioAggregator {
    /// Creates an aggregator with the given weighting.
    pub fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }

    /// An equal-weighted aggregator.
    pub fn equal_weighted() -> Self {
        Self::new(Weighting::Equal)
    }

    /// The weighting in use.
    pub fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    /// Aggregates the asset return matrix into a portfolio return series.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidParameter`] if custom weights do not
    /// match the assets.
    pub fn aggregate(&self, returns: &AssetReturns) -> RiskResult<PortfolioReturns> {
        self.weighting.validate(returns.n_assets())?;
        let matrix = returns.matrix();

        let portfolio: Array1<f64> = match &self.weighting {
            Weighting::Equal => matrix.mean_axis(Axis(0)).ok_or_else(|| {
                RiskError::insufficient_data(Statistic::PortfolioReturns, "assets", 1, 0)
            })?,
            Weighting::Custom(weights) => Array1::from_vec(weights.clone()).dot(matrix),
        };

        log::debug!(
            "aggregated {} assets into {} portfolio returns ({:?})",
            returns.n_assets(),
            portfolio.len(),
            self.weighting
        );
        Ok(PortfolioReturns(portfolio.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_returns() -> AssetReturns {
        AssetReturns::from_series(vec![
            ("a".to_string(), vec![0.03, -0.03, 0.00]),
            ("b".to_string(), vec![0.00, 0.03, -0.06]),
            ("c".to_string(), vec![0.03, 0.03, 0.03]),
        ])
        .unwrap()
    }

    #[test]
    fn test_equal_weighted_is_daily_mean() {
        let portfolio = PortfolioAggregator::equal_weighted()
            .aggregate(&sample_returns())
            .unwrap();
        let expected = [0.02, 0.01, -0.01];
        assert_eq!(portfolio.len(), 3);
        for (got, want) in portfolio.as_slice().iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_custom_weights() {
        let aggregator = PortfolioAggregator::new(Weighting::Custom(vec![0.5, 0.5, 0.0]));
        assert_eq!(aggregator.weighting(), &Weighting::Custom(vec![0.5, 0.5, 0.0]));
        let portfolio = aggregator.aggregate(&sample_returns()).unwrap();
        let expected = [0.015, 0.0, -0.03];
        for (got, want) in portfolio.as_slice().iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_custom_equal_weights_match_equal() {
        let third = 1.0 / 3.0;
        let custom = PortfolioAggregator::new(Weighting::Custom(vec![third; 3]))
            .aggregate(&sample_returns())
            .unwrap();
        let equal_weighted = PortfolioAggregator::equal_weighted();
        assert_eq!(equal_weighted.weighting(), &Weighting::Equal);
        let equal = equal_weighted
            .aggregate(&sample_returns())
            .unwrap();
        for (a, b) in custom.as_slice().iter().zip(equal.as_slice()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_invalid_weights() {
        let returns = sample_returns();
        for weights in [
            vec![0.5, 0.5],
            vec![0.5, 0.6, -0.1],
            vec![0.2, 0.2, 0.2],
            vec![f64::NAN, 0.5, 0.5],
        ] {
            let result = PortfolioAggregator::new(Weighting::Custom(weights.clone())).aggregate(&returns);
            assert!(
                matches!(result, Err(RiskError::InvalidParameter { .. })),
                "{weights:?} accepted"
            );
        }
    }

    #[test]
    fn test_single_asset_passthrough() {
        let returns =
            AssetReturns::from_series(vec![("only".to_string(), vec![0.01, -0.02])]).unwrap();
        let portfolio = PortfolioAggregator::default().aggregate(&returns).unwrap();
        assert_eq!(portfolio.as_slice(), &[0.01, -0.02]);
    }
}
