//! Run configuration.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tailrisk_math::quantile::QuantileMethod;
use tailrisk_risk::downside::DownsidePolicy;
use tailrisk_risk::portfolio::{PortfolioAggregator, Weighting};
use tailrisk_risk::volatility::TRADING_DAYS_PER_YEAR;
use tailrisk_risk::{RiskCalculator, RiskError, SignificanceLevel};
use tailrisk_sim::{AssetSpec, DEFAULT_SEED};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Everything needed to reproduce one risk run.
///
/// Defaults reproduce the reference run: seed 42, 252 trading days, ε = 5%,
/// three equally weighted assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for the return generator.
    #[serde(default = "default_seed")]
    pub seed: u32,

    /// Trading days of returns to generate per asset.
    #[serde(default = "default_trading_days")]
    pub trading_days: usize,

    /// Periods per year used to annualize volatility and downside deviation.
    #[serde(default = "default_annualization_factor")]
    pub annualization_factor: f64,

    /// Significance level ε for VaR and CVaR.
    #[serde(default = "default_significance")]
    pub significance: f64,

    /// Quantile rule for VaR.
    #[serde(default)]
    pub quantile_method: QuantileMethod,

    /// Behaviour when there are too few negative returns.
    #[serde(default)]
    pub downside_policy: DownsidePolicy,

    /// Notional for monetary loss amounts (None = returns only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notional: Option<Decimal>,

    /// Per-asset portfolio weights (None = equal weights).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,

    /// Assets in generation order.
    #[serde(default = "AssetSpec::reference_universe")]
    pub assets: Vec<AssetSpec>,
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

fn default_trading_days() -> usize {
    252
}

fn default_annualization_factor() -> f64 {
    TRADING_DAYS_PER_YEAR
}

fn default_significance() -> f64 {
    SignificanceLevel::DEFAULT.value()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            trading_days: default_trading_days(),
            annualization_factor: default_annualization_factor(),
            significance: default_significance(),
            quantile_method: QuantileMethod::default(),
            downside_policy: DownsidePolicy::default(),
            notional: None,
            weights: None,
            assets: AssetSpec::reference_universe(),
        }
    }
}

impl RunConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading run configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: RunConfig = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to a TOML file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The significance level as a validated value.
    pub fn significance_level(&self) -> ConfigResult<SignificanceLevel> {
        Ok(SignificanceLevel::new(self.significance)?)
    }

    /// Portfolio weighting implied by `weights`.
    pub fn weighting(&self) -> Weighting {
        match &self.weights {
            Some(weights) => Weighting::Custom(weights.clone()),
            None => Weighting::Equal,
        }
    }

    /// Aggregator configured with this run's weighting.
    pub fn aggregator(&self) -> PortfolioAggregator {
        PortfolioAggregator::new(self.weighting())
    }

    /// Risk calculator configured with this run's conventions.
    pub fn calculator(&self) -> ConfigResult<RiskCalculator> {
        Ok(RiskCalculator::new()
            .with_significance(self.significance_level()?)
            .with_quantile_method(self.quantile_method)
            .with_downside_policy(self.downside_policy)
            .with_annualization_factor(self.annualization_factor)?)
    }

    /// Apply command-line style overrides, then re-validate.
    pub fn with_overrides(mut self, overrides: &RunOverrides) -> ConfigResult<Self> {
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(days) = overrides.trading_days {
            self.trading_days = days;
        }
        if let Some(significance) = overrides.significance {
            self.significance = significance;
        }
        if let Some(method) = overrides.quantile_method {
            self.quantile_method = method;
        }
        if let Some(policy) = overrides.downside_policy {
            self.downside_policy = policy;
        }
        if let Some(notional) = overrides.notional {
            self.notional = Some(notional);
        }
        self.validate_or_error()?;
        Ok(self)
    }
}

/// Optional values that take precedence over a loaded configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOverrides {
    /// Generator seed.
    pub seed: Option<u32>,
    /// Trading days per asset.
    pub trading_days: Option<usize>,
    /// Significance level ε.
    pub significance: Option<f64>,
    /// Quantile rule for VaR.
    pub quantile_method: Option<QuantileMethod>,
    /// Downside deviation policy.
    pub downside_policy: Option<DownsidePolicy>,
    /// Notional for loss amounts.
    pub notional: Option<Decimal>,
}

impl Validate for RunConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.significance > 0.0 && self.significance < 1.0) {
            errors.push(ValidationError::with_rule(
                "significance",
                format!("must be strictly between 0 and 1, got {}", self.significance),
                "open_unit_interval",
            ));
        }

        if self.trading_days == 0 {
            errors.push(ValidationError::with_rule(
                "trading_days",
                "At least one trading day is required",
                "positive_count",
            ));
        }

        if !(self.annualization_factor.is_finite() && self.annualization_factor > 0.0) {
            errors.push(ValidationError::with_rule(
                "annualization_factor",
                format!("must be positive and finite, got {}", self.annualization_factor),
                "positive_finite",
            ));
        }

        if self.assets.is_empty() {
            errors.push(ValidationError::with_rule(
                "assets",
                "At least one asset is required",
                "positive_count",
            ));
        }

        let mut names = HashSet::new();
        for (i, asset) in self.assets.iter().enumerate() {
            if asset.name.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("assets[{i}].name"),
                    "Name cannot be empty",
                ));
            } else if !names.insert(asset.name.as_str()) {
                errors.push(ValidationError::with_rule(
                    format!("assets[{i}].name"),
                    format!("Duplicate asset name '{}'", asset.name),
                    "unique_name",
                ));
            }
            if let Err(e) = asset.validate() {
                errors.push(ValidationError::new(format!("assets[{i}]"), e.to_string()));
            }
        }

        // An empty asset list is already reported above.
        if self.weights.is_some() && !self.assets.is_empty() {
            if let Err(e) = self.weighting().validate(self.assets.len()) {
                let message = match e {
                    RiskError::InvalidParameter { reason, .. } => reason,
                    other => other.to_string(),
                };
                errors.push(ValidationError::with_rule(
                    "weights",
                    message,
                    "portfolio_weights",
                ));
            }
        }

        if let Some(notional) = self.notional {
            if notional <= Decimal::ZERO {
                errors.push(ValidationError::with_rule(
                    "notional",
                    "Notional must be positive",
                    "positive_notional",
                ));
            }
        }

        errors
    }
}
