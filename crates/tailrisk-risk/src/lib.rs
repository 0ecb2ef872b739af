//! # tailrisk-risk
//!
//! Risk statistics for a portfolio return series.
//!
//! This crate provides:
//!
//! - **Portfolio aggregation**: Equal or custom weighted daily portfolio returns
//! - **Volatility**: Annualized sample standard deviation
//! - **Downside deviation**: Annualized dispersion of negative returns
//! - **VaR**: Historical Value at Risk (order-statistic quantile)
//! - **CVaR**: Historical Conditional VaR / expected shortfall
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_risk::prelude::*;
//! use tailrisk_sim::{AssetSpec, ReturnGenerator};
//!
//! let assets = ReturnGenerator::from_seed(42)
//!     .generate(&AssetSpec::reference_universe(), 252)?;
//! let portfolio = PortfolioAggregator::equal_weighted().aggregate(&assets)?;
//! let report = RiskCalculator::new().report(portfolio.as_slice())?;
//!
//! assert!(report.cvar <= report.var);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calculator;
pub mod downside;
mod error;
pub mod portfolio;
pub mod report;
pub mod significance;
pub mod var;
pub mod volatility;

pub use calculator::RiskCalculator;
pub use error::{RiskError, RiskResult, Statistic};
pub use report::{LossAmounts, RiskReport};
pub use significance::SignificanceLevel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::RiskCalculator;
    pub use crate::downside::DownsidePolicy;
    pub use crate::portfolio::{PortfolioAggregator, PortfolioReturns, Weighting};
    pub use crate::report::{LossAmounts, RiskReport};
    pub use crate::significance::SignificanceLevel;
    pub use crate::var::{historical_cvar, historical_var, VaRResult};
    pub use crate::{RiskError, RiskResult};
    pub use tailrisk_math::quantile::QuantileMethod;
}
