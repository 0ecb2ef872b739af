//! Historical Value at Risk (VaR) and Conditional VaR.
//!
//! Both statistics are read straight off the empirical return
//! distribution. VaR is the ε-quantile of the returns; CVaR is the mean of
//! the returns at or below VaR. Values are signed returns, so a loss is
//! negative and CVaR never exceeds VaR.

mod conditional;
mod historical;

pub use conditional::*;
pub use historical::*;

use serde::{Deserialize, Serialize};
use tailrisk_math::quantile::QuantileMethod;

use crate::significance::SignificanceLevel;

/// Historical tail risk at one significance level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaRResult {
    /// The ε-quantile of returns (signed, typically negative).
    pub var: f64,
    /// Mean of returns at or below `var`.
    pub cvar: f64,
    /// Significance level ε.
    pub significance: SignificanceLevel,
    /// Number of returns at or below `var`.
    pub tail_size: usize,
    /// Quantile rule used for `var`.
    pub method: QuantileMethod,
}

impl std::fmt::Display for VaRResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({}): {:.6}, CVaR({}): {:.6} [{} tail obs]",
            self.significance, self.var, self.significance, self.cvar, self.tail_size
        )
    }
}
