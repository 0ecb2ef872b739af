//! # Tailrisk Math
//!
//! Statistical primitives for the Tailrisk portfolio risk library.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: Mean and Bessel-corrected sample standard deviation
//! - **Quantiles**: Order-statistic quantile estimators (linear, lower, higher,
//!   nearest, midpoint)
//!
//! ## Design Philosophy
//!
//! - **Fail Fast**: Degenerate inputs return an error, never a silent NaN
//! - **Explicit Conventions**: The sample-size requirement of every estimator
//!   is checked here rather than left to a library default

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod descriptive;
pub mod error;
pub mod quantile;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::descriptive::{ensure_finite, mean, sample_std_dev, sample_variance};
    pub use crate::error::{MathError, MathResult};
    pub use crate::quantile::{quantile, quantile_sorted, sort_ascending, QuantileMethod};
}

pub use error::{MathError, MathResult};
