//! Tailrisk Configuration Layer
//!
//! Loads, validates and renders the settings of a risk run: generator seed,
//! horizon, asset universe, portfolio weights and the statistic conventions.
//!
//! # Example
//!
//! ```rust
//! use tailrisk_config::{RunConfig, RunOverrides, Validate};
//!
//! let config = RunConfig::from_toml_str("seed = 7\nsignificance = 0.01").unwrap();
//! assert_eq!(config.trading_days, 252);
//! assert!(config.is_valid());
//!
//! let overrides = RunOverrides { seed: Some(42), ..RunOverrides::default() };
//! let config = config.with_overrides(&overrides).unwrap();
//! assert_eq!(config.seed, 42);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod run;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use run::{RunConfig, RunOverrides};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::run::{RunConfig, RunOverrides};
}
