//! # Tailrisk Sim
//!
//! Synthetic daily return generation for the Tailrisk library.
//!
//! Returns are drawn per asset from `N(mean, std_dev²)` using a locally
//! owned MT19937 generator and the polar Gaussian method, which together
//! reproduce the classic seeded-Mersenne-Twister normal stream bit for bit.
//! There is no ambient global generator: each [`ReturnGenerator`] owns its
//! state, so two generators built from the same seed produce identical
//! matrices.
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_sim::{AssetSpec, ReturnGenerator};
//!
//! let specs = AssetSpec::reference_universe();
//! let mut generator = ReturnGenerator::from_seed(42);
//! let returns = generator.generate(&specs, 252).unwrap();
//!
//! assert_eq!(returns.n_assets(), 3);
//! assert_eq!(returns.n_days(), 252);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod asset;
mod error;
pub mod gaussian;
mod generator;
mod returns;

pub use asset::AssetSpec;
pub use error::{SimError, SimResult};
pub use gaussian::PolarGaussian;
pub use generator::{ReturnGenerator, DEFAULT_SEED};
pub use returns::AssetReturns;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::asset::AssetSpec;
    pub use crate::error::{SimError, SimResult};
    pub use crate::generator::ReturnGenerator;
    pub use crate::returns::AssetReturns;
}
