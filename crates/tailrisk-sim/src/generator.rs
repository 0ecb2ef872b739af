//! Seeded return generator.

use ndarray::Array2;
use rand::RngCore;
use rand_mt::Mt;

use crate::asset::AssetSpec;
use crate::error::{SimError, SimResult};
use crate::gaussian::PolarGaussian;
use crate::returns::AssetReturns;

/// Seed of the reference run.
pub const DEFAULT_SEED: u32 = 42;

/// Generates independent normal daily returns per asset.
///
/// Owns its random source; nothing is read from or written to global
/// state. Assets are drawn in the order given, each consuming `days`
/// deviates from the shared stream, so reproducing a run requires both
/// the seed and the asset order.
#[derive(Debug, Clone)]
pub struct ReturnGenerator<R = Mt> {
    rng: R,
    gaussian: PolarGaussian,
}

impl ReturnGenerator<Mt> {
    /// Creates a generator backed by MT19937 seeded with `seed`.
    pub fn from_seed(seed: u32) -> Self {
        Self::with_rng(Mt::new(seed))
    }
}

impl Default for ReturnGenerator<Mt> {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl<R: RngCore> ReturnGenerator<R> {
    /// Creates a generator around an explicit random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            gaussian: PolarGaussian::new(),
        }
    }

    /// Draws `days` returns for a single asset.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `days` is zero or the
    /// asset parameters are invalid.
    pub fn generate_asset(&mut self, spec: &AssetSpec, days: usize) -> SimResult<Vec<f64>> {
        if days == 0 {
            return Err(SimError::invalid_parameter("days", "must be positive"));
        }
        spec.validate()?;

        let series: Vec<f64> = (0..days)
            .map(|_| {
                self.gaussian
                    .next_normal(&mut self.rng, spec.mean, spec.std_dev)
            })
            .collect();

        log::trace!(
            "generated {} returns for '{}' (mean={}, std_dev={})",
            days,
            spec.name,
            spec.mean,
            spec.std_dev
        );
        Ok(series)
    }

    /// Draws a full `assets × days` return matrix, asset by asset.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for an empty asset list, zero
    /// days, or invalid asset parameters.
    pub fn generate(&mut self, specs: &[AssetSpec], days: usize) -> SimResult<AssetReturns> {
        if specs.is_empty() {
            return Err(SimError::invalid_parameter(
                "assets",
                "at least one asset is required",
            ));
        }
        if days == 0 {
            return Err(SimError::invalid_parameter("days", "must be positive"));
        }

        let mut matrix = Array2::zeros((specs.len(), days));
        for (mut row, spec) in matrix.rows_mut().into_iter().zip(specs) {
            let series = self.generate_asset(spec, days)?;
            row.iter_mut().zip(series).for_each(|(cell, r)| *cell = r);
        }

        log::debug!("generated {} assets x {} days", specs.len(), days);
        AssetReturns::new(specs.iter().map(|s| s.name.clone()).collect(), matrix)
    }
}
