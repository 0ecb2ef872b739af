//! Per-asset return distribution parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Daily return distribution of a single asset.
///
/// An ordered `Vec<AssetSpec>` fixes the generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSpec {
    /// Display name of the asset.
    pub name: String,
    /// Mean daily return (decimal, e.g. 0.0002 for 2bp).
    pub mean: f64,
    /// Standard deviation of daily returns (decimal).
    pub std_dev: f64,
}

impl AssetSpec {
    /// Creates a new asset specification.
    pub fn new(name: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            std_dev,
        }
    }

    /// The three-asset reference universe.
    pub fn reference_universe() -> Vec<AssetSpec> {
        vec![
            AssetSpec::new("asset-1", 0.0002, 0.01),
            AssetSpec::new("asset-2", 0.0003, 0.015),
            AssetSpec::new("asset-3", 0.0001, 0.012),
        ]
    }

    /// Checks that the distribution parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for a non-finite mean or a
    /// negative or non-finite standard deviation.
    pub fn validate(&self) -> SimResult<()> {
        if !self.mean.is_finite() {
            return Err(SimError::invalid_parameter(
                format!("{}.mean", self.name),
                format!("must be finite, got {}", self.mean),
            ));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(SimError::invalid_parameter(
                format!("{}.std_dev", self.name),
                format!("must be finite and non-negative, got {}", self.std_dev),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_universe() {
        let specs = AssetSpec::reference_universe();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[1].mean, 0.0003);
        assert_eq!(specs[2].std_dev, 0.012);
        assert!(specs.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(AssetSpec::new("a", f64::NAN, 0.01).validate().is_err());
        assert!(AssetSpec::new("a", 0.0, -0.01).validate().is_err());
        assert!(AssetSpec::new("a", 0.0, f64::INFINITY).validate().is_err());
        assert!(AssetSpec::new("a", 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let spec: AssetSpec =
            serde_json::from_str(r#"{"name":"bonds","mean":0.0001,"std_dev":0.004}"#).unwrap();
        assert_eq!(spec, AssetSpec::new("bonds", 0.0001, 0.004));
    }
}
