//! Asset return matrix.

use ndarray::{Array2, ArrayView1, Axis};

use crate::error::{SimError, SimResult};

/// Daily returns for a set of assets.
///
/// Stored as an `assets × days` matrix; row `i` is the return series of
/// asset `i`, column `t` is trading day `t`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetReturns {
    names: Vec<String>,
    matrix: Array2<f64>,
}

impl AssetReturns {
    /// Builds a return matrix from named rows.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Shape`] if the row count differs from the name
    /// count, and [`SimError::InvalidParameter`] for an empty matrix.
    pub fn new(names: Vec<String>, matrix: Array2<f64>) -> SimResult<Self> {
        if names.len() != matrix.nrows() {
            return Err(SimError::Shape(format!(
                "{} asset names for {} return rows",
                names.len(),
                matrix.nrows()
            )));
        }
        if matrix.nrows() == 0 {
            return Err(SimError::invalid_parameter("assets", "at least one asset is required"));
        }
        if matrix.ncols() == 0 {
            return Err(SimError::invalid_parameter("days", "at least one day is required"));
        }
        Ok(Self { names, matrix })
    }

    /// Builds a return matrix from per-asset series of equal length.
    pub fn from_series(series: Vec<(String, Vec<f64>)>) -> SimResult<Self> {
        let n_days = series.first().map_or(0, |(_, s)| s.len());
        if let Some((name, s)) = series.iter().find(|(_, s)| s.len() != n_days) {
            return Err(SimError::Shape(format!(
                "asset '{name}' has {} returns, expected {n_days}",
                s.len()
            )));
        }

        let n_assets = series.len();
        let (names, rows): (Vec<String>, Vec<Vec<f64>>) = series.into_iter().unzip();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let matrix = Array2::from_shape_vec((n_assets, n_days), flat)
            .map_err(|e| SimError::Shape(e.to_string()))?;
        Self::new(names, matrix)
    }

    /// Number of assets.
    pub fn n_assets(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of trading days.
    pub fn n_days(&self) -> usize {
        self.matrix.ncols()
    }

    /// Asset names in generation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The full `assets × days` matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Return series of the asset at `index`.
    pub fn asset(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.n_assets()).then(|| self.matrix.index_axis(Axis(0), index))
    }

    /// Return series of the named asset.
    pub fn asset_by_name(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.asset(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_series() {
        let returns = AssetReturns::from_series(vec![
            ("a".to_string(), vec![0.01, -0.02, 0.03]),
            ("b".to_string(), vec![0.00, 0.01, -0.01]),
        ])
        .unwrap();

        assert_eq!(returns.n_assets(), 2);
        assert_eq!(returns.n_days(), 3);
        assert_eq!(returns.matrix(), &array![[0.01, -0.02, 0.03], [0.00, 0.01, -0.01]]);
        assert_eq!(returns.asset_by_name("b").unwrap()[2], -0.01);
        assert!(returns.asset(2).is_none());
    }

    #[test]
    fn test_ragged_series_rejected() {
        let err = AssetReturns::from_series(vec![
            ("a".to_string(), vec![0.01, -0.02]),
            ("b".to_string(), vec![0.00]),
        ])
        .unwrap_err();
        assert!(matches!(err, SimError::Shape(_)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(AssetReturns::from_series(vec![]).is_err());
        assert!(AssetReturns::from_series(vec![("a".to_string(), vec![])]).is_err());
    }

    #[test]
    fn test_name_count_mismatch() {
        let err = AssetReturns::new(vec!["a".to_string()], array![[0.1], [0.2]]).unwrap_err();
        assert!(matches!(err, SimError::Shape(_)));
    }
}
