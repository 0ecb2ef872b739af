//! Descriptive statistics.
//!
//! Thin guards around `statrs` estimators. `statrs` returns NaN for
//! degenerate samples; the functions here reject them up front so callers
//! never see a NaN masquerading as a result.

use statrs::statistics::Statistics;

use crate::error::{MathError, MathResult};

/// Checks that every observation is finite.
///
/// # Errors
///
/// Returns [`MathError::NonFinite`] naming the first NaN or infinite value.
pub fn ensure_finite(values: &[f64]) -> MathResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MathError::NonFinite {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Arithmetic mean of a sample.
///
/// Requires at least one observation.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    ensure_finite(values)?;
    Ok(values.iter().mean())
}

/// Unbiased sample variance (divisor `n - 1`).
///
/// Requires at least two observations.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    ensure_finite(values)?;
    Ok(values.iter().variance())
}

/// Bessel-corrected sample standard deviation.
///
/// A single observation has no defined sample standard deviation, so
/// fewer than two observations is an error rather than `0.0`.
///
/// # Example
///
/// ```rust
/// use tailrisk_math::descriptive::sample_std_dev;
///
/// let sd = sample_std_dev(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((sd - 1.290_994_448_735_805_6).abs() < 1e-12);
/// assert!(sample_std_dev(&[1.0]).is_err());
/// ```
pub fn sample_std_dev(values: &[f64]) -> MathResult<f64> {
    sample_variance(values).map(f64::sqrt)
}
