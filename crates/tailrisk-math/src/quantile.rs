//! Order-statistic quantile estimators.
//!
//! Every method places the quantile at the virtual index `h = p * (n - 1)`
//! of the ascending sample and differs only in how it resolves a
//! fractional `h`:
//!
//! | Method     | Value at `h`                                  |
//! |------------|-----------------------------------------------|
//! | `Linear`   | `x[⌊h⌋] + (h - ⌊h⌋) * (x[⌈h⌉] - x[⌊h⌋])`       |
//! | `Lower`    | `x[⌊h⌋]`                                      |
//! | `Higher`   | `x[⌈h⌉]`                                      |
//! | `Nearest`  | `x[round(h)]`, ties to the even index         |
//! | `Midpoint` | `(x[⌊h⌋] + x[⌈h⌉]) / 2`                        |
//!
//! All methods return `x[0]` at `p = 0` and `x[n-1]` at `p = 1`, and are
//! non-decreasing in `p`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptive::ensure_finite;
use crate::error::{MathError, MathResult};

/// Rule for resolving a quantile that falls between two order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Linear interpolation between the neighbouring order statistics.
    #[default]
    Linear,
    /// The lower neighbouring order statistic.
    Lower,
    /// The higher neighbouring order statistic.
    Higher,
    /// The nearest order statistic, ties resolved to the even index.
    Nearest,
    /// The midpoint of the neighbouring order statistics.
    Midpoint,
}

impl QuantileMethod {
    /// All supported methods.
    pub const ALL: [QuantileMethod; 5] = [
        QuantileMethod::Linear,
        QuantileMethod::Lower,
        QuantileMethod::Higher,
        QuantileMethod::Nearest,
        QuantileMethod::Midpoint,
    ];

    /// Returns the lowercase name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            QuantileMethod::Linear => "linear",
            QuantileMethod::Lower => "lower",
            QuantileMethod::Higher => "higher",
            QuantileMethod::Nearest => "nearest",
            QuantileMethod::Midpoint => "midpoint",
        }
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuantileMethod {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuantileMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MathError::invalid_input(format!("unknown quantile method: {s}")))
    }
}

/// Returns a sorted copy of the sample.
///
/// # Errors
///
/// Returns [`MathError::NonFinite`] if any observation is NaN or infinite,
/// since such values have no place in an order statistic.
pub fn sort_ascending(values: &[f64]) -> MathResult<Vec<f64>> {
    ensure_finite(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Computes the `p`-quantile of an unsorted sample.
///
/// # Example
///
/// ```rust
/// use tailrisk_math::quantile::{quantile, QuantileMethod};
///
/// let xs = [4.0, 1.0, 3.0, 2.0, 5.0];
/// let q = quantile(&xs, 0.3, QuantileMethod::Linear).unwrap();
/// // h = 0.3 * 4 = 1.2 -> 2.0 + 0.2 * (3.0 - 2.0)
/// assert!((q - 2.2).abs() < 1e-12);
/// ```
pub fn quantile(values: &[f64], p: f64, method: QuantileMethod) -> MathResult<f64> {
    let sorted = sort_ascending(values)?;
    quantile_sorted(&sorted, p, method)
}

/// Computes the `p`-quantile of a sample already sorted ascending.
///
/// `p` must lie in `[0, 1]` and the sample must be non-empty.
pub fn quantile_sorted(sorted: &[f64], p: f64, method: QuantileMethod) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::invalid_input(format!(
            "quantile probability must be in [0, 1], got {p}"
        )));
    }

    let last = sorted.len() - 1;
    let h = p * last as f64;
    let lo = (h.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let frac = h - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);

    let value = match method {
        QuantileMethod::Linear => {
            if frac == 0.0 {
                a
            } else {
                lerp(a, b, frac)
            }
        }
        QuantileMethod::Lower => a,
        QuantileMethod::Higher => {
            if frac == 0.0 {
                a
            } else {
                b
            }
        }
        QuantileMethod::Nearest => {
            if frac < 0.5 || (frac == 0.5 && lo % 2 == 0) {
                a
            } else {
                b
            }
        }
        QuantileMethod::Midpoint => {
            if frac == 0.0 {
                a
            } else {
                lerp(a, b, 0.5)
            }
        }
    };

    log::trace!("quantile p={p} method={method} h={h:.4} -> {value}");
    Ok(value)
}

/// Interpolates between neighbouring order statistics `a <= b`.
///
/// The result is clamped to `[a, b]` so rounding cannot push it past a
/// neighbour. A span too wide for `f64` is interpolated in weighted form.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let span = b - a;
    let value = if span.is_finite() {
        a + t * span
    } else {
        a * (1.0 - t) + b * t
    };
    value.clamp(a, b)
}
