//! Property-based tests for risk statistic invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - VaR is non-decreasing in ε
//! - CVaR never exceeds VaR
//! - Volatility ignores the order of returns
//! - All four statistics scale linearly under positive scaling
//! - The calculator is a pure function of its input

use approx::assert_relative_eq;
use proptest::prelude::*;
use tailrisk_risk::prelude::*;
use tailrisk_risk::volatility::annualized_volatility;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Daily-return-like samples with enough losses for downside deviation.
fn returns_strategy() -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(-0.1..0.1f64, 2..300),
        prop::collection::vec(-0.1..-0.0001f64, 2..5),
    )
        .prop_map(|(mut body, losses)| {
            body.extend(losses);
            body
        })
}

fn significance_strategy() -> impl Strategy<Value = SignificanceLevel> {
    (0.0001..0.9999f64).prop_map(|eps| SignificanceLevel::new(eps).unwrap())
}

/// Powers of two keep scaled arithmetic exact.
fn scale_strategy() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.125, 0.25, 0.5, 2.0, 4.0, 16.0])
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_var_monotone_in_significance(
        returns in returns_strategy(),
        a in significance_strategy(),
        b in significance_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let var_lo = historical_var(&returns, lo, QuantileMethod::Linear).unwrap();
        let var_hi = historical_var(&returns, hi, QuantileMethod::Linear).unwrap();
        prop_assert!(var_lo <= var_hi, "VaR({:?}) = {} > VaR({:?}) = {}", lo, var_lo, hi, var_hi);
    }

    #[test]
    fn prop_cvar_never_exceeds_var(
        returns in returns_strategy(),
        eps in significance_strategy(),
    ) {
        let calc = RiskCalculator::new().with_significance(eps);
        let report = calc.report(&returns).unwrap();
        prop_assert!(report.cvar <= report.var, "CVaR {} > VaR {}", report.cvar, report.var);
        prop_assert!(report.tail_size >= 1);
    }

    #[test]
    fn prop_volatility_permutation_invariant(
        returns in returns_strategy(),
        seed in any::<u64>(),
    ) {
        let mut shuffled = returns.clone();
        // Deterministic Fisher-Yates driven by a splitmix-style sequence
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let j = (state % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        let original = annualized_volatility(&returns, 252.0).unwrap();
        let permuted = annualized_volatility(&shuffled, 252.0).unwrap();
        assert_relative_eq!(original, permuted, max_relative = 1e-9, epsilon = 1e-15);
    }

    #[test]
    fn prop_positive_scaling_is_linear(
        returns in returns_strategy(),
        eps in significance_strategy(),
        k in scale_strategy(),
    ) {
        let calc = RiskCalculator::new().with_significance(eps);
        let scaled: Vec<f64> = returns.iter().map(|r| r * k).collect();

        let base = calc.report(&returns).unwrap();
        let report = calc.report(&scaled).unwrap();

        assert_relative_eq!(report.volatility, k * base.volatility, max_relative = 1e-9, epsilon = 1e-15);
        assert_relative_eq!(
            report.downside_deviation,
            k * base.downside_deviation,
            max_relative = 1e-9,
            epsilon = 1e-15
        );
        assert_relative_eq!(report.var, k * base.var, max_relative = 1e-9, epsilon = 1e-15);
        assert_relative_eq!(report.cvar, k * base.cvar, max_relative = 1e-9, epsilon = 1e-15);
    }

    #[test]
    fn prop_calculator_is_pure(returns in returns_strategy()) {
        let calc = RiskCalculator::new();
        let a = calc.report(&returns).unwrap();
        let b = calc.report(&returns).unwrap();
        prop_assert_eq!(a.volatility.to_bits(), b.volatility.to_bits());
        prop_assert_eq!(a.downside_deviation.to_bits(), b.downside_deviation.to_bits());
        prop_assert_eq!(a.var.to_bits(), b.var.to_bits());
        prop_assert_eq!(a.cvar.to_bits(), b.cvar.to_bits());
    }
}

// =============================================================================
// DETERMINISTIC EDGE CASES
// =============================================================================

#[test]
fn test_non_power_of_two_scaling() {
    let returns = [0.012, -0.004, 0.003, -0.015, 0.007, -0.009, 0.001, -0.002];
    let scaled: Vec<f64> = returns.iter().map(|r| r * 3.0).collect();
    let calc = RiskCalculator::new().with_significance(SignificanceLevel::new(0.2).unwrap());

    let base = calc.report(&returns).unwrap();
    let report = calc.report(&scaled).unwrap();

    assert_relative_eq!(report.volatility, 3.0 * base.volatility, max_relative = 1e-12);
    assert_relative_eq!(report.var, 3.0 * base.var, max_relative = 1e-12);
    assert_relative_eq!(report.cvar, 3.0 * base.cvar, max_relative = 1e-12);
}

#[test]
fn test_series_of_length_one_fails_downside() {
    let calc = RiskCalculator::new();
    assert!(matches!(
        calc.downside_deviation(&[-0.01]),
        Err(RiskError::InsufficientData { .. })
    ));
}
