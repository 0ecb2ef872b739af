//! Polar-method Gaussian sampling.
//!
//! The Marsaglia polar method produces deviates in pairs; one is returned
//! and the other is cached for the next call. Uniforms are built with 53
//! bits of precision from two 32-bit draws (`a >> 5`, `b >> 6`), the
//! layout used by the reference MT19937 `genrand_res53`.

use rand::RngCore;

const TWO_POW_26: f64 = 67_108_864.0;
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// Uniform double in `[0, 1)` with 53 bits of precision.
pub fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    let a = f64::from(rng.next_u32() >> 5);
    let b = f64::from(rng.next_u32() >> 6);
    (a * TWO_POW_26 + b) / TWO_POW_53
}

/// Stateful standard normal sampler.
///
/// The cached spare deviate belongs to the sampler, not the random source,
/// so the sampler must stay paired with one generator for a reproducible
/// stream.
#[derive(Debug, Clone, Default)]
pub struct PolarGaussian {
    spare: Option<f64>,
}

impl PolarGaussian {
    /// Creates a sampler with no cached deviate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a standard normal deviate.
    pub fn next_standard<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        let (x1, x2, r2) = loop {
            let x1 = 2.0 * unit_f64(rng) - 1.0;
            let x2 = 2.0 * unit_f64(rng) - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                break (x1, x2, r2);
            }
        };

        let f = (-2.0 * r2.ln() / r2).sqrt();
        self.spare = Some(f * x1);
        f * x2
    }

    /// Draws from `N(mean, std_dev²)`.
    pub fn next_normal<R: RngCore + ?Sized>(&mut self, rng: &mut R, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.next_standard(rng)
    }

    /// Discards any cached deviate.
    pub fn reset(&mut self) {
        self.spare = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_mt::Mt;

    #[test]
    fn test_unit_f64_matches_seeded_mt_stream() {
        // First uniform of MT19937 seeded with 42.
        let mut rng = Mt::new(42);
        assert_eq!(unit_f64(&mut rng), 0.3745401188473625);
    }

    #[test]
    fn test_unit_f64_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let u = unit_f64(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_spare_is_consumed() {
        let mut rng = Mt::new(42);
        let mut gauss = PolarGaussian::new();
        gauss.next_standard(&mut rng);
        assert!(gauss.spare.is_some());
        gauss.next_standard(&mut rng);
        assert!(gauss.spare.is_none());
    }

    #[test]
    fn test_reset_discards_spare() {
        let mut rng = Mt::new(42);
        let mut gauss = PolarGaussian::new();
        gauss.next_standard(&mut rng);
        gauss.reset();
        assert!(gauss.spare.is_none());
        let after_reset = gauss.next_standard(&mut rng);

        let mut other_rng = Mt::new(42);
        PolarGaussian::new().next_standard(&mut other_rng);
        let fresh = PolarGaussian::new().next_standard(&mut other_rng);
        assert_eq!(after_reset, fresh);
    }

    #[test]
    fn test_first_normal_draws() {
        let mut rng = Mt::new(42);
        let mut gauss = PolarGaussian::new();
        let r0 = gauss.next_normal(&mut rng, 0.0002, 0.01);
        let r1 = gauss.next_normal(&mut rng, 0.0002, 0.01);
        approx::assert_abs_diff_eq!(r0, 0.005_167_141_530_112_3, epsilon = 1e-15);
        approx::assert_abs_diff_eq!(r1, -0.001_182_643_011_711_85, epsilon = 1e-15);
    }

    #[test]
    fn test_moments() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut gauss = PolarGaussian::new();
        let n = 200_000;
        let draws: Vec<f64> = (0..n).map(|_| gauss.next_standard(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        assert!(mean.abs() < 0.01, "mean {mean}");
        assert!((var - 1.0).abs() < 0.02, "variance {var}");
    }

    #[test]
    fn test_zero_std_dev_is_constant() {
        let mut rng = Mt::new(1);
        let mut gauss = PolarGaussian::new();
        for _ in 0..5 {
            assert_eq!(gauss.next_normal(&mut rng, 0.001, 0.0), 0.001);
        }
    }
}
