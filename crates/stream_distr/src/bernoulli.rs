//! Bernoulli trials over an iid source.

use stream_core::{from_fn, with_default_rng, Generate};

use crate::error::DistributionError;

/// A Bernoulli distribution: `true` with the configured probability.
///
/// A draw is `u < probability` for `u` from the source. With a strictly
/// half-open source (`u ∈ [0, 1)`), the edges are exact: probability `0.0`
/// is never `true` and probability `1.0` always is.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Unit, XorShift128};
/// use stream_distr::Bernoulli;
///
/// let fair = Bernoulli::new(0.5).unwrap();
/// let mut source = Unit::new(XorShift128::with_seed(2));
/// let _hit: bool = fair.sample(&mut source);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bernoulli {
    probability: f64,
}

impl Bernoulli {
    /// Creates a distribution with the given success probability.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidProbability`] if `probability`
    /// is NaN or outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self, DistributionError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(DistributionError::InvalidProbability {
                value: probability,
            });
        }
        Ok(Self { probability })
    }

    /// The configured success probability.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Draws one trial from `source`.
    #[inline]
    pub fn sample<G>(&self, source: &mut G) -> bool
    where
        G: Generate<Output = f64>,
    {
        source.generate() < self.probability
    }

    /// Draws one trial from a zero-argument closure source.
    #[inline]
    pub fn sample_fn<F>(&self, f: F) -> bool
    where
        F: FnMut() -> f64,
    {
        self.sample(&mut from_fn(f))
    }

    /// Draws one trial from the thread-local default source.
    #[inline]
    pub fn sample_default(&self) -> bool {
        with_default_rng(|rng| self.sample(rng))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stream_core::{Unit, XorShift128};

    // ======== Construction ========

    #[test]
    fn rejects_out_of_domain_probability() {
        assert!(Bernoulli::new(-0.1).is_err());
        assert!(Bernoulli::new(1.1).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
    }

    #[test]
    fn accepts_boundary_probabilities() {
        assert!(Bernoulli::new(0.0).is_ok());
        assert!(Bernoulli::new(1.0).is_ok());
    }

    // ======== Edge probabilities ========

    #[test]
    fn probability_zero_is_never_true() {
        let never = Bernoulli::new(0.0).unwrap();
        let mut source = Unit::new(XorShift128::with_seed(3));
        for _ in 0..10_000 {
            assert!(!never.sample(&mut source));
        }
    }

    #[test]
    fn probability_one_is_always_true_over_half_open_source() {
        let always = Bernoulli::new(1.0).unwrap();
        let mut source = Unit::new(XorShift128::with_seed(3));
        for _ in 0..10_000 {
            assert!(always.sample(&mut source));
        }
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let half = Bernoulli::new(0.5).unwrap();
        assert!(!half.sample_fn(|| 0.5));
        assert!(half.sample_fn(|| 0.499_999));
    }

    // ======== Frequency ========

    #[test]
    fn hit_rate_approaches_probability() {
        let dist = Bernoulli::new(0.3).unwrap();
        let mut source = Unit::new(XorShift128::with_seed(55));
        let n = 100_000;
        let hits = (0..n).filter(|_| dist.sample(&mut source)).count();
        let rate = hits as f64 / n as f64;
        assert!((rate - 0.3).abs() < 0.01, "rate drifted: {rate}");
    }

    // ======== Call shapes ========

    #[test]
    fn closure_shape_matches_generator_shape() {
        let dist = Bernoulli::new(0.4).unwrap();
        let engine = XorShift128::with_seed(19);

        let mut direct = Unit::new(engine);
        let mut cloned = Unit::new(engine);
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut direct), dist.sample_fn(|| cloned.generate()));
        }
    }
}
