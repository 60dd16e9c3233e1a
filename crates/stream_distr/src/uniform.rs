//! Uniform range scaling over an iid source.

use num_traits::Float;
use stream_core::{from_fn, with_default_rng, Generate, UNIT_EXCLUSIVE_SCALE};

use crate::error::DistributionError;

/// Maps a unit-interval draw onto `[min, max]` by linear scaling.
///
/// # Mathematical Definition
///
/// ```text
/// scale_unit(u) = min + (max - min) · u
/// ```
///
/// The output interval follows the input interval: a closed `u ∈ [0, 1]`
/// covers `[min, max]`, a half-open `u ∈ [0, 1)` stays below `max`.
///
/// # Examples
///
/// ```rust
/// use stream_distr::scale_unit;
///
/// assert_eq!(scale_unit(0.0, -2.0, 3.0), -2.0);
/// assert_eq!(scale_unit(1.0, -2.0, 3.0), 3.0);
/// assert_eq!(scale_unit(0.5, -2.0, 3.0), 0.5);
/// ```
#[inline]
pub fn scale_unit<T: Float>(u: T, min: T, max: T) -> T {
    min + (max - min) * u
}

/// A uniform distribution over a configured range.
///
/// [`Uniform::new`] produces the half-open `[min, max)`; the unit draw is
/// multiplied by [`UNIT_EXCLUSIVE_SCALE`] before scaling, so the upper
/// endpoint is excluded even over a closed source.
/// [`Uniform::new_inclusive`] produces the closed `[min, max]`.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Unit, XorShift128};
/// use stream_distr::Uniform;
///
/// let dist = Uniform::new(-1.0, 1.0).unwrap();
/// let mut source = Unit::new(XorShift128::with_seed(4));
/// for _ in 0..100 {
///     let v = dist.sample(&mut source);
///     assert!((-1.0..1.0).contains(&v));
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uniform {
    min: f64,
    max: f64,
    inclusive: bool,
}

impl Uniform {
    /// Creates the half-open distribution `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidRange`] if either bound is
    /// non-finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, DistributionError> {
        Self::validated(min, max, false)
    }

    /// Creates the closed distribution `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidRange`] if either bound is
    /// non-finite or `min > max`.
    pub fn new_inclusive(min: f64, max: f64) -> Result<Self, DistributionError> {
        Self::validated(min, max, true)
    }

    fn validated(min: f64, max: f64, inclusive: bool) -> Result<Self, DistributionError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(DistributionError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            inclusive,
        })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether the upper bound is included.
    #[inline]
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Draws one value from `source`.
    #[inline]
    pub fn sample<G>(&self, source: &mut G) -> f64
    where
        G: Generate<Output = f64>,
    {
        let u = source.generate();
        let u = if self.inclusive {
            u
        } else {
            u * UNIT_EXCLUSIVE_SCALE
        };
        scale_unit(u, self.min, self.max)
    }

    /// Draws one value from a zero-argument closure source.
    #[inline]
    pub fn sample_fn<F>(&self, f: F) -> f64
    where
        F: FnMut() -> f64,
    {
        self.sample(&mut from_fn(f))
    }

    /// Draws one value from the thread-local default source.
    #[inline]
    pub fn sample_default(&self) -> f64 {
        with_default_rng(|rng| self.sample(rng))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stream_core::{DefaultRng, Unit, XorShift128};

    // ======== Construction ========

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            Uniform::new(2.0, 1.0),
            Err(DistributionError::InvalidRange { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
        assert!(Uniform::new_inclusive(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn accepts_degenerate_range() {
        let dist = Uniform::new_inclusive(4.0, 4.0).unwrap();
        let mut source = Unit::new(XorShift128::new());
        assert_eq!(dist.sample(&mut source), 4.0);
    }

    // ======== Bounds ========

    #[test]
    fn half_open_bounds_hold() {
        let dist = Uniform::new(-3.0, 7.0).unwrap();
        let mut source = Unit::new(XorShift128::with_seed(11));
        for _ in 0..10_000 {
            let v = dist.sample(&mut source);
            assert!((-3.0..7.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn half_open_excludes_max_even_over_closed_source() {
        let dist = Uniform::new(0.0, 2.0).unwrap();
        // A source pegged at the closed upper endpoint.
        let v = dist.sample_fn(|| 1.0);
        assert!(v < 2.0);
    }

    #[test]
    fn inclusive_reaches_both_endpoints_from_pegged_sources() {
        let dist = Uniform::new_inclusive(0.0, 2.0).unwrap();
        assert_eq!(dist.sample_fn(|| 0.0), 0.0);
        assert_eq!(dist.sample_fn(|| 1.0), 2.0);
    }

    // ======== Call shapes ========

    #[test]
    fn closure_shape_matches_generator_shape() {
        let dist = Uniform::new(-1.0, 1.0).unwrap();
        let engine = XorShift128::with_seed(8);

        let mut direct = Unit::new(engine);
        let a = dist.sample(&mut direct);

        let mut cloned = Unit::new(engine);
        let b = dist.sample_fn(|| cloned.generate());

        assert_eq!(a, b);
    }

    #[test]
    fn default_shape_matches_seeded_default_rng() {
        let dist = Uniform::new(0.0, 10.0).unwrap();
        with_default_rng(|rng| *rng = DefaultRng::with_seed(77));
        let from_default = dist.sample_default();

        let mut reference = DefaultRng::with_seed(77);
        assert_eq!(from_default, dist.sample(&mut reference));
    }

    // ======== Moments ========

    #[test]
    fn sample_mean_approaches_midpoint() {
        let dist = Uniform::new(-2.0, 6.0).unwrap();
        let mut source = Unit::new(XorShift128::with_seed(123));
        let n = 100_000;
        let mean: f64 = (0..n).map(|_| dist.sample(&mut source)).sum::<f64>() / n as f64;
        assert!((mean - 2.0).abs() < 0.05, "mean drifted: {mean}");
    }
}
