//! Irwin-Hall sums over an iid source.

use stream_core::{from_fn, with_default_rng, Generate};

use crate::error::DistributionError;

/// The Irwin-Hall distribution: the sum of `iids` independent unit draws.
///
/// Over a source in `[0, 1]` the output lies in `[0, iids]`, with mean
/// `iids / 2` and variance `iids / 12`. By the central limit theorem the
/// sum approaches a normal distribution as `iids` grows, which makes this
/// a cheap normal approximation; the classic choice is `iids = 12`, where
/// the variance is exactly one.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Unit, XorShift128};
/// use stream_distr::IrwinHall;
///
/// let dist = IrwinHall::new(12).unwrap();
/// let mut source = Unit::closed(XorShift128::with_seed(6));
/// let v = dist.sample(&mut source);
/// assert!((0.0..=12.0).contains(&v));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrwinHall {
    iids: u32,
}

impl IrwinHall {
    /// Creates a distribution summing `iids` draws.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::ZeroIids`] if `iids` is zero; a sum of
    /// no draws is the constant zero, not a distribution.
    pub fn new(iids: u32) -> Result<Self, DistributionError> {
        if iids == 0 {
            return Err(DistributionError::ZeroIids);
        }
        Ok(Self { iids })
    }

    /// The number of draws summed per sample.
    #[inline]
    pub fn iids(&self) -> u32 {
        self.iids
    }

    /// Distribution mean, `iids / 2`.
    #[inline]
    pub fn mean(&self) -> f64 {
        f64::from(self.iids) / 2.0
    }

    /// Distribution variance, `iids / 12`.
    #[inline]
    pub fn variance(&self) -> f64 {
        f64::from(self.iids) / 12.0
    }

    /// Draws one sum from `source`.
    #[inline]
    pub fn sample<G>(&self, source: &mut G) -> f64
    where
        G: Generate<Output = f64>,
    {
        let mut sum = 0.0;
        for _ in 0..self.iids {
            sum += source.generate();
        }
        sum
    }

    /// Draws one sum from a zero-argument closure source.
    #[inline]
    pub fn sample_fn<F>(&self, f: F) -> f64
    where
        F: FnMut() -> f64,
    {
        self.sample(&mut from_fn(f))
    }

    /// Draws one sum from the thread-local default source.
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
    use stream_core::{Unit, XorShift128};

    // ======== Construction ========

    #[test]
    fn rejects_zero_iids() {
        assert_eq!(IrwinHall::new(0), Err(DistributionError::ZeroIids));
    }

    #[test]
    fn single_iid_is_the_identity_transform() {
        let dist = IrwinHall::new(1).unwrap();
        assert_eq!(dist.sample_fn(|| 0.37), 0.37);
    }

    // ======== Bounds ========

    #[test]
    fn output_stays_in_zero_to_n() {
        let dist = IrwinHall::new(5).unwrap();
        let mut source = Unit::closed(XorShift128::with_seed(13));
        for _ in 0..10_000 {
            let v = dist.sample(&mut source);
            assert!((0.0..=5.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn scripted_draws_sum_exactly() {
        let dist = IrwinHall::new(3).unwrap();
        let mut values = vec![0.75, 0.5, 0.25];
        let v = dist.sample_fn(|| values.pop().unwrap());
        assert_eq!(v, 1.5);
    }

    #[test]
    fn consumes_exactly_n_draws() {
        let dist = IrwinHall::new(4).unwrap();
        let mut calls = 0_u32;
        dist.sample_fn(|| {
            calls += 1;
            0.5
        });
        assert_eq!(calls, 4);
    }

    // ======== Moments ========

    #[test]
    fn twelve_iids_match_unit_variance_normal_approximation() {
        let dist = IrwinHall::new(12).unwrap();
        assert_eq!(dist.mean(), 6.0);
        assert_eq!(dist.variance(), 1.0);

        let mut source = Unit::new(XorShift128::with_seed(31));
        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| dist.sample(&mut source)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

        assert!((mean - 6.0).abs() < 0.05, "mean drifted: {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance drifted: {var}");
    }
}
