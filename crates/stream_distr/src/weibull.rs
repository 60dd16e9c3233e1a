//! Weibull variates via the inverse-CDF transform.

use num_traits::Float;
use stream_core::{from_fn, with_default_rng, Generate};

use crate::error::DistributionError;

/// Inverse-CDF transform of one unit draw into a Weibull variate.
///
/// # Mathematical Definition
///
/// ```text
/// w(u) = scale · (−ln(1 − u))^(1 / shape)
/// ```
///
/// For `u ∈ [0, 1)` the logarithm's argument stays in `(0, 1]`, so the
/// result is finite and non-negative for positive `shape` and `scale`.
/// The exponent divides by `shape`; callers must not pass zero (validated
/// construction goes through [`Weibull::new`]).
///
/// # Examples
///
/// ```rust
/// use stream_distr::weibull_transform;
///
/// // shape 1 reduces to the exponential distribution.
/// let v = weibull_transform(0.5_f64, 1.0, 2.0);
/// assert!((v - 1.386_294_361_119_890_6).abs() < 1e-12);
/// ```
#[inline]
pub fn weibull_transform<T: Float>(u: T, shape: T, scale: T) -> T {
    scale * (-(T::one() - u).ln()).powf(T::one() / shape)
}

/// A Weibull distribution with shape and scale parameters.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Unit, XorShift128};
/// use stream_distr::Weibull;
///
/// let dist = Weibull::new(2.0, 1.0).unwrap();
/// let mut source = Unit::new(XorShift128::with_seed(10));
/// let v = dist.sample(&mut source);
/// assert!(v >= 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weibull {
    shape: f64,
    scale: f64,
}

impl Weibull {
    /// Creates a distribution with the given shape and scale.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidShape`] if `shape` is zero or
    /// non-finite (the transform divides by it), and
    /// [`DistributionError::InvalidScale`] if `scale` is non-finite.
    pub fn new(shape: f64, scale: f64) -> Result<Self, DistributionError> {
        if shape == 0.0 || !shape.is_finite() {
            return Err(DistributionError::InvalidShape { value: shape });
        }
        if !scale.is_finite() {
            return Err(DistributionError::InvalidScale { value: scale });
        }
        Ok(Self { shape, scale })
    }

    /// The shape parameter.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// The scale parameter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Draws one variate from `source`.
    #[inline]
    pub fn sample<G>(&self, source: &mut G) -> f64
    where
        G: Generate<Output = f64>,
    {
        weibull_transform(source.generate(), self.shape, self.scale)
    }

    /// Draws one variate from a zero-argument closure source.
    #[inline]
    pub fn sample_fn<F>(&self, f: F) -> f64
    where
        F: FnMut() -> f64,
    {
        self.sample(&mut from_fn(f))
    }

    /// Draws one variate from the thread-local default source.
    #[inline]
    pub fn sample_default(&self) -> f64 {
        with_default_rng(|rng| self.sample(rng))
    }
}

// ============================================================================
// Tests
// ============================================================================
