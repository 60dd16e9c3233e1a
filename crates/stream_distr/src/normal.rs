//! Normal deviates via the Marsaglia polar method.

use stream_core::{from_fn, with_default_rng, Generate};

use crate::error::DistributionError;

/// Draws one pair of independent standard normal deviates from `source`.
///
/// # Algorithm
///
/// Marsaglia's polar method: map two unit draws onto the square
/// `[-1, 1] × [-1, 1]`, reject until the point falls strictly inside the
/// unit disc (and off the origin), then scale:
///
/// ```text
/// q = u² + v²,  accepted iff 0 < q < 1
/// s = sqrt(−2 ln(q) / q)
/// (z₀, z₁) = (u·s, v·s)
/// ```
///
/// The retry loop is unbounded. Each attempt accepts with probability
/// π/4, so termination is probabilistically guaranteed; a fixed
/// iteration cap would bias the output distribution.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Unit, XorShift128};
/// use stream_distr::polar_pair;
///
/// let mut source = Unit::new(XorShift128::with_seed(14));
/// let (z0, z1) = polar_pair(&mut source);
/// assert!(z0.is_finite() && z1.is_finite());
/// ```
pub fn polar_pair<G>(source: &mut G) -> (f64, f64)
where
    G: Generate<Output = f64>,
{
    loop {
        let u = 2.0 * source.generate() - 1.0;
        let v = 2.0 * source.generate() - 1.0;
        let q = u * u + v * v;
        if q > 0.0 && q < 1.0 {
            let s = (-2.0 * q.ln() / q).sqrt();
            return (u * s, v * s);
        }
    }
}

/// A normal distribution parameterized by mean and standard deviation.
///
/// [`Normal::sample_pair`] emits both deviates of one polar round; the
/// affine shift `mean + std_dev · z` is applied identically to both. For a
/// one-value-per-call stream that wastes nothing, wrap the distribution in
/// a [`NormalSource`].
///
/// # Examples
///
/// ```rust
/// use stream_core::{Unit, XorShift128};
/// use stream_distr::Normal;
///
/// let dist = Normal::new(10.0, 2.0).unwrap();
/// let mut source = Unit::new(XorShift128::with_seed(1));
/// let (a, b) = dist.sample_pair(&mut source);
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// The standard normal: mean 0, deviation 1.
    #[inline]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Creates a distribution with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidMean`] for a non-finite mean and
    /// [`DistributionError::InvalidDeviation`] for a negative or non-finite
    /// deviation. Zero deviation is allowed and degenerates to the constant
    /// `mean`.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::InvalidMean { value: mean });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(DistributionError::InvalidDeviation { value: std_dev });
        }
        Ok(Self { mean, std_dev })
    }

    /// The configured mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The configured standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Draws one pair of independent deviates from `source`.
    #[inline]
    pub fn sample_pair<G>(&self, source: &mut G) -> (f64, f64)
    where
        G: Generate<Output = f64>,
    {
        let (z0, z1) = polar_pair(source);
        (
            self.mean + self.std_dev * z0,
            self.mean + self.std_dev * z1,
        )
    }

    /// Draws one pair from a zero-argument closure source.
    #[inline]
    pub fn sample_pair_fn<F>(&self, f: F) -> (f64, f64)
    where
        F: FnMut() -> f64,
    {
        self.sample_pair(&mut from_fn(f))
    }

    /// Draws one pair from the thread-local default source.
    #[inline]
    pub fn sample_pair_default(&self) -> (f64, f64) {
        with_default_rng(|rng| self.sample_pair(rng))
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

/// A reusable normal generator: one deviate per call, nothing wasted.
///
/// Wraps a [`Normal`] and an iid source; each polar round produces two
/// deviates, the second of which is kept as a spare for the next call.
/// Reconfiguring the distribution through [`NormalSource::set_mean`] or
/// [`NormalSource::set_std_dev`] invalidates the spare, since a cached deviate
/// was shifted with the old parameters and must not leak into the new
/// stream.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, Unit, XorShift128};
/// use stream_distr::{Normal, NormalSource};
///
/// let source = Unit::new(XorShift128::with_seed(44));
/// let mut normals = NormalSource::new(Normal::standard(), source);
/// let _z: f64 = normals.generate();
/// ```
#[derive(Clone, Debug)]
pub struct NormalSource<G> {
    params: Normal,
    source: G,
    spare: Option<f64>,
}

impl<G> NormalSource<G>
where
    G: Generate<Output = f64>,
{
    /// Creates a generator drawing from `source`.
    pub fn new(params: Normal, source: G) -> Self {
        Self {
            params,
            source,
            spare: None,
        }
    }

    /// The current distribution parameters.
    #[inline]
    pub fn params(&self) -> Normal {
        self.params
    }

    /// Replaces the mean, discarding any cached spare deviate.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidMean`] for a non-finite mean.
    pub fn set_mean(&mut self, mean: f64) -> Result<(), DistributionError> {
        self.params = Normal::new(mean, self.params.std_dev())?;
        self.invalidate();
        Ok(())
    }

    /// Replaces the standard deviation, discarding any cached spare.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidDeviation`] for a negative or
    /// non-finite deviation.
    pub fn set_std_dev(&mut self, std_dev: f64) -> Result<(), DistributionError> {
        self.params = Normal::new(self.params.mean(), std_dev)?;
        self.invalidate();
        Ok(())
    }

    /// Drops the cached spare deviate, if any.
    ///
    /// The next call to `generate` will run a fresh polar round.
    #[inline]
    pub fn invalidate(&mut self) {
        self.spare = None;
    }

    /// Fills `out` with consecutive deviates.
    pub fn fill(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.generate();
        }
    }

    /// Returns the wrapped source, consuming the generator.
    pub fn into_inner(self) -> G {
        self.source
    }
}

impl<G> Generate for NormalSource<G>
where
    G: Generate<Output = f64>,
{
    type Output = f64;

    fn generate(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        let (z0, z1) = self.params.sample_pair(&mut self.source);
        self.spare = Some(z1);
        z0
    }
}

// ============================================================================
// Tests
// ============================================================================
