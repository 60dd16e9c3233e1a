//! The single-operation generator contract and its adapters.
//!
//! Everything that produces a stream of values, whether a raw engine, a
//! scaled uniform source, a distribution-backed source or a filtered
//! stream, exposes the same capability: [`Generate`], one value per call
//! with no failure mode.
//! Downstream code is written against this trait with static dispatch; no
//! `Box<dyn>` indirection is used anywhere in the workspace.
//!
//! Two adapters close the gap to foreign sources:
//!
//! - [`FromFn`] wraps a zero-argument closure.
//! - [`RngSource`] wraps any [`rand::RngCore`] generator as a unit-interval
//!   `f64` source.

use rand::RngCore;

/// A stateful value generator.
///
/// One operation, no arguments, no declared failure mode: a well-formed
/// generator always produces a next value, advancing its own internal state
/// as the only side effect. Determinism is per-instance: two clones started
/// from the same state produce identical streams.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, XorShift32};
///
/// let mut rng = XorShift32::with_seed(42).unwrap();
/// let mut clone = rng.clone();
/// assert_eq!(rng.generate(), clone.generate());
/// ```
pub trait Generate {
    /// The type of value this generator produces.
    type Output;

    /// Produces the next value, advancing internal state.
    fn generate(&mut self) -> Self::Output;
}

impl<G: Generate + ?Sized> Generate for &mut G {
    type Output = G::Output;

    #[inline]
    fn generate(&mut self) -> Self::Output {
        (**self).generate()
    }
}

/// A generator backed by a zero-argument closure.
///
/// Built with [`from_fn`]. This is the adapter behind every `sample_fn`
/// call shape: the closure is wrapped once and the shared generic sampling
/// path runs unchanged, so closure-fed and generator-fed draws are
/// numerically identical for the same underlying stream.
#[derive(Clone, Debug)]
pub struct FromFn<F> {
    f: F,
}

/// Wraps a zero-argument closure as a [`Generate`] implementation.
///
/// # Examples
///
/// ```rust
/// use stream_core::{from_fn, Generate};
///
/// let mut counter = 0.0_f64;
/// let mut source = from_fn(move || {
///     counter += 0.25;
///     counter
/// });
/// assert_eq!(source.generate(), 0.25);
/// assert_eq!(source.generate(), 0.5);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> T,
{
    FromFn { f }
}

impl<T, F> Generate for FromFn<F>
where
    F: FnMut() -> T,
{
    type Output = T;

    #[inline]
    fn generate(&mut self) -> T {
        (self.f)()
    }
}

/// Adapts any [`rand::RngCore`] generator into a unit-interval source.
///
/// Produces `f64` values in `[0, 1)` using 53-bit mantissa scaling of the
/// generator's raw 64-bit output. This is the boundary through which
/// externally constructed `rand` generators feed the distribution and
/// filter layers.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use stream_core::{Generate, RngSource};
///
/// let mut source = RngSource::new(StdRng::seed_from_u64(7));
/// let u = source.generate();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wraps a `rand` generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator, consuming the adapter.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> Generate for RngSource<R> {
    type Output = f64;

    #[inline]
    fn generate(&mut self) -> f64 {
        // 53 mantissa bits of the raw word, scaled into [0, 1).
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ======== FromFn ========

    #[test]
    fn from_fn_forwards_closure_values() {
        let mut values = vec![3.0, 2.0, 1.0];
        let mut source = from_fn(move || values.pop().unwrap());
        assert_eq!(source.generate(), 1.0);
        assert_eq!(source.generate(), 2.0);
        assert_eq!(source.generate(), 3.0);
    }

    #[test]
    fn from_fn_supports_non_float_output() {
        let mut n = 0_u32;
        let mut source = from_fn(move || {
            n += 1;
            n
        });
        assert_eq!(source.generate(), 1);
        assert_eq!(source.generate(), 2);
    }

    // ======== &mut forwarding ========

    #[test]
    fn mut_reference_is_a_generator() {
        fn take_generator<G: Generate<Output = u32>>(g: &mut G) -> u32 {
            g.generate()
        }

        let mut n = 10_u32;
        let mut source = from_fn(move || {
            n += 1;
            n
        });
        let by_ref = take_generator(&mut source);
        assert_eq!(by_ref, 11);
        // The original keeps advancing from where the borrow left off.
        assert_eq!(source.generate(), 12);
    }

    // ======== RngSource ========

    #[test]
    fn rng_source_stays_in_unit_interval() {
        let mut source = RngSource::new(StdRng::seed_from_u64(99));
        for _ in 0..10_000 {
            let u = source.generate();
            assert!((0.0..1.0).contains(&u), "out of range: {u}");
        }
    }

    #[test]
    fn rng_source_is_deterministic_per_seed() {
        let mut a = RngSource::new(StdRng::seed_from_u64(5));
        let mut b = RngSource::new(StdRng::seed_from_u64(5));
        for _ in 0..100 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn rng_source_into_inner_round_trips() {
        let mut source = RngSource::new(StdRng::seed_from_u64(1));
        source.generate();
        let _rng: StdRng = source.into_inner();
    }
}
