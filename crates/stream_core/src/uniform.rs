//! Uniform scaling from raw engine words to floating-point intervals.
//!
//! Engines emit raw unsigned words; this module maps them onto `[0, 1]`,
//! `[0, 1)`, `[min, max]` and `[min, max)` with a fixed divide-by-range
//! formula. The half-open variants multiply the closed unit value by
//! [`UNIT_EXCLUSIVE_SCALE`] so the excluded endpoint is never reached, even
//! when the raw word equals the engine's maximum.

use crate::generate::Generate;

/// Largest multiplier strictly below one.
///
/// A closed unit draw times this constant stays strictly below `1.0` for
/// every representable input, which is what guarantees the open endpoint of
/// the half-open intervals.
pub const UNIT_EXCLUSIVE_SCALE: f64 = 1.0 - f64::EPSILON;

/// Raw unsigned engine output that can be scaled onto the unit interval.
pub trait RawWord: Copy {
    /// Maps the raw word onto the closed unit interval `[0, 1]` by dividing
    /// by the type's maximum value.
    fn to_unit_closed(self) -> f64;
}

impl RawWord for u32 {
    #[inline]
    fn to_unit_closed(self) -> f64 {
        f64::from(self) / f64::from(u32::MAX)
    }
}

impl RawWord for u64 {
    #[inline]
    fn to_unit_closed(self) -> f64 {
        self as f64 / u64::MAX as f64
    }
}

/// Uniform scaling over any generator of raw unsigned words.
///
/// Blanket-implemented for every [`Generate`] whose output is a
/// [`RawWord`], so all engines pick these methods up for free.
///
/// # Examples
///
/// ```rust
/// use stream_core::{UnitUniform, XorShift32};
///
/// let mut rng = XorShift32::with_seed(42).unwrap();
/// let v = rng.next_range(-2.0, 3.0);
/// assert!((-2.0..3.0).contains(&v));
/// ```
pub trait UnitUniform: Generate
where
    Self::Output: RawWord,
{
    /// Next value in the closed unit interval `[0, 1]`.
    #[inline]
    fn next_unit_closed(&mut self) -> f64 {
        self.generate().to_unit_closed()
    }

    /// Next value in the half-open unit interval `[0, 1)`.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.next_unit_closed() * UNIT_EXCLUSIVE_SCALE
    }

    /// Next value in the closed range `[min, max]`.
    #[inline]
    fn next_range_closed(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit_closed()
    }

    /// Next value in the half-open range `[min, max)`.
    #[inline]
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }
}

impl<G> UnitUniform for G
where
    G: Generate,
    G::Output: RawWord,
{
}

/// An engine wrapped as a unit-interval `f64` generator.
///
/// Fixes one scaling mode at construction ([`Unit::new`] for `[0, 1)`,
/// [`Unit::closed`] for `[0, 1]`) so the wrapped engine can be handed to
/// anything expecting `Generate<Output = f64>`.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, Unit, XorShift128};
///
/// let mut source = Unit::new(XorShift128::with_seed(7));
/// let u = source.generate();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Unit<G> {
    source: G,
    inclusive: bool,
}

impl<G> Unit<G>
where
    G: Generate,
    G::Output: RawWord,
{
    /// Wraps `source` as a half-open `[0, 1)` generator.
    #[inline]
    pub fn new(source: G) -> Self {
        Self {
            source,
            inclusive: false,
        }
    }

    /// Wraps `source` as a closed `[0, 1]` generator.
    #[inline]
    pub fn closed(source: G) -> Self {
        Self {
            source,
            inclusive: true,
        }
    }

    /// Fills `out` with consecutive draws.
    pub fn fill(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.generate();
        }
    }

    /// Borrows the wrapped engine.
    #[inline]
    pub fn get_ref(&self) -> &G {
        &self.source
    }

    /// Returns the wrapped engine, consuming the adapter.
    #[inline]
    pub fn into_inner(self) -> G {
        self.source
    }
}

impl<G> Generate for Unit<G>
where
    G: Generate,
    G::Output: RawWord,
{
    type Output = f64;

    #[inline]
    fn generate(&mut self) -> f64 {
        if self.inclusive {
            self.source.next_unit_closed()
        } else {
            self.source.next_unit()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{Lcg64, XorShift128, XorShift32, XorShift64};
    use crate::generate::from_fn;
    use approx::assert_relative_eq;

    // ======== RawWord scaling ========

    #[test]
    fn raw_extremes_map_to_unit_endpoints() {
        assert_eq!(0_u32.to_unit_closed(), 0.0);
        assert_eq!(u32::MAX.to_unit_closed(), 1.0);
        assert_eq!(0_u64.to_unit_closed(), 0.0);
        assert_eq!(u64::MAX.to_unit_closed(), 1.0);
    }

    #[test]
    fn half_open_never_reaches_one_even_at_raw_max() {
        let mut pegged = from_fn(|| u32::MAX);
        let u = pegged.next_unit();
        assert!(u < 1.0);
        assert_eq!(u, UNIT_EXCLUSIVE_SCALE);

        let mut pegged64 = from_fn(|| u64::MAX);
        assert!(pegged64.next_unit() < 1.0);
    }

    #[test]
    fn exclusive_scale_is_strictly_below_one() {
        assert!(UNIT_EXCLUSIVE_SCALE < 1.0);
        assert!(UNIT_EXCLUSIVE_SCALE > 0.999_999_999);
    }

    // ======== Extension methods on engines ========

    #[test]
    fn next_unit_bounds_hold_across_engines() {
        let mut xs = XorShift128::with_seed(3);
        let mut lcg = Lcg64::with_seed(3);
        for _ in 0..10_000 {
            let a = xs.next_unit();
            let b = lcg.next_unit();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }

    #[test]
    fn next_unit_closed_bounds_hold() {
        let mut xs = XorShift32::with_seed(9).unwrap();
        for _ in 0..10_000 {
            let u = xs.next_unit_closed();
            assert!((0.0..=1.0).contains(&u));
        }
    }

    #[test]
    fn range_scaling_matches_divide_by_range_formula() {
        // First raw word of XorShift32 seeded with 42 is 11_355_432.
        let mut rng = XorShift32::with_seed(42).unwrap();
        let v = rng.next_range_closed(-2.0, 3.0);
        let expected = -2.0 + 5.0 * (f64::from(11_355_432_u32) / f64::from(u32::MAX));
        assert_relative_eq!(v, expected);
        assert_relative_eq!(v, -1.986_780_537_289_283_3, max_relative = 1e-12);
    }

    #[test]
    fn range_bounds_hold_for_half_open_and_closed() {
        let mut rng = XorShift64::with_seed(17).unwrap();
        for _ in 0..10_000 {
            let open = rng.next_range(-1.5, 2.5);
            assert!((-1.5..2.5).contains(&open));
            let closed = rng.next_range_closed(-1.5, 2.5);
            assert!((-1.5..=2.5).contains(&closed));
        }
    }

    #[test]
    fn degenerate_range_returns_the_endpoint() {
        let mut rng = Lcg64::new();
        assert_eq!(rng.next_range_closed(4.0, 4.0), 4.0);
        assert_eq!(rng.next_range(4.0, 4.0), 4.0);
    }

    // ======== Unit adapter ========

    #[test]
    fn unit_adapter_matches_extension_method() {
        let engine = XorShift128::with_seed(5);
        let mut adapter = Unit::new(engine);
        let mut reference = engine;
        for _ in 0..100 {
            assert_eq!(adapter.generate(), reference.next_unit());
        }
    }

    #[test]
    fn closed_adapter_matches_closed_extension() {
        let engine = Lcg64::with_seed(5);
        let mut adapter = Unit::closed(engine);
        let mut reference = engine;
        for _ in 0..100 {
            assert_eq!(adapter.generate(), reference.next_unit_closed());
        }
    }

    #[test]
    fn fill_draws_consecutively() {
        let mut adapter = Unit::new(XorShift128::with_seed(21));
        let mut buf = [0.0_f64; 16];
        adapter.fill(&mut buf);

        let mut reference = Unit::new(XorShift128::with_seed(21));
        for v in buf {
            assert_eq!(v, reference.generate());
        }
    }

    #[test]
    fn into_inner_returns_advanced_engine() {
        let mut adapter = Unit::new(XorShift32::with_seed(1).unwrap());
        adapter.generate();
        let engine = adapter.into_inner();
        assert_ne!(engine.state(), 1);
    }

    // ======== Properties ========

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_word_scales_into_the_closed_unit_interval(word in any::<u32>()) {
            let u = word.to_unit_closed();
            prop_assert!((0.0..=1.0).contains(&u));
        }

        #[test]
        fn half_open_draws_stay_below_one_for_every_seed(seed in 1u64..) {
            let mut rng = XorShift64::with_seed(seed).unwrap();
            for _ in 0..64 {
                let u = rng.next_unit();
                prop_assert!((0.0..1.0).contains(&u), "seed {seed} produced {u}");
            }
        }

        #[test]
        fn closed_range_draws_respect_integer_bounds(
            seed in any::<u64>(),
            lower in -1_000i32..1_000,
            span in 1i32..1_000,
        ) {
            let (min, max) = (f64::from(lower), f64::from(lower + span));
            let mut rng = Lcg64::with_seed(seed);
            for _ in 0..32 {
                let v = rng.next_range_closed(min, max);
                prop_assert!((min..=max).contains(&v), "{v} outside [{min}, {max}]");
            }
        }
    }
}
