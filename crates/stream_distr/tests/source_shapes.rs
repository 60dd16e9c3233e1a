//! Cross-transform contract tests: the three iid-source call shapes are
//! numerically identical for the same underlying unit stream, and range
//! bounds hold over arbitrary seeds and ranges.

use proptest::prelude::*;
use stream_core::{with_default_rng, DefaultRng, Generate, Unit, XorShift128};
use stream_distr::{Bernoulli, IrwinHall, Normal, Uniform, Weibull};

fn unit_source(seed: u32) -> Unit<XorShift128> {
    Unit::new(XorShift128::with_seed(seed))
}

// ============================================================================
// Shape equivalence
// ============================================================================

#[test]
fn uniform_shapes_agree() {
    let dist = Uniform::new(-4.0, 4.0).unwrap();
    let mut generator = unit_source(100);
    let mut closure_engine = unit_source(100);
    with_default_rng(|rng| *rng = DefaultRng::with_seed(100));

    for _ in 0..200 {
        let a = dist.sample(&mut generator);
        let b = dist.sample_fn(|| closure_engine.generate());
        let c = dist.sample_default();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn bernoulli_shapes_agree() {
    let dist = Bernoulli::new(0.37).unwrap();
    let mut generator = unit_source(101);
    let mut closure_engine = unit_source(101);
    with_default_rng(|rng| *rng = DefaultRng::with_seed(101));

    for _ in 0..200 {
        let a = dist.sample(&mut generator);
        let b = dist.sample_fn(|| closure_engine.generate());
        let c = dist.sample_default();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn irwin_hall_shapes_agree() {
    let dist = IrwinHall::new(7).unwrap();
    let mut generator = unit_source(102);
    let mut closure_engine = unit_source(102);
    with_default_rng(|rng| *rng = DefaultRng::with_seed(102));

    for _ in 0..50 {
        let a = dist.sample(&mut generator);
        let b = dist.sample_fn(|| closure_engine.generate());
        let c = dist.sample_default();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn weibull_shapes_agree() {
    let dist = Weibull::new(1.5, 2.0).unwrap();
    let mut generator = unit_source(103);
    let mut closure_engine = unit_source(103);
    with_default_rng(|rng| *rng = DefaultRng::with_seed(103));

    for _ in 0..200 {
        let a = dist.sample(&mut generator);
        let b = dist.sample_fn(|| closure_engine.generate());
        let c = dist.sample_default();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn normal_pair_shapes_agree() {
    let dist = Normal::new(3.0, 1.5).unwrap();
    let mut generator = unit_source(104);
    let mut closure_engine = unit_source(104);
    with_default_rng(|rng| *rng = DefaultRng::with_seed(104));

    for _ in 0..50 {
        let a = dist.sample_pair(&mut generator);
        let b = dist.sample_pair_fn(|| closure_engine.generate());
        let c = dist.sample_pair_default();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

// ============================================================================
// Bounds over arbitrary seeds and ranges
// ============================================================================

proptest! {
    #[test]
    fn half_open_bounds_hold_for_any_seed(seed in any::<u32>(), min in -1e6_f64..1e6, span in 1e-3_f64..1e6) {
        let max = min + span;
        let dist = Uniform::new(min, max).unwrap();
        let mut source = unit_source(seed);
        for _ in 0..64 {
            let v = dist.sample(&mut source);
            prop_assert!(min <= v && v < max, "{v} outside [{min}, {max})");
        }
    }

    #[test]
    fn closed_bounds_hold_for_any_seed(seed in any::<u32>(), min in -1e6_f64..1e6, span in 0.0_f64..1e6) {
        let max = min + span;
        let dist = Uniform::new_inclusive(min, max).unwrap();
        let mut source = Unit::closed(XorShift128::with_seed(seed));
        for _ in 0..64 {
            let v = dist.sample(&mut source);
            prop_assert!(min <= v && v <= max, "{v} outside [{min}, {max}]");
        }
    }

    #[test]
    fn irwin_hall_stays_in_zero_to_n(seed in any::<u32>(), iids in 1_u32..24) {
        let dist = IrwinHall::new(iids).unwrap();
        let mut source = Unit::closed(XorShift128::with_seed(seed));
        for _ in 0..32 {
            let v = dist.sample(&mut source);
            prop_assert!(0.0 <= v && v <= f64::from(iids));
        }
    }

    #[test]
    fn weibull_is_non_negative_for_positive_scale(seed in any::<u32>(), shape in 0.2_f64..8.0, scale in 1e-3_f64..1e3) {
        let dist = Weibull::new(shape, scale).unwrap();
        let mut source = unit_source(seed);
        for _ in 0..64 {
            prop_assert!(dist.sample(&mut source) >= 0.0);
        }
    }
}
