//! Deterministic pseudo-random engines.
//!
//! Five fixed-width generators with bit-for-bit reproducible recurrences:
//!
//! - [`XorShift32`], [`XorShift64`], [`XorShift128`] - the classic xorshift
//!   family (Marsaglia, 2003) over one, one and four state words.
//! - [`Lcg32`], [`Lcg64`] - linear-congruential generators with the
//!   Numerical Recipes and Knuth MMIX constants.
//!
//! All engines implement [`Generate`](crate::Generate) (raw word per call)
//! plus [`rand::RngCore`] and [`rand::SeedableRng`] for ecosystem interop.
//! [`DefaultRng`] wraps the 128-bit variant as the documented default unit
//! source used when a caller supplies no source of their own.
//!
//! None of these are cryptographically secure; they are fast, reproducible
//! stream generators for simulation and procedural content.

mod compat;
mod default;
mod lcg;
mod xorshift;

pub use default::{with_default_rng, DefaultRng};
pub use lcg::{Lcg32, Lcg64};
pub use xorshift::{XorShift128, XorShift32, XorShift64};
