//! # stream_core
//!
//! Core layer of the randstream workspace: deterministic pseudo-random
//! engines, uniform scaling, and the generator contract the rest of the
//! workspace is written against.
//!
//! ## Architecture
//!
//! - [`generate`] - the [`Generate`] trait (one value per call, no failure
//!   mode) plus the [`FromFn`] closure adapter and the [`RngSource`] bridge
//!   from any [`rand::RngCore`] generator.
//! - [`engines`] - [`XorShift32`], [`XorShift64`], [`XorShift128`],
//!   [`Lcg32`], [`Lcg64`], and the documented default source
//!   [`DefaultRng`]. All engines also implement `rand`'s `RngCore` and
//!   `SeedableRng`.
//! - [`uniform`] - divide-by-range scaling of raw words onto `[0, 1]`,
//!   `[0, 1)` and arbitrary ranges; the [`Unit`] adapter turns any engine
//!   into an `f64` unit source.
//! - [`bits`] - trivial integer/float bit-pattern conversions.
//!
//! Everything is single-owner and unsynchronized: clone an engine per
//! thread rather than sharing one. None of the engines are suitable for
//! cryptography.
//!
//! ## Example
//!
//! ```rust
//! use stream_core::{Generate, Unit, UnitUniform, XorShift128};
//!
//! // Raw words:
//! let mut engine = XorShift128::with_seed(42);
//! let word = engine.generate();
//!
//! // Scaled draws, half-open:
//! let u = engine.next_unit();
//! assert!((0.0..1.0).contains(&u));
//!
//! // As a reusable f64 source:
//! let mut source = Unit::new(engine);
//! let v = source.generate();
//! assert!((0.0..1.0).contains(&v));
//! let _ = (word, v);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bits;
pub mod engines;
pub mod error;
pub mod generate;
pub mod uniform;

pub use engines::{with_default_rng, DefaultRng, Lcg32, Lcg64, XorShift128, XorShift32, XorShift64};
pub use error::SeedError;
pub use generate::{from_fn, FromFn, Generate, RngSource};
pub use uniform::{RawWord, Unit, UnitUniform, UNIT_EXCLUSIVE_SCALE};
