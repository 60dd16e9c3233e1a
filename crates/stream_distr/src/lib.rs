//! # stream_distr
//!
//! Distribution transforms of the randstream workspace: stateless maps
//! from unit-interval iid draws to target-distributed values.
//!
//! ## Transforms
//!
//! - [`Uniform`] - linear range scaling, half-open or closed.
//! - [`Bernoulli`] - boolean trials against a probability threshold.
//! - [`IrwinHall`] - sums of N unit draws, a cheap normal approximation.
//! - [`Weibull`] - inverse-CDF transform ([`weibull_transform`]).
//! - [`Normal`] - Marsaglia polar method ([`polar_pair`]), two deviates per
//!   round; [`NormalSource`] turns it into a one-value-per-call generator
//!   with an invalidatable spare.
//!
//! ## Call shapes
//!
//! Every transform accepts its iid source three ways, all numerically
//! identical for the same underlying unit stream:
//!
//! ```rust
//! use stream_core::{with_default_rng, DefaultRng, Generate, Unit, XorShift128};
//! use stream_distr::Bernoulli;
//!
//! let dist = Bernoulli::new(0.25).unwrap();
//!
//! // (a) no source: the thread-local default engine
//! let _ = dist.sample_default();
//!
//! // (b) a zero-argument closure
//! let mut engine = Unit::new(XorShift128::with_seed(5));
//! let _ = dist.sample_fn(|| engine.generate());
//!
//! // (c) any generator value
//! let mut source = Unit::new(XorShift128::with_seed(5));
//! let _ = dist.sample(&mut source);
//! ```
//!
//! Parameters are validated once at construction; sampling paths never
//! re-check and never clamp.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bernoulli;
pub mod error;
pub mod irwin_hall;
pub mod normal;
pub mod uniform;
pub mod weibull;

pub use bernoulli::Bernoulli;
pub use error::DistributionError;
pub use irwin_hall::IrwinHall;
pub use normal::{polar_pair, Normal, NormalSource};
pub use uniform::{scale_unit, Uniform};
pub use weibull::{weibull_transform, Weibull};
