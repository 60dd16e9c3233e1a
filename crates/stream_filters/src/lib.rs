//! Sequence filters and the rejection-sampling driver built on them.
//!
//! A [`SequenceFilter`] inspects a window of recently accepted values plus a
//! candidate and decides whether accepting the candidate would complete a
//! forbidden arrangement such as a monotone run or a repeating motif.
//! [`FilteredGenerator`] wraps any
//! [`Generate`](stream_core::Generate) source in such a filter set and
//! redraws until a candidate survives, producing a stream that still looks
//! random locally but provably avoids the configured artifacts.
//!
//! Fifteen filter kinds are provided in three groups:
//!
//! - run filters over any comparable type ([`AscendantRun`],
//!   [`DescendantRun`], [`SameValueRun`]),
//! - reference filters over `f64` ([`GreaterRun`], [`LessRun`],
//!   [`InRangeRun`], [`NotInRangeRun`], [`CloseToReferenceRun`],
//!   [`ExtremeRun`], [`LittleDifferenceRun`]),
//! - pattern filters over any equatable type ([`PairFilter`],
//!   [`FrequentValueFilter`], [`SamePatternFilter`],
//!   [`OppositePatternFilter`], [`RepeatingPatternFilter`]).
//!
//! Mixed sets are expressed with the closed enums [`ScalarFilter`] (all
//! fifteen kinds, `f64` streams) and [`SymbolFilter`] (the generic kinds,
//! any ordered element type).
//!
//! # Examples
//!
//! Draw uniform variates that never cluster near 1.0 and never repeat a
//! three-step ascent:
//!
//! ```
//! use stream_core::{Generate, Unit, XorShift128};
//! use stream_filters::{AscendantRun, CloseToReferenceRun, FilteredGenerator, ScalarFilter};
//!
//! let source = Unit::new(XorShift128::with_seed(99));
//! let filters: Vec<ScalarFilter> = vec![
//!     AscendantRun::new(3).unwrap().into(),
//!     CloseToReferenceRun::new(2, 1.0, 0.05).unwrap().into(),
//! ];
//! let mut generator = FilteredGenerator::with_filters(source, filters);
//!
//! let values: Vec<f64> = (0..500).map(|_| generator.generate()).collect();
//! assert!(values.windows(3).all(|w| !(w[0] < w[1] && w[1] < w[2])));
//! assert!(values
//!     .windows(3)
//!     .all(|w| w.iter().any(|v| (v - 1.0).abs() > 0.05)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod filter;
pub mod generator;
pub mod history;
pub mod patterns;
pub mod reference;
pub mod runs;

pub use error::FilterError;
pub use filter::{ScalarFilter, SequenceFilter, SymbolFilter};
pub use generator::FilteredGenerator;
pub use history::History;
pub use patterns::{
    FrequentValueFilter, OppositePatternFilter, PairFilter, RepeatingPatternFilter,
    SamePatternFilter,
};
pub use reference::{
    CloseToReferenceRun, ExtremeRun, GreaterRun, InRangeRun, LessRun, LittleDifferenceRun,
    NotInRangeRun,
};
pub use runs::{AscendantRun, DescendantRun, SameValueRun};

pub use stream_core::Generate;
