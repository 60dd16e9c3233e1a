//! Error types for filter construction.
//!
//! Every filter validates its parameters once, at construction time.
//! The evaluation path ([`crate::SequenceFilter::needs_regenerate`]) is
//! infallible and never revisits these checks.

use thiserror::Error;

/// Errors raised when a filter is built from invalid parameters.
///
/// # Examples
///
/// ```
/// use stream_filters::{AscendantRun, FilterError};
///
/// let err = AscendantRun::new(1).unwrap_err();
/// assert!(matches!(err, FilterError::RunTooShort { length: 1, min: 2 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError {
    /// Run length below the minimum the filter can act on.
    #[error("run length {length} is too short: must be at least {min}")]
    RunTooShort {
        /// Requested run length.
        length: usize,
        /// Smallest length the filter accepts.
        min: usize,
    },

    /// Window length of zero observes nothing.
    #[error("window length must be at least 1")]
    ZeroWindow,

    /// Pattern length of zero matches nothing.
    #[error("pattern length must be at least 1")]
    ZeroPattern,

    /// Scan window too small to contain a single pattern occurrence.
    #[error("window of {window} entries cannot hold a pattern of length {pattern}")]
    WindowShorterThanPattern {
        /// Requested scan window.
        window: usize,
        /// Requested pattern length.
        pattern: usize,
    },

    /// Interval bounds that are non-finite or inverted.
    #[error("invalid bounds [{min}, {max}]: must be finite with min <= max")]
    InvalidBounds {
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },

    /// Reference point that is NaN or infinite.
    #[error("reference value {value} must be finite")]
    NonFiniteReference {
        /// Reference as supplied.
        value: f64,
    },

    /// Distance-from-reference tolerance that is negative or non-finite.
    #[error("tolerance {value} must be finite and non-negative")]
    InvalidTolerance {
        /// Tolerance as supplied.
        value: f64,
    },

    /// Consecutive-difference threshold that is zero, negative or non-finite.
    #[error("difference threshold {value} must be finite and positive")]
    NonPositiveDifference {
        /// Threshold as supplied.
        value: f64,
    },
}

// ============================================================================
// Tests
// ============================================================================
