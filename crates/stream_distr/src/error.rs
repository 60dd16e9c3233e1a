//! Error types for distribution parameter validation.

use thiserror::Error;

/// Errors raised when constructing a distribution with invalid parameters.
///
/// Validation happens once, at construction; the sampling paths never
/// re-check. Nothing is clamped or defaulted: an out-of-domain parameter
/// is a caller error and fails here, loudly.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DistributionError {
    /// Probability outside `[0, 1]` or NaN.
    #[error("invalid probability {value}: must lie in [0, 1]")]
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },

    /// Range bounds non-finite or inverted.
    #[error("invalid range [{min}, {max}]: bounds must be finite with min <= max")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Weibull shape zero or non-finite; the transform divides by it.
    #[error("invalid shape {value}: must be finite and non-zero")]
    InvalidShape {
        /// The rejected shape.
        value: f64,
    },

    /// Scale parameter non-finite.
    #[error("invalid scale {value}: must be finite")]
    InvalidScale {
        /// The rejected scale.
        value: f64,
    },

    /// Mean parameter non-finite.
    #[error("invalid mean {value}: must be finite")]
    InvalidMean {
        /// The rejected mean.
        value: f64,
    },

    /// Standard deviation negative or non-finite.
    #[error("invalid deviation {value}: must be finite and non-negative")]
    InvalidDeviation {
        /// The rejected deviation.
        value: f64,
    },

    /// Irwin-Hall draw count of zero.
    #[error("iid count must be at least 1")]
    ZeroIids,
}

// ============================================================================
// Tests
// ============================================================================
