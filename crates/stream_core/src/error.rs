//! Error types for engine construction.

use thiserror::Error;

/// Errors raised when seeding an engine with a degenerate state.
///
/// XorShift recurrences map the all-zero state to itself, so a generator
/// seeded that way would emit zeroes forever. Constructors that accept a
/// full state reject it up front instead of producing a broken stream.
///
/// # Examples
///
/// ```rust
/// use stream_core::{SeedError, XorShift32};
///
/// let err = XorShift32::with_seed(0).unwrap_err();
/// assert_eq!(err, SeedError::ZeroState { engine: "XorShift32" });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The supplied seed words were all zero.
    #[error("all-zero state is degenerate for {engine}: the stream would be constant zero")]
    ZeroState {
        /// Name of the engine that rejected the seed.
        engine: &'static str,
    },
}

// ============================================================================
// Tests
// ============================================================================
