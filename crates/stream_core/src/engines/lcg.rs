//! Linear-congruential generators over 32 and 64 bits of state.
//!
//! The update is `state = state * A + C (mod 2^width)` with fixed,
//! well-known constant pairs; the output is the updated state word. Because
//! the increment `C` is odd, every seed (including zero) produces a full
//! period stream, so the constructors are infallible.

use crate::generate::Generate;

// ============================================================================
// Lcg32
// ============================================================================

/// 32-bit linear-congruential generator with the Numerical Recipes
/// constants.
///
/// ```text
/// state = state * 1664525 + 1013904223   (mod 2^32)
/// ```
///
/// Full period `2^32`. Low-order bits have short sub-periods, as with every
/// power-of-two-modulus LCG; the uniform scaling layer consumes the whole
/// word, which keeps the weakness out of the unit interval's coarse
/// structure.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, Lcg32};
///
/// let mut rng = Lcg32::with_seed(0);
/// assert_eq!(rng.generate(), 1_013_904_223);
/// assert_eq!(rng.generate(), 1_196_435_762);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Multiplier `A` (Numerical Recipes).
    pub const MULTIPLIER: u32 = 1_664_525;

    /// Increment `C` (Numerical Recipes).
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Default seed.
    pub const DEFAULT_SEED: u32 = 0;

    /// Creates a generator seeded with [`Self::DEFAULT_SEED`].
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Self::DEFAULT_SEED,
        }
    }

    /// Creates a generator from a caller-supplied seed. Any seed is valid.
    #[inline]
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns the current raw state word.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Lcg32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generate for Lcg32 {
    type Output = u32;

    #[inline]
    fn generate(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

// ============================================================================
// Lcg64
// ============================================================================

/// 64-bit linear-congruential generator with the Knuth MMIX constants.
///
/// ```text
/// state = state * 6364136223846793005 + 1442695040888963407   (mod 2^64)
/// ```
///
/// Full period `2^64`.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, Lcg64};
///
/// let mut rng = Lcg64::with_seed(0);
/// assert_eq!(rng.generate(), 1_442_695_040_888_963_407);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Multiplier `A` (Knuth, MMIX).
    pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

    /// Increment `C` (Knuth, MMIX).
    pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Default seed.
    pub const DEFAULT_SEED: u64 = 0;

    /// Creates a generator seeded with [`Self::DEFAULT_SEED`].
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Self::DEFAULT_SEED,
        }
    }

    /// Creates a generator from a caller-supplied seed. Any seed is valid.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the current raw state word.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for Lcg64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generate for Lcg64 {
    type Output = u64;

    #[inline]
    fn generate(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
