//! XorShift generators over 32, 64 and 128 bits of state.
//!
//! The recurrences and shift constants follow Marsaglia's "Xorshift RNGs"
//! (2003) exactly; they are compatibility-relevant and must not be altered.
//! The all-zero state is a fixed point of every xorshift recurrence, so the
//! constructors that accept a full state reject it with
//! [`SeedError::ZeroState`].

use crate::error::SeedError;
use crate::generate::Generate;

// ============================================================================
// XorShift32
// ============================================================================

/// 32-bit xorshift generator with the canonical `13, 17, 5` shift triple.
///
/// Period `2^32 - 1` over the non-zero 32-bit states. Each call applies
///
/// ```text
/// x ^= x << 13;  x ^= x >> 17;  x ^= x << 5;
/// ```
///
/// and returns the updated word.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, XorShift32};
///
/// let mut rng = XorShift32::with_seed(42).unwrap();
/// assert_eq!(rng.generate(), 11_355_432);
/// assert_eq!(rng.generate(), 2_836_018_348);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Default seed from Marsaglia's paper.
    pub const DEFAULT_SEED: u32 = 2_463_534_242;

    /// Creates a generator seeded with [`Self::DEFAULT_SEED`].
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Self::DEFAULT_SEED,
        }
    }

    /// Creates a generator from a caller-supplied seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::ZeroState`] if `seed` is zero: the recurrence
    /// maps zero to itself and the stream would be constant.
    pub fn with_seed(seed: u32) -> Result<Self, SeedError> {
        if seed == 0 {
            return Err(SeedError::ZeroState {
                engine: "XorShift32",
            });
        }
        Ok(Self { state: seed })
    }

    /// Returns the current raw state word.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generate for XorShift32 {
    type Output = u32;

    #[inline]
    fn generate(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

// ============================================================================
// XorShift64
// ============================================================================

/// 64-bit xorshift generator with the canonical `13, 7, 17` shift triple.
///
/// Period `2^64 - 1` over the non-zero 64-bit states. Each call applies
///
/// ```text
/// x ^= x << 13;  x ^= x >> 7;  x ^= x << 17;
/// ```
///
/// and returns the updated word.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, XorShift64};
///
/// let mut rng = XorShift64::with_seed(1).unwrap();
/// assert_eq!(rng.generate(), 1_082_269_761);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Default seed from Marsaglia's paper.
    pub const DEFAULT_SEED: u64 = 88_172_645_463_325_252;

    /// Creates a generator seeded with [`Self::DEFAULT_SEED`].
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Self::DEFAULT_SEED,
        }
    }

    /// Creates a generator from a caller-supplied seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::ZeroState`] if `seed` is zero.
    pub fn with_seed(seed: u64) -> Result<Self, SeedError> {
        if seed == 0 {
            return Err(SeedError::ZeroState {
                engine: "XorShift64",
            });
        }
        Ok(Self { state: seed })
    }

    /// Returns the current raw state word.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generate for XorShift64 {
    type Output = u64;

    #[inline]
    fn generate(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

// ============================================================================
// XorShift128
// ============================================================================

/// 128-bit xorshift generator over four named 32-bit sub-states.
///
/// Period `2^128 - 1` over the non-all-zero states. Each call rotates the
/// four words `a, b, c, d` and refreshes `d`, which is also the output:
///
/// ```text
/// t = a ^ (a << 11);
/// a = b;  b = c;  c = d;
/// d = d ^ (d >> 19) ^ t ^ (t >> 8);
/// ```
///
/// The shift triple `11, 19, 8` and the rotation order are bit-for-bit
/// compatible with the widely deployed four-word variant.
///
/// # Examples
///
/// ```rust
/// use stream_core::{Generate, XorShift128};
///
/// let mut rng = XorShift128::new();
/// assert_eq!(rng.generate(), 3_382_769_108);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XorShift128 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl XorShift128 {
    /// Default word `a`, from Marsaglia's paper.
    pub const DEFAULT_SEED: u32 = 123_456_789;

    /// Default full state `[a, b, c, d]`.
    ///
    /// Words `b`, `c`, `d` are the fixed companion constants of the
    /// deployed four-word generator; because they are non-zero, any
    /// single-word seed produces a valid state.
    pub const DEFAULT_STATE: [u32; 4] =
        [Self::DEFAULT_SEED, 842_502_087, 3_579_807_591, 273_326_509];

    /// Creates a generator with [`Self::DEFAULT_STATE`].
    #[inline]
    pub fn new() -> Self {
        let [a, b, c, d] = Self::DEFAULT_STATE;
        Self { a, b, c, d }
    }

    /// Creates a generator with word `a` replaced by `seed`.
    ///
    /// Words `b`, `c`, `d` keep their defaults, so the state is non-zero
    /// for every `seed`, including zero.
    #[inline]
    pub fn with_seed(seed: u32) -> Self {
        let [_, b, c, d] = Self::DEFAULT_STATE;
        Self { a: seed, b, c, d }
    }

    /// Creates a generator from a full four-word state `[a, b, c, d]`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::ZeroState`] if all four words are zero.
    pub fn from_state(state: [u32; 4]) -> Result<Self, SeedError> {
        if state == [0, 0, 0, 0] {
            return Err(SeedError::ZeroState {
                engine: "XorShift128",
            });
        }
        let [a, b, c, d] = state;
        Ok(Self { a, b, c, d })
    }

    /// Returns the current four-word state `[a, b, c, d]`.
    #[inline]
    pub fn state(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Default for XorShift128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generate for XorShift128 {
    type Output = u32;

    #[inline]
    fn generate(&mut self) -> u32 {
        let t = self.a ^ (self.a << 11);
        self.a = self.b;
        self.b = self.c;
        self.c = self.d;
        self.d = (self.d ^ (self.d >> 19)) ^ (t ^ (t >> 8));
        self.d
    }
}

// ============================================================================
// Tests
// ============================================================================
