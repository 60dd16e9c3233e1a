//! `rand` ecosystem interop.
//!
//! Every engine implements [`rand::RngCore`] and [`rand::SeedableRng`], so
//! the whole `rand` API surface (`Rng::gen_range`, `Distribution::sample`,
//! shuffles) works against these deterministic engines, and externally
//! constructed generators can be byte-seeded through the standard trait.
//!
//! `from_seed` semantics for the xorshift engines: an all-zero byte seed is
//! the one state the recurrence cannot leave, so it is substituted with the
//! engine's documented default state. This mirrors the convention of the
//! published xorshift crates.

use rand::{Error, RngCore, SeedableRng};

use super::{Lcg32, Lcg64, XorShift128, XorShift32, XorShift64};
use crate::generate::Generate;

fn fill_from_u32(mut next: impl FnMut() -> u32, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(4);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next().to_le_bytes());
    }
    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let bytes = next().to_le_bytes();
        rem.copy_from_slice(&bytes[..rem.len()]);
    }
}

fn fill_from_u64(mut next: impl FnMut() -> u64, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next().to_le_bytes());
    }
    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        let bytes = next().to_le_bytes();
        rem.copy_from_slice(&bytes[..rem.len()]);
    }
}

// ============================================================================
// XorShift32
// ============================================================================

impl RngCore for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generate()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // Low word first, matching rand_core's widening convention.
        let lo = u64::from(self.generate());
        let hi = u64::from(self.generate());
        lo | (hi << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u32(|| self.generate(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        match Self::with_seed(u32::from_le_bytes(seed)) {
            Ok(rng) => rng,
            Err(_) => Self::new(),
        }
    }
}

// ============================================================================
// XorShift64
// ============================================================================

impl RngCore for XorShift64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.generate() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.generate()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u64(|| self.generate(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        match Self::with_seed(u64::from_le_bytes(seed)) {
            Ok(rng) => rng,
            Err(_) => Self::new(),
        }
    }
}

// ============================================================================
// XorShift128
// ============================================================================

impl RngCore for XorShift128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generate()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.generate());
        let hi = u64::from(self.generate());
        lo | (hi << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u32(|| self.generate(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift128 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let words = [
            u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]),
            u32::from_le_bytes([seed[4], seed[5], seed[6], seed[7]]),
            u32::from_le_bytes([seed[8], seed[9], seed[10], seed[11]]),
            u32::from_le_bytes([seed[12], seed[13], seed[14], seed[15]]),
        ];
        match Self::from_state(words) {
            Ok(rng) => rng,
            Err(_) => Self::new(),
        }
    }
}

// ============================================================================
// Lcg32 / Lcg64
// ============================================================================

impl RngCore for Lcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generate()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.generate());
        let hi = u64::from(self.generate());
        lo | (hi << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u32(|| self.generate(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u32::from_le_bytes(seed))
    }
}

impl RngCore for Lcg64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Top bits carry the longest sub-period in a power-of-two LCG.
        (self.generate() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.generate()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from_u64(|| self.generate(), dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u64::from_le_bytes(seed))
    }
}

// ============================================================================
// Tests
// ============================================================================
