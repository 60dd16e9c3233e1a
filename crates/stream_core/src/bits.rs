//! Raw bit-pattern conversions between integer and floating forms.
//!
//! Plain value-conversion glue with no algorithmic content: word joins and
//! splits plus bit-for-bit reinterpretation between unsigned words and
//! floats of the same width.

/// Joins two 32-bit words into one 64-bit word, `high` in the top half.
#[inline]
pub fn join_words(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// Splits a 64-bit word into `(high, low)` 32-bit halves.
#[inline]
pub fn split_word(word: u64) -> (u32, u32) {
    ((word >> 32) as u32, word as u32)
}

/// Reinterprets a raw 32-bit pattern as `f32`.
#[inline]
pub fn f32_from_pattern(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Reinterprets an `f32` as its raw 32-bit pattern.
#[inline]
pub fn pattern_from_f32(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterprets a raw 64-bit pattern as `f64`.
#[inline]
pub fn f64_from_pattern(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Reinterprets an `f64` as its raw 64-bit pattern.
#[inline]
pub fn pattern_from_f64(value: f64) -> u64 {
    value.to_bits()
}

/// Builds an `f64` from two raw 32-bit words, `high` in the top half.
#[inline]
pub fn f64_from_words(high: u32, low: u32) -> f64 {
    f64::from_bits(join_words(high, low))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_and_split_round_trip() {
        let word = join_words(0xDEAD_BEEF, 0x0123_4567);
        assert_eq!(word, 0xDEAD_BEEF_0123_4567);
        assert_eq!(split_word(word), (0xDEAD_BEEF, 0x0123_4567));
    }

    #[test]
    fn f32_pattern_round_trips() {
        for v in [0.0_f32, -1.5, f32::MAX, f32::MIN_POSITIVE] {
            assert_eq!(f32_from_pattern(pattern_from_f32(v)), v);
        }
    }

    #[test]
    fn f64_pattern_round_trips() {
        for v in [0.0_f64, -2.25, 1e300, f64::EPSILON] {
            assert_eq!(f64_from_pattern(pattern_from_f64(v)), v);
        }
    }

    #[test]
    fn f64_from_words_matches_joined_pattern() {
        let bits = pattern_from_f64(3.5);
        let (high, low) = split_word(bits);
        assert_eq!(f64_from_words(high, low), 3.5);
    }

    #[test]
    fn known_pattern_one() {
        // IEEE 754: 1.0f64 is 0x3FF0000000000000.
        assert_eq!(pattern_from_f64(1.0), 0x3FF0_0000_0000_0000);
        assert_eq!(f64_from_pattern(0x3FF0_0000_0000_0000), 1.0);
    }
}
