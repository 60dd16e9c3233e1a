//! Repetition and pattern filters.
//!
//! Where the run filters in [`crate::runs`] look at unbroken trailing runs,
//! the filters here detect structure: a value echoing one seen a fixed
//! distance back, a value occurring too often inside a window, or a whole
//! motif of values repeating. They need only equality on the element type.

use crate::error::FilterError;
use crate::filter::SequenceFilter;

/// Rejects a candidate equal to the entry a fixed distance back.
///
/// With distance `d`, the candidate is rejected when it equals the history
/// entry `d` positions before the end. `PairFilter::new(0)` forbids
/// immediate echoes, `PairFilter::new(1)` forbids the A-B-A shape, and so
/// on.
///
/// # Examples
///
/// ```
/// use stream_filters::{PairFilter, SequenceFilter};
///
/// let filter = PairFilter::new(3);
/// let history = [1, 2, 3, 1];
///
/// // Three steps back from the end sits the leading 1.
/// assert!(filter.needs_regenerate(&history, &1));
/// assert!(!filter.needs_regenerate(&history, &9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairFilter {
    distance: usize,
}

impl PairFilter {
    /// Creates a filter comparing the candidate against the entry `distance`
    /// positions before the end of the history.
    pub fn new(distance: usize) -> Self {
        Self { distance }
    }

    /// Lookback distance, in entries.
    pub fn distance(&self) -> usize {
        self.distance
    }
}

impl<T: PartialEq> SequenceFilter<T> for PairFilter {
    fn required_sequence_length(&self) -> usize {
        self.distance + 1
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() > self.distance);
        history[history.len() - 1 - self.distance] == *candidate
    }
}

/// Rejects a candidate already occurring too often in the recent window.
///
/// With window `W` and allowance `a`, the candidate is rejected when it
/// appears strictly more than `a` times among the last `W` history entries.
/// An allowance of zero forbids any recurrence within the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequentValueFilter {
    window: usize,
    allowed_repeats: usize,
}

impl FrequentValueFilter {
    /// Creates a filter allowing at most `allowed_repeats` occurrences of the
    /// candidate within the last `window` entries.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ZeroWindow`] when `window` is zero.
    pub fn new(window: usize, allowed_repeats: usize) -> Result<Self, FilterError> {
        if window == 0 {
            return Err(FilterError::ZeroWindow);
        }
        Ok(Self {
            window,
            allowed_repeats,
        })
    }

    /// Number of trailing entries counted.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Occurrences tolerated before rejection.
    pub fn allowed_repeats(&self) -> usize {
        self.allowed_repeats
    }
}

impl<T: PartialEq> SequenceFilter<T> for FrequentValueFilter {
    fn required_sequence_length(&self) -> usize {
        self.window
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= self.window);
        let tail = &history[history.len() - self.window..];
        tail.iter().filter(|entry| *entry == candidate).count() > self.allowed_repeats
    }
}

/// Rejects a candidate that would echo the previous block of values.
///
/// With pattern length `P`, the filter splits the last `2 P` history entries
/// into an earlier and a recent block of `P` values each. The candidate is
/// rejected when the two blocks are elementwise equal and the candidate
/// equals the entry `P` positions before the end, which is the value a
/// period-`P` repetition would produce next.
///
/// # Examples
///
/// ```
/// use stream_filters::{SamePatternFilter, SequenceFilter};
///
/// let filter = SamePatternFilter::new(2).unwrap();
/// let history = [1, 2, 1, 2];
///
/// // Continuing 1, 2, 1, 2 with 1 would sustain the period-2 cycle.
/// assert!(filter.needs_regenerate(&history, &1));
/// assert!(!filter.needs_regenerate(&history, &2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamePatternFilter {
    length: usize,
}

impl SamePatternFilter {
    /// Creates a filter forbidding the continuation of a period-`length`
    /// repetition.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ZeroPattern`] when `length` is zero.
    pub fn new(length: usize) -> Result<Self, FilterError> {
        if length == 0 {
            return Err(FilterError::ZeroPattern);
        }
        Ok(Self { length })
    }

    /// Period of the watched repetition.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T: PartialEq> SequenceFilter<T> for SamePatternFilter {
    fn required_sequence_length(&self) -> usize {
        2 * self.length
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= 2 * self.length);
        let n = history.len();
        let p = self.length;
        let earlier = &history[n - 2 * p..n - p];
        let recent = &history[n - p..];
        *candidate == history[n - p] && earlier == recent
    }
}

/// Rejects a candidate that would sustain a blockwise alternation.
///
/// Mirror image of [`SamePatternFilter`]: the two blocks of `P` values must
/// be elementwise *unequal*, and the candidate must differ from the entry
/// `P` positions before the end. Over booleans with `P = 1` this forbids the
/// strict alternation `true, false, true, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OppositePatternFilter {
    length: usize,
}

impl OppositePatternFilter {
    /// Creates a filter forbidding the continuation of a period-`length`
    /// alternation.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ZeroPattern`] when `length` is zero.
    pub fn new(length: usize) -> Result<Self, FilterError> {
        if length == 0 {
            return Err(FilterError::ZeroPattern);
        }
        Ok(Self { length })
    }

    /// Period of the watched alternation.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T: PartialEq> SequenceFilter<T> for OppositePatternFilter {
    fn required_sequence_length(&self) -> usize {
        2 * self.length
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= 2 * self.length);
        let n = history.len();
        let p = self.length;
        let earlier = &history[n - 2 * p..n - p];
        let recent = &history[n - p..];
        *candidate != history[n - p]
            && earlier
                .iter()
                .zip(recent)
                .all(|(past, present)| past != present)
    }
}

/// Rejects a candidate that would repeat a motif seen earlier in a window.
///
/// The motif under test is the last `P - 1` history entries followed by the
/// candidate. The filter scans backward through the last `W` entries for an
/// earlier occurrence of that exact motif and rejects the candidate when one
/// exists. Unlike [`SamePatternFilter`] the earlier occurrence does not have
/// to sit immediately before the motif's tail; any position inside the
/// window counts.
///
/// # Examples
///
/// ```
/// use stream_filters::{RepeatingPatternFilter, SequenceFilter};
///
/// let filter = RepeatingPatternFilter::new(6, 3).unwrap();
/// let history = [7, 1, 2, 9, 1, 2];
///
/// // 9 would recreate the motif 1, 2, 9 first seen at the window's start.
/// assert!(filter.needs_regenerate(&history, &9));
/// assert!(!filter.needs_regenerate(&history, &3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatingPatternFilter {
    window: usize,
    length: usize,
}

impl RepeatingPatternFilter {
    /// Creates a filter scanning the last `window` entries for a repeat of a
    /// `length`-value motif ending in the candidate.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ZeroPattern`] when `length` is zero and
    /// [`FilterError::WindowShorterThanPattern`] when the window cannot hold
    /// a single occurrence of the motif.
    pub fn new(window: usize, length: usize) -> Result<Self, FilterError> {
        if length == 0 {
            return Err(FilterError::ZeroPattern);
        }
        if window < length {
            return Err(FilterError::WindowShorterThanPattern {
                window,
                pattern: length,
            });
        }
        Ok(Self { window, length })
    }

    /// Number of trailing entries scanned for an earlier occurrence.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Length of the motif, candidate included.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T: PartialEq> SequenceFilter<T> for RepeatingPatternFilter {
    fn required_sequence_length(&self) -> usize {
        self.window
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= self.window);
        let n = history.len();
        let p = self.length;
        // Earliest end position at which the motif still fits in the window.
        let start = n + p - 1 - self.window;
        (start..n).rev().any(|end| {
            history[end] == *candidate && (1..p).all(|back| history[end - back] == history[n - back])
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // PairFilter
    // ------------------------------------------------------------------------

    #[test]
    fn pair_compares_against_the_entry_at_distance() {
        let filter = PairFilter::new(3);
        let history = [1, 2, 3, 1];

        assert!(filter.needs_regenerate(&history, &1));
        assert!(!filter.needs_regenerate(&history, &9));
    }

    #[test]
    fn pair_distance_zero_forbids_immediate_echo() {
        let filter = PairFilter::new(0);

        assert!(filter.needs_regenerate(&[4], &4));
        assert!(!filter.needs_regenerate(&[4], &5));
    }

    #[test]
    fn pair_ignores_matches_at_other_distances() {
        let filter = PairFilter::new(1);
        let history = [7, 3, 7];

        // The 7 two steps back does not matter, only index n - 2.
        assert!(filter.needs_regenerate(&history, &3));
        assert!(!filter.needs_regenerate(&history, &7));
    }

    #[test]
    fn pair_required_length_covers_the_lookback() {
        let filter = PairFilter::new(4);
        assert_eq!(SequenceFilter::<i32>::required_sequence_length(&filter), 5);
    }

    // ------------------------------------------------------------------------
    // FrequentValueFilter
    // ------------------------------------------------------------------------

    #[test]
    fn frequent_rejects_overrepresented_values() {
        let filter = FrequentValueFilter::new(5, 2).unwrap();
        let history = [1, 3, 3, 7, 3];

        assert!(filter.needs_regenerate(&history, &3));
        assert!(!filter.needs_regenerate(&history, &7));
    }

    #[test]
    fn frequent_allowance_is_inclusive() {
        let filter = FrequentValueFilter::new(5, 3).unwrap();
        let history = [1, 3, 3, 7, 3];

        // Exactly three occurrences are still tolerated.
        assert!(!filter.needs_regenerate(&history, &3));
    }

    #[test]
    fn frequent_counts_only_inside_the_window() {
        let filter = FrequentValueFilter::new(2, 0).unwrap();
        let history = [5, 5, 5, 1, 2];

        // The three 5s fell out of the two-entry window.
        assert!(!filter.needs_regenerate(&history, &5));
        assert!(filter.needs_regenerate(&history, &2));
    }

    #[test]
    fn frequent_rejects_zero_window() {
        assert_eq!(
            FrequentValueFilter::new(0, 2).unwrap_err(),
            FilterError::ZeroWindow
        );
    }

    // ------------------------------------------------------------------------
    // SamePatternFilter
    // ------------------------------------------------------------------------

    #[test]
    fn same_pattern_rejects_period_continuation() {
        let filter = SamePatternFilter::new(2).unwrap();
        let history = [1, 2, 1, 2];

        assert!(filter.needs_regenerate(&history, &1));
        assert!(!filter.needs_regenerate(&history, &2));
    }

    #[test]
    fn same_pattern_accepts_when_blocks_differ() {
        let filter = SamePatternFilter::new(2).unwrap();
        let history = [1, 3, 1, 2];

        assert!(!filter.needs_regenerate(&history, &1));
    }

    #[test]
    fn same_pattern_period_one_is_a_double_repeat_check() {
        let filter = SamePatternFilter::new(1).unwrap();

        assert!(filter.needs_regenerate(&[4, 4], &4));
        assert!(!filter.needs_regenerate(&[4, 5], &5));
    }

    #[test]
    fn same_pattern_looks_past_older_noise() {
        let filter = SamePatternFilter::new(2).unwrap();
        let history = [9, 9, 1, 2, 1, 2];

        assert!(filter.needs_regenerate(&history, &1));
    }

    #[test]
    fn same_pattern_rejects_zero_length() {
        assert_eq!(
            SamePatternFilter::new(0).unwrap_err(),
            FilterError::ZeroPattern
        );
    }

    // ------------------------------------------------------------------------
    // OppositePatternFilter
    // ------------------------------------------------------------------------

    #[test]
    fn opposite_pattern_rejects_sustained_alternation() {
        let filter = OppositePatternFilter::new(2).unwrap();
        let history = [true, false, false, true];

        assert!(filter.needs_regenerate(&history, &true));
        assert!(!filter.needs_regenerate(&history, &false));
    }

    #[test]
    fn opposite_pattern_period_one_forbids_strict_alternation() {
        let filter = OppositePatternFilter::new(1).unwrap();

        // true, false so far: another true would continue flip-flopping.
        assert!(filter.needs_regenerate(&[true, false], &true));
        assert!(!filter.needs_regenerate(&[true, false], &false));
    }

    #[test]
    fn opposite_pattern_accepts_any_blockwise_agreement() {
        let filter = OppositePatternFilter::new(2).unwrap();
        // Second position agrees across the blocks.
        let history = [1, 2, 3, 2];

        assert!(!filter.needs_regenerate(&history, &5));
    }

    // ------------------------------------------------------------------------
    // RepeatingPatternFilter
    // ------------------------------------------------------------------------

    #[test]
    fn repeating_pattern_finds_an_earlier_motif() {
        let filter = RepeatingPatternFilter::new(6, 3).unwrap();
        let history = [7, 1, 2, 9, 1, 2];

        // Motif 1, 2, 9 already occurred at positions 1..=3.
        assert!(filter.needs_regenerate(&history, &9));
        assert!(!filter.needs_regenerate(&history, &3));
    }

    #[test]
    fn repeating_pattern_ignores_occurrences_outside_the_window() {
        let history = [1, 2, 9, 0, 1, 2];

        // A full-width scan still sees the 1, 2, 9 occurrence at the front.
        let wide = RepeatingPatternFilter::new(6, 3).unwrap();
        assert!(wide.needs_regenerate(&history, &9));

        // A four-entry window no longer contains it.
        let narrow = RepeatingPatternFilter::new(4, 3).unwrap();
        assert!(!narrow.needs_regenerate(&history, &9));
    }

    #[test]
    fn repeating_pattern_length_one_degenerates_to_value_in_window() {
        let filter = RepeatingPatternFilter::new(3, 1).unwrap();
        let history = [4, 8, 2];

        assert!(filter.needs_regenerate(&history, &8));
        assert!(!filter.needs_regenerate(&history, &5));
    }

    #[test]
    fn repeating_pattern_requires_the_full_motif_to_match() {
        let filter = RepeatingPatternFilter::new(6, 3).unwrap();
        // 2, 9 occurs but never preceded by the 1 the motif needs.
        let history = [7, 3, 2, 9, 1, 2];

        assert!(!filter.needs_regenerate(&history, &9));
    }

    #[test]
    fn repeating_pattern_validates_window_against_pattern() {
        assert_eq!(
            RepeatingPatternFilter::new(2, 3).unwrap_err(),
            FilterError::WindowShorterThanPattern { window: 2, pattern: 3 }
        );
        assert!(RepeatingPatternFilter::new(3, 0).is_err());
    }
}
