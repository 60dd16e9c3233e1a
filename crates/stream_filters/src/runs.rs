//! Monotone-run and constant-run filters.
//!
//! These filters work on any element type that supports the comparison they
//! need, so the same `AscendantRun` value can police a stream of floats, of
//! integers or of any other ordered symbol.

use crate::error::FilterError;
use crate::filter::SequenceFilter;

/// Rejects a candidate that would complete a strictly ascending run.
///
/// With run length `L`, the candidate is rejected when the last `L - 1`
/// history entries are strictly increasing and the candidate is greater than
/// the most recent of them. The accepted stream therefore never contains `L`
/// consecutive strictly increasing values.
///
/// # Examples
///
/// ```
/// use stream_filters::{AscendantRun, SequenceFilter};
///
/// let filter = AscendantRun::new(3).unwrap();
/// let history = [1.0, 2.0, 3.0];
///
/// // 4.0 would extend 2.0 < 3.0 into a third ascent.
/// assert!(filter.needs_regenerate(&history, &4.0));
/// // 2.0 breaks the run and is acceptable.
/// assert!(!filter.needs_regenerate(&history, &2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AscendantRun {
    length: usize,
}

impl AscendantRun {
    /// Creates a filter forbidding ascending runs of `length` values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length < 2`. A run of one
    /// value is not a run, and the rejection rule would have nothing to
    /// compare the candidate against.
    pub fn new(length: usize) -> Result<Self, FilterError> {
        if length < 2 {
            return Err(FilterError::RunTooShort { length, min: 2 });
        }
        Ok(Self { length })
    }

    /// Forbidden run length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T: PartialOrd> SequenceFilter<T> for AscendantRun {
    fn required_sequence_length(&self) -> usize {
        self.length - 1
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= self.length - 1);
        let n = history.len();
        let tail = &history[n - (self.length - 1)..];
        *candidate > history[n - 1] && tail.windows(2).all(|pair| pair[0] < pair[1])
    }
}

/// Rejects a candidate that would complete a strictly descending run.
///
/// Mirror image of [`AscendantRun`]: with run length `L`, the candidate is
/// rejected when the last `L - 1` history entries are strictly decreasing and
/// the candidate continues the descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescendantRun {
    length: usize,
}

impl DescendantRun {
    /// Creates a filter forbidding descending runs of `length` values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length < 2`.
    pub fn new(length: usize) -> Result<Self, FilterError> {
        if length < 2 {
            return Err(FilterError::RunTooShort { length, min: 2 });
        }
        Ok(Self { length })
    }

    /// Forbidden run length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T: PartialOrd> SequenceFilter<T> for DescendantRun {
    fn required_sequence_length(&self) -> usize {
        self.length - 1
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= self.length - 1);
        let n = history.len();
        let tail = &history[n - (self.length - 1)..];
        *candidate < history[n - 1] && tail.windows(2).all(|pair| pair[0] > pair[1])
    }
}

/// Rejects a candidate that would extend a run of one repeated value.
///
/// With run length `L`, the candidate is rejected when the last `L` history
/// entries all equal the candidate. `SameValueRun::new(1)` therefore forbids
/// immediate repeats.
///
/// # Examples
///
/// ```
/// use stream_filters::{SameValueRun, SequenceFilter};
///
/// let filter = SameValueRun::new(1).unwrap();
/// assert!(filter.needs_regenerate(&['x'], &'x'));
/// assert!(!filter.needs_regenerate(&['x'], &'y'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SameValueRun {
    length: usize,
}

impl SameValueRun {
    /// Creates a filter forbidding `length + 1` consecutive equal values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero.
    pub fn new(length: usize) -> Result<Self, FilterError> {
        if length == 0 {
            return Err(FilterError::RunTooShort { length, min: 1 });
        }
        Ok(Self { length })
    }

    /// Number of trailing equal entries that triggers rejection.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T: PartialEq> SequenceFilter<T> for SameValueRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        tail.iter().all(|entry| entry == candidate)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // AscendantRun
    // ------------------------------------------------------------------------

    #[test]
    fn ascendant_rejects_run_completion() {
        let filter = AscendantRun::new(3).unwrap();
        let history = [1, 2, 3];

        assert!(filter.needs_regenerate(&history, &4));
        assert!(!filter.needs_regenerate(&history, &2));
    }

    #[test]
    fn ascendant_accepts_equal_candidate() {
        // Strict comparison: a plateau breaks the run.
        let filter = AscendantRun::new(3).unwrap();
        let history = [1.0, 2.0, 3.0];

        assert!(!filter.needs_regenerate(&history, &3.0));
    }

    #[test]
    fn ascendant_ignores_entries_before_its_window() {
        // Only the last L - 1 = 2 entries matter; the 9 at the front is
        // outside the window.
        let filter = AscendantRun::new(3).unwrap();
        let history = [9, 1, 2];

        assert!(filter.needs_regenerate(&history, &3));
    }

    #[test]
    fn ascendant_accepts_when_tail_is_not_monotone() {
        let filter = AscendantRun::new(4).unwrap();
        let history = [1, 5, 2, 3];

        // 5 > 2 breaks the three-entry tail, so even a larger candidate
        // cannot complete a run of four.
        assert!(!filter.needs_regenerate(&history, &4));
    }

    #[test]
    fn ascendant_length_two_forbids_any_increase() {
        let filter = AscendantRun::new(2).unwrap();
        let history = [5];

        assert!(filter.needs_regenerate(&history, &6));
        assert!(!filter.needs_regenerate(&history, &5));
        assert!(!filter.needs_regenerate(&history, &4));
    }

    #[test]
    fn ascendant_rejects_degenerate_length() {
        assert_eq!(
            AscendantRun::new(1).unwrap_err(),
            FilterError::RunTooShort { length: 1, min: 2 }
        );
        assert!(AscendantRun::new(0).is_err());
    }

    #[test]
    fn ascendant_required_length_is_one_less_than_the_run() {
        let filter = AscendantRun::new(5).unwrap();
        assert_eq!(SequenceFilter::<i32>::required_sequence_length(&filter), 4);
    }

    // ------------------------------------------------------------------------
    // DescendantRun
    // ------------------------------------------------------------------------

    #[test]
    fn descendant_rejects_run_completion() {
        let filter = DescendantRun::new(3).unwrap();
        let history = [3.0, 2.0, 1.0];

        assert!(filter.needs_regenerate(&history, &0.5));
        assert!(!filter.needs_regenerate(&history, &1.0));
        assert!(!filter.needs_regenerate(&history, &2.5));
    }

    #[test]
    fn descendant_accepts_when_tail_rises() {
        let filter = DescendantRun::new(3).unwrap();
        let history = [1.0, 0.5, 0.7];

        assert!(!filter.needs_regenerate(&history, &0.1));
    }

    #[test]
    fn descendant_rejects_degenerate_length() {
        assert!(DescendantRun::new(1).is_err());
    }

    // ------------------------------------------------------------------------
    // SameValueRun
    // ------------------------------------------------------------------------

    #[test]
    fn same_value_rejects_extension_of_constant_run() {
        let filter = SameValueRun::new(3).unwrap();
        let history = [5, 5, 5];

        assert!(filter.needs_regenerate(&history, &5));
        assert!(!filter.needs_regenerate(&history, &6));
    }

    #[test]
    fn same_value_accepts_when_tail_is_mixed() {
        let filter = SameValueRun::new(3).unwrap();
        let history = [5, 4, 5];

        assert!(!filter.needs_regenerate(&history, &5));
    }

    #[test]
    fn same_value_length_one_forbids_immediate_repeat() {
        let filter = SameValueRun::new(1).unwrap();

        assert!(filter.needs_regenerate(&[true], &true));
        assert!(!filter.needs_regenerate(&[true], &false));
    }

    #[test]
    fn same_value_rejects_zero_length() {
        assert_eq!(
            SameValueRun::new(0).unwrap_err(),
            FilterError::RunTooShort { length: 0, min: 1 }
        );
    }

    #[test]
    fn same_value_only_inspects_its_window() {
        // Last two entries are 7, 7; the mismatched front entry is ignored.
        let filter = SameValueRun::new(2).unwrap();
        let history = [3, 7, 7];

        assert!(filter.needs_regenerate(&history, &7));
    }
}
