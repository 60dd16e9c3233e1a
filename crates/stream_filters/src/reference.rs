//! Filters that compare values against fixed numeric references.
//!
//! Unlike the filters in [`crate::runs`] and [`crate::patterns`], these carry
//! `f64` parameters (thresholds, interval bounds, tolerances) and therefore
//! apply to `f64` streams only. All of them look at the last `L` history
//! entries plus the candidate and reject when every one of those `L + 1`
//! values satisfies the filter's predicate.

use crate::error::FilterError;
use crate::filter::SequenceFilter;

fn check_run_length(length: usize) -> Result<(), FilterError> {
    if length == 0 {
        return Err(FilterError::RunTooShort { length, min: 1 });
    }
    Ok(())
}

fn check_reference(value: f64) -> Result<(), FilterError> {
    if !value.is_finite() {
        return Err(FilterError::NonFiniteReference { value });
    }
    Ok(())
}

fn check_tolerance(value: f64) -> Result<(), FilterError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FilterError::InvalidTolerance { value });
    }
    Ok(())
}

fn check_bounds(min: f64, max: f64) -> Result<(), FilterError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(FilterError::InvalidBounds { min, max });
    }
    Ok(())
}

/// Rejects a candidate that would extend a run of values above a threshold.
///
/// With run length `L`, the candidate is rejected when it and the last `L`
/// history entries are all strictly greater than the reference.
///
/// # Examples
///
/// ```
/// use stream_filters::{GreaterRun, SequenceFilter};
///
/// let filter = GreaterRun::new(2, 0.5).unwrap();
///
/// assert!(filter.needs_regenerate(&[0.6, 0.9], &0.7));
/// assert!(!filter.needs_regenerate(&[0.6, 0.2], &0.7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreaterRun {
    length: usize,
    reference: f64,
}

impl GreaterRun {
    /// Creates a filter forbidding `length + 1` consecutive values above
    /// `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero and
    /// [`FilterError::NonFiniteReference`] when `reference` is NaN or
    /// infinite.
    pub fn new(length: usize, reference: f64) -> Result<Self, FilterError> {
        check_run_length(length)?;
        check_reference(reference)?;
        Ok(Self { length, reference })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Threshold the run must exceed.
    pub fn reference(&self) -> f64 {
        self.reference
    }
}

impl SequenceFilter<f64> for GreaterRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        *candidate > self.reference && tail.iter().all(|&value| value > self.reference)
    }
}

/// Rejects a candidate that would extend a run of values below a threshold.
///
/// Mirror image of [`GreaterRun`]: all `L + 1` values must be strictly less
/// than the reference for the candidate to be rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LessRun {
    length: usize,
    reference: f64,
}

impl LessRun {
    /// Creates a filter forbidding `length + 1` consecutive values below
    /// `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero and
    /// [`FilterError::NonFiniteReference`] when `reference` is NaN or
    /// infinite.
    pub fn new(length: usize, reference: f64) -> Result<Self, FilterError> {
        check_run_length(length)?;
        check_reference(reference)?;
        Ok(Self { length, reference })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Threshold the run must stay under.
    pub fn reference(&self) -> f64 {
        self.reference
    }
}

impl SequenceFilter<f64> for LessRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        *candidate < self.reference && tail.iter().all(|&value| value < self.reference)
    }
}

/// Rejects a candidate that would keep the stream inside `[min, max]`.
///
/// With run length `L`, the candidate is rejected when it and the last `L`
/// history entries all lie within the closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InRangeRun {
    length: usize,
    min: f64,
    max: f64,
}

impl InRangeRun {
    /// Creates a filter forbidding `length + 1` consecutive values inside
    /// `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero and
    /// [`FilterError::InvalidBounds`] when the bounds are non-finite or
    /// inverted.
    pub fn new(length: usize, min: f64, max: f64) -> Result<Self, FilterError> {
        check_run_length(length)?;
        check_bounds(min, max)?;
        Ok(Self { length, min, max })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Lower bound of the watched interval.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the watched interval.
    pub fn max(&self) -> f64 {
        self.max
    }

    fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl SequenceFilter<f64> for InRangeRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        self.contains(*candidate) && tail.iter().all(|&value| self.contains(value))
    }
}

/// Rejects a candidate that would keep the stream outside `[min, max]`.
///
/// Mirror image of [`InRangeRun`]: all `L + 1` values must lie strictly
/// outside the closed interval for the candidate to be rejected. A value
/// sitting exactly on a bound counts as inside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotInRangeRun {
    length: usize,
    min: f64,
    max: f64,
}

impl NotInRangeRun {
    /// Creates a filter forbidding `length + 1` consecutive values outside
    /// `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero and
    /// [`FilterError::InvalidBounds`] when the bounds are non-finite or
    /// inverted.
    pub fn new(length: usize, min: f64, max: f64) -> Result<Self, FilterError> {
        check_run_length(length)?;
        check_bounds(min, max)?;
        Ok(Self { length, min, max })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Lower bound of the watched interval.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the watched interval.
    pub fn max(&self) -> f64 {
        self.max
    }

    fn excludes(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

impl SequenceFilter<f64> for NotInRangeRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        self.excludes(*candidate) && tail.iter().all(|&value| self.excludes(value))
    }
}

/// Rejects a candidate that would keep the stream clustered around a point.
///
/// With run length `L`, the candidate is rejected when it and the last `L`
/// history entries all lie within `range` of the reference, bounds included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloseToReferenceRun {
    length: usize,
    reference: f64,
    range: f64,
}

impl CloseToReferenceRun {
    /// Creates a filter forbidding `length + 1` consecutive values within
    /// `range` of `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero,
    /// [`FilterError::NonFiniteReference`] when `reference` is NaN or
    /// infinite, and [`FilterError::InvalidTolerance`] when `range` is
    /// negative or non-finite.
    pub fn new(length: usize, reference: f64, range: f64) -> Result<Self, FilterError> {
        check_run_length(length)?;
        check_reference(reference)?;
        check_tolerance(range)?;
        Ok(Self {
            length,
            reference,
            range,
        })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Centre of the watched neighbourhood.
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Maximum distance from the reference that counts as close.
    pub fn range(&self) -> f64 {
        self.range
    }

    fn is_close(&self, value: f64) -> bool {
        (value - self.reference).abs() <= self.range
    }
}

impl SequenceFilter<f64> for CloseToReferenceRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        self.is_close(*candidate) && tail.iter().all(|&value| self.is_close(value))
    }
}

/// Rejects a candidate that would keep the stream pinned to either extreme.
///
/// The filter watches two pivots, the expected minimum and the expected
/// maximum of the source. With run length `L`, the candidate is rejected
/// when it and the last `L` history entries all lie within `range` of the
/// *same* pivot. Values hugging the minimum and values hugging the maximum
/// never combine into one run.
///
/// # Examples
///
/// ```
/// use stream_filters::{ExtremeRun, SequenceFilter};
///
/// let filter = ExtremeRun::new(2, 0.0, 10.0, 1.0).unwrap();
///
/// // Two entries and the candidate all hug the minimum.
/// assert!(filter.needs_regenerate(&[0.5, 0.2], &0.8));
/// // Mixed extremes do not form a run.
/// assert!(!filter.needs_regenerate(&[0.5, 9.8], &0.3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtremeRun {
    length: usize,
    expected_min: f64,
    expected_max: f64,
    range: f64,
}

impl ExtremeRun {
    /// Creates a filter forbidding `length + 1` consecutive values within
    /// `range` of one extreme.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero,
    /// [`FilterError::InvalidBounds`] when the extremes are non-finite or
    /// `expected_min > expected_max`, and [`FilterError::InvalidTolerance`]
    /// when `range` is negative or non-finite.
    pub fn new(
        length: usize,
        expected_min: f64,
        expected_max: f64,
        range: f64,
    ) -> Result<Self, FilterError> {
        check_run_length(length)?;
        check_bounds(expected_min, expected_max)?;
        check_tolerance(range)?;
        Ok(Self {
            length,
            expected_min,
            expected_max,
            range,
        })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Pivot at the low end of the source's output range.
    pub fn expected_min(&self) -> f64 {
        self.expected_min
    }

    /// Pivot at the high end of the source's output range.
    pub fn expected_max(&self) -> f64 {
        self.expected_max
    }

    /// Maximum distance from a pivot that counts as hugging it.
    pub fn range(&self) -> f64 {
        self.range
    }

    fn run_near(&self, pivot: f64, tail: &[f64], candidate: f64) -> bool {
        let near = |value: f64| (value - pivot).abs() <= self.range;
        near(candidate) && tail.iter().all(|&value| near(value))
    }
}

impl SequenceFilter<f64> for ExtremeRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let tail = &history[history.len() - self.length..];
        self.run_near(self.expected_min, tail, *candidate)
            || self.run_near(self.expected_max, tail, *candidate)
    }
}

/// Rejects a candidate that would keep consecutive steps too small.
///
/// With run length `L`, the candidate is rejected when every gap between
/// consecutive values among the last `L` history entries is strictly smaller
/// than `difference`, and the gap from the most recent entry to the candidate
/// is as well. Unlike [`CloseToReferenceRun`] this bounds movement, not
/// position: a slow drift far from any fixed point is still caught.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LittleDifferenceRun {
    length: usize,
    difference: f64,
}

impl LittleDifferenceRun {
    /// Creates a filter forbidding `length` consecutive steps smaller than
    /// `difference`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::RunTooShort`] when `length` is zero and
    /// [`FilterError::NonPositiveDifference`] when `difference` is zero,
    /// negative or non-finite.
    pub fn new(length: usize, difference: f64) -> Result<Self, FilterError> {
        check_run_length(length)?;
        if !difference.is_finite() || difference <= 0.0 {
            return Err(FilterError::NonPositiveDifference { value: difference });
        }
        Ok(Self { length, difference })
    }

    /// Number of trailing entries inspected.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Step size below which movement counts as too small.
    pub fn difference(&self) -> f64 {
        self.difference
    }
}

impl SequenceFilter<f64> for LittleDifferenceRun {
    fn required_sequence_length(&self) -> usize {
        self.length
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        debug_assert!(history.len() >= self.length);
        let n = history.len();
        let tail = &history[n - self.length..];
        (candidate - history[n - 1]).abs() < self.difference
            && tail
                .windows(2)
                .all(|pair| (pair[1] - pair[0]).abs() < self.difference)
    }
}

// ============================================================================
// Tests
// ============================================================================
