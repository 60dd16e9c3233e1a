//! The filter trait and the closed enums used for mixed filter sets.
//!
//! Every concrete filter implements [`SequenceFilter`] directly, so a
//! homogeneous driver can hold `Vec<AscendantRun>` with zero overhead. Mixed
//! sets go through [`ScalarFilter`] or [`SymbolFilter`], closed enums that
//! dispatch with a `match` instead of a vtable.

use crate::patterns::{
    FrequentValueFilter, OppositePatternFilter, PairFilter, RepeatingPatternFilter,
    SamePatternFilter,
};
use crate::reference::{
    CloseToReferenceRun, ExtremeRun, GreaterRun, InRangeRun, LessRun, LittleDifferenceRun,
    NotInRangeRun,
};
use crate::runs::{AscendantRun, DescendantRun, SameValueRun};

/// A stateless predicate over a history window and a candidate value.
///
/// Implementations expose how much history they need through
/// [`required_sequence_length`](Self::required_sequence_length) and decide
/// through [`needs_regenerate`](Self::needs_regenerate) whether accepting the
/// candidate would complete a forbidden arrangement. The driver guarantees
/// the precondition `history.len() >= required_sequence_length()` and skips
/// the filter entirely while the history is still shorter; implementations
/// assert it in debug builds and index freely on that basis.
pub trait SequenceFilter<T> {
    /// Minimum number of history entries the filter needs before it can
    /// judge a candidate.
    fn required_sequence_length(&self) -> usize;

    /// Returns `true` when the candidate must be discarded and redrawn.
    ///
    /// `history` holds previously accepted values in order, the most recent
    /// at the highest index. The filter never mutates anything; the same
    /// inputs always produce the same verdict.
    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool;
}

impl<S: SequenceFilter<T> + ?Sized, T> SequenceFilter<T> for &S {
    fn required_sequence_length(&self) -> usize {
        (**self).required_sequence_length()
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        (**self).needs_regenerate(history, candidate)
    }
}

/// Any filter applicable to an `f64` stream.
///
/// This is the full catalogue: the generic run and pattern filters at
/// `T = f64` plus the reference-based family that exists only for floats.
/// Each variant converts in with `From`, so a mixed set reads naturally:
///
/// ```
/// use stream_filters::{AscendantRun, GreaterRun, ScalarFilter, SequenceFilter};
///
/// let filters: Vec<ScalarFilter> = vec![
///     AscendantRun::new(3).unwrap().into(),
///     GreaterRun::new(4, 0.9).unwrap().into(),
/// ];
///
/// assert_eq!(filters[0].required_sequence_length(), 2);
/// assert_eq!(filters[1].required_sequence_length(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarFilter {
    /// Strictly ascending run watcher.
    Ascendant(AscendantRun),
    /// Strictly descending run watcher.
    Descendant(DescendantRun),
    /// Repeated-value run watcher.
    SameValue(SameValueRun),
    /// Above-threshold run watcher.
    Greater(GreaterRun),
    /// Below-threshold run watcher.
    Less(LessRun),
    /// Interval-bound run watcher.
    InRange(InRangeRun),
    /// Interval-avoiding run watcher.
    NotInRange(NotInRangeRun),
    /// Fixed-point clustering watcher.
    CloseToReference(CloseToReferenceRun),
    /// Extreme-hugging run watcher.
    Extreme(ExtremeRun),
    /// Small-step movement watcher.
    LittleDifference(LittleDifferenceRun),
    /// Fixed-distance echo watcher.
    Pair(PairFilter),
    /// Windowed occurrence counter.
    FrequentValue(FrequentValueFilter),
    /// Adjacent-block repetition watcher.
    SamePattern(SamePatternFilter),
    /// Adjacent-block alternation watcher.
    OppositePattern(OppositePatternFilter),
    /// Windowed motif-repeat watcher.
    RepeatingPattern(RepeatingPatternFilter),
}

impl SequenceFilter<f64> for ScalarFilter {
    fn required_sequence_length(&self) -> usize {
        // The generic filters need the turbofish; the f64-only ones have a
        // single impl and resolve directly.
        match self {
            Self::Ascendant(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::Descendant(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::SameValue(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::Greater(f) => f.required_sequence_length(),
            Self::Less(f) => f.required_sequence_length(),
            Self::InRange(f) => f.required_sequence_length(),
            Self::NotInRange(f) => f.required_sequence_length(),
            Self::CloseToReference(f) => f.required_sequence_length(),
            Self::Extreme(f) => f.required_sequence_length(),
            Self::LittleDifference(f) => f.required_sequence_length(),
            Self::Pair(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::FrequentValue(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::SamePattern(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::OppositePattern(f) => SequenceFilter::<f64>::required_sequence_length(f),
            Self::RepeatingPattern(f) => SequenceFilter::<f64>::required_sequence_length(f),
        }
    }

    fn needs_regenerate(&self, history: &[f64], candidate: &f64) -> bool {
        match self {
            Self::Ascendant(f) => f.needs_regenerate(history, candidate),
            Self::Descendant(f) => f.needs_regenerate(history, candidate),
            Self::SameValue(f) => f.needs_regenerate(history, candidate),
            Self::Greater(f) => f.needs_regenerate(history, candidate),
            Self::Less(f) => f.needs_regenerate(history, candidate),
            Self::InRange(f) => f.needs_regenerate(history, candidate),
            Self::NotInRange(f) => f.needs_regenerate(history, candidate),
            Self::CloseToReference(f) => f.needs_regenerate(history, candidate),
            Self::Extreme(f) => f.needs_regenerate(history, candidate),
            Self::LittleDifference(f) => f.needs_regenerate(history, candidate),
            Self::Pair(f) => f.needs_regenerate(history, candidate),
            Self::FrequentValue(f) => f.needs_regenerate(history, candidate),
            Self::SamePattern(f) => f.needs_regenerate(history, candidate),
            Self::OppositePattern(f) => f.needs_regenerate(history, candidate),
            Self::RepeatingPattern(f) => f.needs_regenerate(history, candidate),
        }
    }
}

impl From<AscendantRun> for ScalarFilter {
    fn from(filter: AscendantRun) -> Self {
        Self::Ascendant(filter)
    }
}

impl From<DescendantRun> for ScalarFilter {
    fn from(filter: DescendantRun) -> Self {
        Self::Descendant(filter)
    }
}

impl From<SameValueRun> for ScalarFilter {
    fn from(filter: SameValueRun) -> Self {
        Self::SameValue(filter)
    }
}

impl From<GreaterRun> for ScalarFilter {
    fn from(filter: GreaterRun) -> Self {
        Self::Greater(filter)
    }
}

impl From<LessRun> for ScalarFilter {
    fn from(filter: LessRun) -> Self {
        Self::Less(filter)
    }
}

impl From<InRangeRun> for ScalarFilter {
    fn from(filter: InRangeRun) -> Self {
        Self::InRange(filter)
    }
}

impl From<NotInRangeRun> for ScalarFilter {
    fn from(filter: NotInRangeRun) -> Self {
        Self::NotInRange(filter)
    }
}

impl From<CloseToReferenceRun> for ScalarFilter {
    fn from(filter: CloseToReferenceRun) -> Self {
        Self::CloseToReference(filter)
    }
}

impl From<ExtremeRun> for ScalarFilter {
    fn from(filter: ExtremeRun) -> Self {
        Self::Extreme(filter)
    }
}

impl From<LittleDifferenceRun> for ScalarFilter {
    fn from(filter: LittleDifferenceRun) -> Self {
        Self::LittleDifference(filter)
    }
}

impl From<PairFilter> for ScalarFilter {
    fn from(filter: PairFilter) -> Self {
        Self::Pair(filter)
    }
}

impl From<FrequentValueFilter> for ScalarFilter {
    fn from(filter: FrequentValueFilter) -> Self {
        Self::FrequentValue(filter)
    }
}

impl From<SamePatternFilter> for ScalarFilter {
    fn from(filter: SamePatternFilter) -> Self {
        Self::SamePattern(filter)
    }
}

impl From<OppositePatternFilter> for ScalarFilter {
    fn from(filter: OppositePatternFilter) -> Self {
        Self::OppositePattern(filter)
    }
}

impl From<RepeatingPatternFilter> for ScalarFilter {
    fn from(filter: RepeatingPatternFilter) -> Self {
        Self::RepeatingPattern(filter)
    }
}

/// Any filter applicable to a stream of ordered symbols.
///
/// The reference-based family carries `f64` parameters and is absent here;
/// what remains works for every `T: PartialOrd`, so one `SymbolFilter` set
/// can police integers, characters or booleans.
///
/// ```
/// use stream_filters::{PairFilter, SameValueRun, SequenceFilter, SymbolFilter};
///
/// let filters: Vec<SymbolFilter> = vec![
///     SameValueRun::new(2).unwrap().into(),
///     PairFilter::new(1).into(),
/// ];
///
/// let history = ['a', 'b', 'b'];
/// assert!(filters[1].needs_regenerate(&history, &'b'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolFilter {
    /// Strictly ascending run watcher.
    Ascendant(AscendantRun),
    /// Strictly descending run watcher.
    Descendant(DescendantRun),
    /// Repeated-value run watcher.
    SameValue(SameValueRun),
    /// Fixed-distance echo watcher.
    Pair(PairFilter),
    /// Windowed occurrence counter.
    FrequentValue(FrequentValueFilter),
    /// Adjacent-block repetition watcher.
    SamePattern(SamePatternFilter),
    /// Adjacent-block alternation watcher.
    OppositePattern(OppositePatternFilter),
    /// Windowed motif-repeat watcher.
    RepeatingPattern(RepeatingPatternFilter),
}

impl<T: PartialOrd> SequenceFilter<T> for SymbolFilter {
    fn required_sequence_length(&self) -> usize {
        match self {
            Self::Ascendant(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::Descendant(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::SameValue(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::Pair(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::FrequentValue(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::SamePattern(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::OppositePattern(f) => SequenceFilter::<T>::required_sequence_length(f),
            Self::RepeatingPattern(f) => SequenceFilter::<T>::required_sequence_length(f),
        }
    }

    fn needs_regenerate(&self, history: &[T], candidate: &T) -> bool {
        match self {
            Self::Ascendant(f) => f.needs_regenerate(history, candidate),
            Self::Descendant(f) => f.needs_regenerate(history, candidate),
            Self::SameValue(f) => f.needs_regenerate(history, candidate),
            Self::Pair(f) => f.needs_regenerate(history, candidate),
            Self::FrequentValue(f) => f.needs_regenerate(history, candidate),
            Self::SamePattern(f) => f.needs_regenerate(history, candidate),
            Self::OppositePattern(f) => f.needs_regenerate(history, candidate),
            Self::RepeatingPattern(f) => f.needs_regenerate(history, candidate),
        }
    }
}

impl From<AscendantRun> for SymbolFilter {
    fn from(filter: AscendantRun) -> Self {
        Self::Ascendant(filter)
    }
}

impl From<DescendantRun> for SymbolFilter {
    fn from(filter: DescendantRun) -> Self {
        Self::Descendant(filter)
    }
}

impl From<SameValueRun> for SymbolFilter {
    fn from(filter: SameValueRun) -> Self {
        Self::SameValue(filter)
    }
}

impl From<PairFilter> for SymbolFilter {
    fn from(filter: PairFilter) -> Self {
        Self::Pair(filter)
    }
}

impl From<FrequentValueFilter> for SymbolFilter {
    fn from(filter: FrequentValueFilter) -> Self {
        Self::FrequentValue(filter)
    }
}

impl From<SamePatternFilter> for SymbolFilter {
    fn from(filter: SamePatternFilter) -> Self {
        Self::SamePattern(filter)
    }
}

impl From<OppositePatternFilter> for SymbolFilter {
    fn from(filter: OppositePatternFilter) -> Self {
        Self::OppositePattern(filter)
    }
}

impl From<RepeatingPatternFilter> for SymbolFilter {
    fn from(filter: RepeatingPatternFilter) -> Self {
        Self::RepeatingPattern(filter)
    }
}

// ============================================================================
// Tests
// ============================================================================
