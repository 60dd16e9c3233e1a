//! Rejection-sampling driver wrapping a source in a filter set.

use tracing::{debug, trace};

use stream_core::Generate;

use crate::filter::{ScalarFilter, SequenceFilter};
use crate::history::History;

/// A source whose output stream must avoid the arrangements its filters
/// forbid.
///
/// Each call to [`generate`](Generate::generate) draws candidates from the
/// wrapped source until every filter accepts one, records the accepted value
/// in the history and returns it. Filters are consulted in insertion order
/// and a filter whose [`required_sequence_length`](SequenceFilter::required_sequence_length)
/// exceeds the current history length is skipped, so early draws pass through
/// until enough history has accumulated.
///
/// The history is sized to the longest lookback in the filter set and holds
/// accepted values only; rejected candidates leave no trace beyond the
/// attempt counter reported by [`last_attempts`](Self::last_attempts).
///
/// The draw loop is unbounded. A filter set that rejects everything the
/// source can produce spins forever, so the source's range has to leave the
/// filters an escape. The second type parameter defaults to [`ScalarFilter`],
/// the catalogue enum for `f64` streams.
///
/// # Examples
///
/// ```
/// use stream_core::{Generate, Unit, XorShift128};
/// use stream_filters::{AscendantRun, FilteredGenerator};
///
/// let source = Unit::new(XorShift128::with_seed(7));
/// let mut generator: FilteredGenerator<_> = FilteredGenerator::new(source);
/// generator.push_filter(AscendantRun::new(3).unwrap());
///
/// let values: Vec<f64> = (0..200).map(|_| generator.generate()).collect();
///
/// // No three consecutive outputs ever strictly ascend.
/// assert!(values.windows(3).all(|w| !(w[0] < w[1] && w[1] < w[2])));
/// ```
pub struct FilteredGenerator<G: Generate, F = ScalarFilter> {
    source: G,
    filters: Vec<F>,
    history: History<G::Output>,
    last_attempts: usize,
}

impl<G, F> FilteredGenerator<G, F>
where
    G: Generate,
    F: SequenceFilter<G::Output>,
{
    /// Wraps `source` with an empty filter set.
    ///
    /// Until filters are added the driver accepts every draw, keeps no
    /// history and behaves exactly like the bare source.
    pub fn new(source: G) -> Self {
        Self {
            source,
            filters: Vec::new(),
            history: History::with_capacity(0),
            last_attempts: 0,
        }
    }

    /// Wraps `source` with a ready-made filter set.
    ///
    /// The history capacity is the largest lookback any filter requires.
    pub fn with_filters(source: G, filters: Vec<F>) -> Self {
        let capacity = filters
            .iter()
            .map(|filter| filter.required_sequence_length())
            .max()
            .unwrap_or(0);
        debug!(
            filters = filters.len(),
            history_capacity = capacity,
            "filtered generator configured"
        );
        Self {
            source,
            filters,
            history: History::with_capacity(capacity),
            last_attempts: 0,
        }
    }

    /// Appends a filter, growing the history capacity if the new filter
    /// looks further back than any existing one.
    ///
    /// Accepts anything convertible into the driver's filter type, so
    /// concrete filters can be pushed onto an enum-typed driver directly.
    pub fn push_filter(&mut self, filter: impl Into<F>) {
        let filter = filter.into();
        let required = filter.required_sequence_length();
        if required > self.history.capacity() {
            self.history.set_capacity(required);
        }
        self.filters.push(filter);
    }

    /// The filters in consultation order.
    pub fn filters(&self) -> &[F] {
        &self.filters
    }

    /// Accepted values currently retained, oldest first.
    pub fn history(&self) -> &[G::Output] {
        self.history.as_slice()
    }

    /// Forgets all retained history without touching the filter set.
    ///
    /// The next draws pass filters whose lookback is no longer covered, as
    /// if the driver had just been built.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Number of draws the most recent [`generate`](Generate::generate) call
    /// consumed, including the accepted one.
    ///
    /// Returns zero before the first call.
    pub fn last_attempts(&self) -> usize {
        self.last_attempts
    }

    /// Shared access to the wrapped source.
    pub fn get_ref(&self) -> &G {
        &self.source
    }

    /// Consumes the driver, returning the wrapped source.
    pub fn into_inner(self) -> G {
        self.source
    }
}

// Not derived: the history field needs a `G::Output: Clone` bound the
// derive does not emit.
impl<G, F> Clone for FilteredGenerator<G, F>
where
    G: Generate + Clone,
    G::Output: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            filters: self.filters.clone(),
            history: self.history.clone(),
            last_attempts: self.last_attempts,
        }
    }
}

impl<G, F> Generate for FilteredGenerator<G, F>
where
    G: Generate,
    G::Output: Clone,
    F: SequenceFilter<G::Output>,
{
    type Output = G::Output;

    fn generate(&mut self) -> G::Output {
        let mut attempts: usize = 1;
        loop {
            let candidate = self.source.generate();
            let history = self.history.as_slice();
            let rejected_by = self.filters.iter().position(|filter| {
                history.len() >= filter.required_sequence_length()
                    && filter.needs_regenerate(history, &candidate)
            });
            match rejected_by {
                None => {
                    self.last_attempts = attempts;
                    self.history.push(candidate.clone());
                    return candidate;
                }
                Some(index) => {
                    trace!(filter = index, attempt = attempts, "candidate rejected");
                    attempts += 1;
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
