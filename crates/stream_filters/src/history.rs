//! Bounded history of recently accepted values.
//!
//! [`History`] is the sliding window the filters inspect. It keeps at most
//! `capacity` entries in acceptance order, the most recent at the highest
//! index, and evicts the oldest entry when full. The driver sizes it to the
//! longest lookback any of its filters requires, so the slice handed to
//! [`crate::SequenceFilter::needs_regenerate`] always contains exactly the
//! entries a filter may inspect.

/// Fixed-capacity record of the most recently accepted values.
///
/// # Examples
///
/// ```
/// use stream_filters::History;
///
/// let mut history = History::with_capacity(3);
/// for value in [1, 2, 3, 4] {
///     history.push(value);
/// }
/// // The oldest entry was evicted to make room for 4.
/// assert_eq!(history.as_slice(), &[2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// Creates an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is allowed and makes [`push`](Self::push) a no-op,
    /// which is what a driver with no history-inspecting filters uses.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of entries retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored entries, oldest first.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Appends `value`, evicting the oldest entry if the buffer is full.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(value);
    }

    /// Changes the capacity, keeping the most recent entries on shrink.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity < self.entries.len() {
            let excess = self.entries.len() - capacity;
            self.entries.drain(..excess);
        }
        self.capacity = capacity;
    }

    /// Removes all entries without changing the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_below_capacity_appends() {
        let mut history = History::with_capacity(4);
        history.push(10);
        history.push(20);

        assert_eq!(history.len(), 2);
        assert_eq!(history.as_slice(), &[10, 20]);
    }

    #[test]
    fn push_at_capacity_evicts_the_oldest() {
        let mut history = History::with_capacity(3);
        for value in 1..=5 {
            history.push(value);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn most_recent_entry_sits_at_the_highest_index() {
        let mut history = History::with_capacity(2);
        history.push("a");
        history.push("b");

        assert_eq!(history.as_slice()[history.len() - 1], "b");
    }

    #[test]
    fn zero_capacity_discards_everything() {
        let mut history = History::with_capacity(0);
        history.push(1.0);
        history.push(2.0);

        assert!(history.is_empty());
        assert_eq!(history.as_slice(), &[] as &[f64]);
    }

    #[test]
    fn shrinking_capacity_keeps_the_most_recent_entries() {
        let mut history = History::with_capacity(4);
        for value in 1..=4 {
            history.push(value);
        }

        history.set_capacity(2);

        assert_eq!(history.capacity(), 2);
        assert_eq!(history.as_slice(), &[3, 4]);
    }

    #[test]
    fn growing_capacity_retains_entries_and_allows_more() {
        let mut history = History::with_capacity(2);
        history.push(1);
        history.push(2);

        history.set_capacity(3);
        history.push(3);

        assert_eq!(history.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut history = History::with_capacity(3);
        history.push(7);
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.capacity(), 3);

        history.push(9);
        assert_eq!(history.as_slice(), &[9]);
    }
}
