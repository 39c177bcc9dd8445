use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};

/// Width of the trailing window, in seconds.
pub const WINDOW_SECS: i64 = 300;

/// Counts actions per timestamp and answers "how many in the last five minutes" queries.
///
/// Timestamps may arrive in any order. Nothing is ever evicted, so memory grows with
/// the number of distinct timestamps seen.
#[derive(Debug, Clone, Default)]
pub struct ActionCounter {
    // timestamp -> hits at that timestamp, never 0
    counts_by_timestamp: BTreeMap<i64, u64>,
}

impl ActionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one action at `timestamp`.
    pub fn record(&mut self, timestamp: i64) {
        *self.counts_by_timestamp.entry(timestamp).or_insert(0) += 1;
    }

    /// Returns the number of actions recorded in `(timestamp - 300, timestamp]`.
    pub fn count_in_window(&self, timestamp: i64) -> u64 {
        // near i64::MIN the window reaches below every representable timestamp
        let start = timestamp.checked_sub(WINDOW_SECS).map_or(Unbounded, Excluded);
        self.counts_by_timestamp
            .range((start, Included(timestamp)))
            .map(|(_, hits)| *hits)
            .sum()
    }

    pub fn distinct_timestamps(&self) -> usize {
        self.counts_by_timestamp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts_by_timestamp.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(recorded: &[i64], q: i64) -> u64 {
        recorded.iter().filter(|&&t| q - WINDOW_SECS < t && t <= q).count() as u64
    }

    #[test]
    fn empty_counter_returns_zero() {
        let counter = ActionCounter::new();
        for q in [i64::MIN, -1_000, 0, 299, 300, 1_000_000, i64::MAX] {
            assert_eq!(counter.count_in_window(q), 0);
        }
        assert!(counter.is_empty());
    }

    #[test]
    fn repeated_hits_at_same_timestamp() {
        let mut counter = ActionCounter::new();
        for _ in 0..7 {
            counter.record(42);
        }
        assert_eq!(counter.count_in_window(42), 7);
        assert_eq!(counter.distinct_timestamps(), 1);
    }

    #[test]
    fn lower_bound_is_exclusive() {
        let mut counter = ActionCounter::new();
        counter.record(100);
        assert_eq!(counter.count_in_window(400), 0);

        let mut counter = ActionCounter::new();
        counter.record(101);
        assert_eq!(counter.count_in_window(400), 1);
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let mut counter = ActionCounter::new();
        counter.record(400);
        assert_eq!(counter.count_in_window(400), 1);
    }

    #[test]
    fn future_actions_do_not_count() {
        let mut counter = ActionCounter::new();
        counter.record(500);
        assert_eq!(counter.count_in_window(400), 0);
        assert_eq!(counter.count_in_window(500), 1);
    }

    #[test]
    fn out_of_order_records_match_brute_force() {
        let recorded = [900, 1, 450, 300, 301, 600, -20, 450, 899, 0, 150, 601, 1200];
        let mut counter = ActionCounter::new();
        for &t in &recorded {
            counter.record(t);
        }

        for q in -400..=1600 {
            assert_eq!(counter.count_in_window(q), brute_force(&recorded, q), "query at {q}");
        }
        assert_eq!(counter.distinct_timestamps(), 12);
    }

    #[test]
    fn querying_is_idempotent() {
        let mut counter = ActionCounter::new();
        counter.record(10);
        counter.record(200);
        counter.record(305);

        let first = counter.count_in_window(305);
        assert_eq!(first, 3);
        assert_eq!(counter.count_in_window(305), first);
        assert_eq!(counter.count_in_window(305), first);
    }

    #[test]
    fn extreme_timestamps() {
        let mut counter = ActionCounter::new();
        counter.record(i64::MIN);
        counter.record(i64::MAX);

        assert_eq!(counter.count_in_window(i64::MIN), 1);
        assert_eq!(counter.count_in_window(i64::MIN + WINDOW_SECS - 1), 1);
        assert_eq!(counter.count_in_window(i64::MIN + WINDOW_SECS), 0);
        assert_eq!(counter.count_in_window(i64::MAX), 1);
    }
}
