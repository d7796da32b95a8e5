//! Bounded best-first result set.
//!
//! Keeps at most `capacity` schedules sorted by [`RankKey`]. Equal keys
//! keep arrival order, so an arrival that only ties the current worst entry
//! of a full set is refused.

use super::RankKey;
use crate::models::Schedule;

/// Top-K complete schedules found so far.
#[derive(Debug)]
pub struct ResultSet {
    capacity: usize,
    entries: Vec<(RankKey, Schedule)>,
}

impl ResultSet {
    /// Creates an empty set holding at most `capacity` schedules.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.min(64)),
        }
    }

    /// Maximum number of schedules retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of schedules retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the set holds `capacity` schedules.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Key a newcomer must beat once the set is full.
    pub fn threshold(&self) -> Option<RankKey> {
        if self.is_full() {
            self.entries.last().map(|(k, _)| *k)
        } else {
            None
        }
    }

    /// Whether a schedule with this key would be admitted.
    pub fn admits(&self, key: &RankKey) -> bool {
        self.threshold().map_or(true, |worst| *key < worst)
    }

    /// Offers a schedule; returns whether it was retained.
    ///
    /// Admitting into a full set evicts the current worst entry.
    pub fn offer(&mut self, key: RankKey, schedule: Schedule) -> bool {
        if self.capacity == 0 || !self.admits(&key) {
            return false;
        }
        let pos = self.entries.partition_point(|(k, _)| *k <= key);
        self.entries.insert(pos, (key, schedule));
        self.entries.truncate(self.capacity);
        true
    }

    /// Retained keys, best first.
    pub fn keys(&self) -> Vec<RankKey> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    /// Consumes the set, returning schedules best first.
    pub fn into_schedules(self) -> Vec<Schedule> {
        self.entries.into_iter().map(|(_, s)| s).collect()
    }
}
