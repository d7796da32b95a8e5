//! Duplicate schedule detection.
//!
//! Two schedules are duplicates when they occupy exactly the same times,
//! whichever course contributes each slot. The first one seen is kept.

use std::collections::HashSet;

use crate::models::{SelectedSlot, Weekday};

/// Canonical time layout: sorted `(day, start, duration)` triples.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Vec<(Weekday, u32, u32)>);

impl Signature {
    /// Computes the signature of a set of slots.
    pub fn of(slots: &[SelectedSlot]) -> Self {
        let mut triples: Vec<(Weekday, u32, u32)> = slots
            .iter()
            .map(|s| (s.day, s.start_minutes(), s.duration))
            .collect();
        triples.sort_unstable();
        Self(triples)
    }

    /// Number of slots in the layout.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the layout is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Remembers every signature seen during one search.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<Signature>,
}

impl Deduplicator {
    /// Creates an empty deduplicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a signature; returns `false` if it was already seen.
    pub fn insert(&mut self, signature: Signature) -> bool {
        self.seen.insert(signature)
    }

    /// Number of distinct signatures seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
