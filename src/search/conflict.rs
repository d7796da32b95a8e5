//! Per-day interval index for conflict detection.
//!
//! Each weekday holds its occupied intervals sorted by start time. The
//! lists sit behind `Rc`, so cloning an index for a child branch copies
//! five pointers, and the first write to a shared day copies only that day.
//! A branch therefore never observes insertions made by its siblings.
//!
//! # Overlap rule
//! Intervals are half-open `[start, end)`. A new interval is rejected if
//! the preceding interval ends after its start, or the following interval
//! starts before its end. Touching intervals are accepted.

use std::rc::Rc;

use crate::models::Weekday;

/// A half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    /// Start (inclusive).
    pub start: u32,
    /// End (exclusive).
    pub end: u32,
}

impl Interval {
    /// Creates an interval.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start < end, "empty interval {start}..{end}");
        Self { start, end }
    }

    /// Length in minutes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the interval is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Effect of a successful insertion on the day's idle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Gap (minutes) that existed between the neighbours and was split.
    pub removed_gap: u32,
    /// Gap (minutes) created on either side of the new interval.
    pub added_gap: u32,
    /// Whether the day had no intervals before.
    pub opened_day: bool,
}

/// Occupied intervals per weekday.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    days: [Rc<Vec<Interval>>; 5],
}

impl ConflictIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intervals committed on a day, sorted by start.
    pub fn intervals(&self, day: Weekday) -> &[Interval] {
        &self.days[day.index()]
    }

    /// Whether `[start, end)` fits on `day` without overlap.
    pub fn fits(&self, day: Weekday, start: u32, end: u32) -> bool {
        let list = &self.days[day.index()];
        let pos = list.partition_point(|iv| iv.start <= start);
        Self::fits_at(list, pos, start, end)
    }

    /// Inserts `[start, end)` on `day` if it fits.
    ///
    /// Returns `None` (leaving the index untouched) on overlap.
    pub fn try_insert(&mut self, day: Weekday, start: u32, end: u32) -> Option<Placement> {
        let list = &self.days[day.index()];
        let pos = list.partition_point(|iv| iv.start <= start);
        if !Self::fits_at(list, pos, start, end) {
            return None;
        }

        let prev = pos.checked_sub(1).map(|i| list[i]);
        let next = list.get(pos).copied();
        let placement = Placement {
            removed_gap: match (prev, next) {
                (Some(p), Some(n)) => n.start - p.end,
                _ => 0,
            },
            added_gap: prev.map_or(0, |p| start - p.end) + next.map_or(0, |n| n.start - end),
            opened_day: list.is_empty(),
        };

        Rc::make_mut(&mut self.days[day.index()]).insert(pos, Interval::new(start, end));
        Some(placement)
    }

    fn fits_at(list: &[Interval], pos: usize, start: u32, end: u32) -> bool {
        if pos > 0 && list[pos - 1].end > start {
            return false;
        }
        match list.get(pos) {
            Some(next) => next.start >= end,
            None => true,
        }
    }

    /// Number of weekdays with at least one interval.
    pub fn days_used(&self) -> usize {
        self.days.iter().filter(|d| !d.is_empty()).count()
    }

    /// Total idle minutes between consecutive intervals, over all days.
    pub fn total_gap(&self) -> u32 {
        self.days
            .iter()
            .map(|d| d.windows(2).map(|w| w[1].start - w[0].end).sum::<u32>())
            .sum()
    }

    /// Total number of committed intervals.
    pub fn len(&self) -> usize {
        self.days.iter().map(|d| d.len()).sum()
    }

    /// Whether nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.is_empty())
    }
}
