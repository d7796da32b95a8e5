//! Schedule (solution) model.
//!
//! A schedule is a set of [`SelectedSlot`]s, one choice group per course,
//! with no two slots overlapping on the same weekday. Slots are kept in
//! (day, start) order.

use serde::{Deserialize, Serialize};

use super::{week_minute, ClockTime, CourseType, Weekday};
use crate::search::{Penalties, Signature};

/// A slot chosen for inclusion in a concrete schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSlot {
    /// Course code.
    pub course_code: String,
    /// Course display title.
    pub title: String,
    /// Course class type.
    #[serde(rename = "type")]
    pub course_type: CourseType,
    /// Color tag for rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Weekday.
    pub day: Weekday,
    /// Start time.
    pub start: ClockTime,
    /// Duration in minutes.
    pub duration: u32,
    /// Room label.
    #[serde(default)]
    pub room: String,
    /// Campus label.
    #[serde(default)]
    pub campus: String,
}

impl SelectedSlot {
    /// Start in minutes since midnight.
    #[inline]
    pub fn start_minutes(&self) -> u32 {
        self.start.minutes()
    }

    /// End in minutes since midnight (exclusive).
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.start.minutes().saturating_add(self.duration)
    }

    /// Start as minute of the week.
    #[inline]
    pub fn week_start(&self) -> u32 {
        week_minute(self.day, self.start)
    }

    /// Whether two slots occupy overlapping time on the same day.
    ///
    /// Touching slots (one ends when the other starts) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_minutes() < other.end_minutes()
            && other.start_minutes() < self.end_minutes()
    }
}

/// A complete, conflict-free weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Selected slots in (day, start) order.
    pub slots: Vec<SelectedSlot>,
    /// Penalties of this schedule.
    pub penalties: Penalties,
}

impl Schedule {
    /// Creates a schedule, sorting slots into (day, start) order.
    pub fn new(mut slots: Vec<SelectedSlot>, penalties: Penalties) -> Self {
        slots.sort_by_key(|s| (s.week_start(), s.duration));
        Self { slots, penalties }
    }

    /// An empty schedule.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Penalties::default())
    }

    /// Number of selected slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether no two slots overlap.
    pub fn is_conflict_free(&self) -> bool {
        // Sorted by week minute, so a clash always involves a neighbour
        // on the same day.
        self.slots.windows(2).all(|w| !w[0].overlaps(&w[1]))
    }

    /// Canonical time-layout signature.
    pub fn signature(&self) -> Signature {
        Signature::of(&self.slots)
    }

    /// Slots belonging to a course code.
    pub fn slots_for_course(&self, code: &str) -> Vec<&SelectedSlot> {
        self.slots.iter().filter(|s| s.course_code == code).collect()
    }

    /// Weekdays with at least one slot, in calendar order.
    pub fn days_used(&self) -> Vec<Weekday> {
        let mut days: Vec<Weekday> = self.slots.iter().map(|s| s.day).collect();
        days.dedup();
        days
    }
}
