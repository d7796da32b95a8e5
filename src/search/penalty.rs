//! Schedule penalty model.
//!
//! Three independent penalties, all "lower is better":
//!
//! | Dimension | Definition |
//! |-----------|-----------|
//! | `breaks` | Idle minutes between consecutive slots on the same day |
//! | `days` | Distinct weekdays with at least one slot |
//! | `campus` | Slots whose campus differs from the preferred campus |
//!
//! The search engine updates penalties incrementally from each
//! [`Placement`]; [`Penalties::measure`] recomputes them from scratch.

use serde::{Deserialize, Serialize};

use super::conflict::Placement;
use super::Ranking;
use crate::models::SelectedSlot;

/// Accumulated penalties of a (partial) schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Penalties {
    /// Idle minutes between slots on the same day.
    pub breaks: u32,
    /// Number of weekdays used.
    pub days: u32,
    /// Number of slots away from the preferred campus.
    pub campus: u32,
}

impl Penalties {
    /// Computes penalties of a set of slots from scratch.
    ///
    /// Slots need not be sorted; overlapping slots are not expected.
    pub fn measure(slots: &[SelectedSlot], preferred_campus: &str) -> Self {
        let mut sorted: Vec<&SelectedSlot> = slots.iter().collect();
        sorted.sort_by_key(|s| s.week_start());

        let mut penalties = Self::default();
        let mut prev: Option<&SelectedSlot> = None;
        for slot in sorted {
            match prev {
                Some(p) if p.day == slot.day => {
                    penalties.breaks += slot.start_minutes().saturating_sub(p.end_minutes());
                }
                _ => penalties.days += 1,
            }
            if slot.campus != preferred_campus {
                penalties.campus += 1;
            }
            prev = Some(slot);
        }
        penalties
    }

    /// Folds one accepted slot into the totals.
    pub fn apply(&mut self, placement: Placement, off_campus: bool) {
        self.breaks = self.breaks - placement.removed_gap + placement.added_gap;
        if placement.opened_day {
            self.days += 1;
        }
        if off_campus {
            self.campus += 1;
        }
    }

    /// Value of one dimension.
    pub fn get(&self, ranking: Ranking) -> u32 {
        match ranking {
            Ranking::Breaks => self.breaks,
            Ranking::Days => self.days,
            Ranking::Campus => self.campus,
        }
    }

    /// Optimistic bound on the final penalties.
    ///
    /// Each minute of a future slot fills at most one minute of an
    /// existing gap, so `breaks` can drop by at most `fill_minutes`.
    /// `days` and `campus` never decrease.
    pub fn lower_bound(&self, fill_minutes: u32) -> Self {
        Self {
            breaks: self.breaks.saturating_sub(fill_minutes),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, Weekday};
    use crate::search::ConflictIndex;

    fn slot(day: Weekday, start: &str, duration: u32, campus: &str) -> SelectedSlot {
        SelectedSlot {
            course_code: "X".into(),
            title: String::new(),
            course_type: CourseType::Lecture,
            color: None,
            day,
            start: start.parse().unwrap(),
            duration,
            room: String::new(),
            campus: campus.into(),
        }
    }

    fn sample() -> Vec<SelectedSlot> {
        vec![
            slot(Weekday::Monday, "13:00", 60, "City"),
            slot(Weekday::Monday, "09:00", 60, "City"),
            slot(Weekday::Monday, "10:00", 120, "Bundoora"),
            slot(Weekday::Thursday, "11:00", 60, "City"),
        ]
    }

    #[test]
    fn test_measure() {
        let p = Penalties::measure(&sample(), "City");
        // Monday: 09-10, 10-12, 13-14 → one 60 minute gap
        assert_eq!(p.breaks, 60);
        assert_eq!(p.days, 2);
        assert_eq!(p.campus, 1);
    }

    #[test]
    fn test_measure_empty() {
        assert_eq!(Penalties::measure(&[], "City"), Penalties::default());
    }

    #[test]
    fn test_incremental_matches_measure() {
        let slots = sample();
        let mut idx = ConflictIndex::new();
        let mut p = Penalties::default();
        for s in &slots {
            let placement = idx
                .try_insert(s.day, s.start_minutes(), s.end_minutes())
                .unwrap();
            p.apply(placement, s.campus != "City");
        }
        assert_eq!(p, Penalties::measure(&slots, "City"));
    }

    #[test]
    fn test_get_by_ranking() {
        let p = Penalties {
            breaks: 30,
            days: 2,
            campus: 1,
        };
        assert_eq!(p.get(Ranking::Breaks), 30);
        assert_eq!(p.get(Ranking::Days), 2);
        assert_eq!(p.get(Ranking::Campus), 1);
    }

    #[test]
    fn test_lower_bound() {
        let p = Penalties {
            breaks: 90,
            days: 3,
            campus: 2,
        };
        assert_eq!(
            p.lower_bound(60),
            Penalties {
                breaks: 30,
                days: 3,
                campus: 2,
            }
        );
        assert_eq!(p.lower_bound(500).breaks, 0);
    }
}
