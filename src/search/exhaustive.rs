//! Exhaustive reference strategy.
//!
//! Enumerates every combination of options in catalog order, discards
//! combinations with clashes, measures penalties from scratch, and keeps
//! the best `amount` after a stable sort. Of the combinations sharing a
//! time layout, the best-ranked one is kept (the earliest enumerated among
//! equals), matching what the best-first engine reports for that layout.
//!
//! Cost is the product of option counts, so this is only practical for
//! small catalogs. It shares no incremental state with the branch-and-bound
//! engine, which makes it a useful cross-check.

use log::trace;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::choice::CourseChoices;
use super::engine::SearchStats;
use super::{Penalties, RankKey, RankingOrder, Signature};
use crate::models::{Schedule, SelectedSlot};

pub(crate) fn run(
    courses: &[CourseChoices],
    order: &RankingOrder,
    capacity: usize,
    preferred_campus: &str,
    stats: &mut SearchStats,
) -> Vec<Schedule> {
    if courses.iter().any(|c| c.choices.is_empty()) {
        return Vec::new();
    }

    let mut ranked: Vec<(RankKey, Schedule)> = Vec::new();
    let mut layouts: HashMap<Signature, usize> = HashMap::new();
    let mut picks = vec![0usize; courses.len()];

    loop {
        stats.expanded += 1;
        let slots: Vec<SelectedSlot> = picks
            .iter()
            .zip(courses)
            .flat_map(|(&pick, course)| course.choices[pick].slots.iter().cloned())
            .collect();

        let mut schedule = Schedule::new(slots, Penalties::default());
        if !schedule.is_conflict_free() {
            stats.conflicts += 1;
            trace!("combination {:?} clashes", picks);
        } else {
            schedule.penalties = Penalties::measure(&schedule.slots, preferred_campus);
            let key = order.key(&schedule.penalties);
            match layouts.entry(schedule.signature()) {
                Entry::Occupied(seen) => {
                    stats.duplicates += 1;
                    let kept = &mut ranked[*seen.get()];
                    if key < kept.0 {
                        *kept = (key, schedule);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(ranked.len());
                    stats.completed += 1;
                    ranked.push((key, schedule));
                }
            }
        }

        if !advance(&mut picks, courses) {
            break;
        }
    }

    ranked.sort_by_key(|(key, _)| *key);
    ranked.truncate(capacity);
    ranked.into_iter().map(|(_, s)| s).collect()
}

/// Odometer increment over option indices; `false` once wrapped around.
fn advance(picks: &mut [usize], courses: &[CourseChoices]) -> bool {
    for (pick, course) in picks.iter_mut().zip(courses).rev() {
        *pick += 1;
        if *pick < course.choices.len() {
            return true;
        }
        *pick = 0;
    }
    false
}
