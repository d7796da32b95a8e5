//! Best-first branch-and-bound schedule search.
//!
//! # Algorithm
//!
//! 1. Validate the catalog and expand every option into its linked slots.
//! 2. Visit courses in ascending number of options; within a course, try
//!    options with fewer off-campus slots first.
//! 3. Keep partial schedules in a frontier ordered by the ranking key of an
//!    optimistic bound on their final penalties (deeper branches first on
//!    ties, then discovery order).
//! 4. Expanding a branch places each option of the next course into a copy
//!    of the branch's [`ConflictIndex`]; options that clash are dropped.
//! 5. Complete branches are deduplicated by [`Signature`] and offered to a
//!    bounded [`ResultSet`].
//! 6. Once the result set is full, branches whose bound does not beat its
//!    worst entry are discarded. The frontier pops bounds in ascending order,
//!    so the first discarded pop ends the search.
//!
//! # Bound
//! `days` and `campus` never decrease as slots are added. `breaks` can
//! shrink when a slot lands inside a gap, by at most its own length, so the
//! bound subtracts the most minutes the undecided courses could place.
//!
//! # Complexity
//! Exponential in the number of courses in the worst case; the bound and
//! the course ordering keep typical catalogs small.

use log::{debug, info, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use super::choice::{prepare, CourseChoices};
use super::exhaustive;
use super::{
    ConflictIndex, Deduplicator, MeetingExpander, Penalties, RankKey, RankingOrder, ResultSet,
    SearchOptions, SlotExpander, Strategy,
};
use crate::error::Result;
use crate::models::{combination_count, Course, Schedule, SelectedSlot};

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Raw option combinations in the catalog (saturating).
    pub possibilities: u64,
    /// Branches expanded (or combinations enumerated).
    pub expanded: u64,
    /// Choices rejected for a time clash.
    pub conflicts: u64,
    /// Branches discarded by the bound.
    pub pruned: u64,
    /// Complete schedules dropped as duplicates.
    pub duplicates: u64,
    /// Complete, novel schedules offered to the result set.
    pub completed: u64,
    /// Wall-clock duration.
    pub elapsed: Duration,
}

/// Outcome of a search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Schedules, best first.
    pub schedules: Vec<Schedule>,
    /// Search statistics.
    pub stats: SearchStats,
}

/// Timetable search engine.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, CourseType, SlotOption, Weekday};
/// use u_timetable::search::{SearchEngine, SearchOptions};
///
/// let courses = vec![
///     Course::new("COSC1", CourseType::Lecture)
///         .with_option(SlotOption::new(Weekday::Monday, "09:00".parse().unwrap(), 60))
///         .with_option(SlotOption::new(Weekday::Tuesday, "09:00".parse().unwrap(), 60)),
///     Course::new("COSC1", CourseType::Tutorial)
///         .with_option(SlotOption::new(Weekday::Monday, "10:00".parse().unwrap(), 60)),
/// ];
///
/// let report = SearchEngine::new()
///     .search(&courses, &SearchOptions::new().with_amount(5))
///     .unwrap();
/// assert_eq!(report.schedules.len(), 2);
/// // Lecture and tutorial back to back on Monday ranks first
/// assert_eq!(report.schedules[0].penalties.days, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<E: SlotExpander = MeetingExpander> {
    expander: E,
}

impl SearchEngine<MeetingExpander> {
    /// Creates an engine with the default [`MeetingExpander`].
    pub fn new() -> Self {
        Self {
            expander: MeetingExpander,
        }
    }
}

impl<E: SlotExpander> SearchEngine<E> {
    /// Creates an engine with a custom slot expander.
    pub fn with_expander(expander: E) -> Self {
        Self { expander }
    }

    /// The slot expander in use.
    pub fn expander(&self) -> &E {
        &self.expander
    }

    /// Searches for the best schedules.
    ///
    /// # Errors
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) if the catalog is
    /// malformed. Infeasible catalogs and non-positive `amount` yield an
    /// empty, successful report.
    pub fn search(&self, courses: &[Course], options: &SearchOptions) -> Result<SearchReport> {
        let started = Instant::now();
        let mut stats = SearchStats {
            possibilities: combination_count(courses),
            ..Default::default()
        };

        let capacity = options.capacity();
        if capacity == 0 {
            debug!("amount {} requests no schedules, skipping search", options.amount);
            return Ok(SearchReport {
                schedules: Vec::new(),
                stats,
            });
        }

        let campus = options.preferred_campus(courses);
        let prepared = prepare(courses, &self.expander, &campus)?;
        let order = options.ranking_order();

        let schedules = match options.strategy {
            Strategy::BranchAndBound => branch_and_bound(prepared, &order, capacity, &mut stats),
            Strategy::Exhaustive => {
                exhaustive::run(&prepared, &order, capacity, &campus, &mut stats)
            }
        };

        stats.elapsed = started.elapsed();
        info!(
            "{:?} search returned {} of {} requested schedules from {} possibilities in {:?}",
            options.strategy,
            schedules.len(),
            capacity,
            stats.possibilities,
            stats.elapsed
        );
        debug!(
            "expanded={} conflicts={} pruned={} duplicates={} completed={}",
            stats.expanded, stats.conflicts, stats.pruned, stats.duplicates, stats.completed
        );

        Ok(SearchReport { schedules, stats })
    }

    /// Searches and returns only the schedules.
    pub fn generate(&self, courses: &[Course], options: &SearchOptions) -> Result<Vec<Schedule>> {
        self.search(courses, options).map(|r| r.schedules)
    }
}

/// A partial schedule on the frontier.
#[derive(Debug)]
struct Branch {
    bound: RankKey,
    depth: usize,
    seq: u64,
    /// Chosen option per decided course, in visiting order.
    picks: Vec<usize>,
    index: ConflictIndex,
    penalties: Penalties,
}

impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Branch {}

impl PartialOrd for Branch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Branch {
    // BinaryHeap pops the greatest: lowest bound, then deepest, then oldest.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .cmp(&self.bound)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

fn branch_and_bound(
    mut courses: Vec<CourseChoices>,
    order: &RankingOrder,
    capacity: usize,
    stats: &mut SearchStats,
) -> Vec<Schedule> {
    courses.sort_by_key(|c| c.choices.len());
    for course in &mut courses {
        course.choices.sort_by_key(|c| c.off_campus);
    }

    // fill[d]: most minutes courses d.. could still place into gaps
    let mut fill = vec![0u32; courses.len() + 1];
    for d in (0..courses.len()).rev() {
        fill[d] = fill[d + 1] + courses[d].max_minutes();
    }

    let mut results = ResultSet::new(capacity);
    let mut dedup = Deduplicator::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    frontier.push(Branch {
        bound: order.key(&Penalties::default()),
        depth: 0,
        seq,
        picks: Vec::with_capacity(courses.len()),
        index: ConflictIndex::new(),
        penalties: Penalties::default(),
    });

    while let Some(branch) = frontier.pop() {
        if !results.admits(&branch.bound) {
            stats.pruned += 1 + frontier.len() as u64;
            trace!("bound {:?} cannot beat retained results, stopping", branch.bound);
            break;
        }

        if branch.depth == courses.len() {
            let slots: Vec<SelectedSlot> = branch
                .picks
                .iter()
                .zip(&courses)
                .flat_map(|(&pick, course)| course.choices[pick].slots.iter().cloned())
                .collect();
            let schedule = Schedule::new(slots, branch.penalties);
            if !dedup.insert(schedule.signature()) {
                stats.duplicates += 1;
                continue;
            }
            stats.completed += 1;
            results.offer(order.key(&branch.penalties), schedule);
            continue;
        }

        stats.expanded += 1;
        let course = &courses[branch.depth];
        let remaining_fill = fill[branch.depth + 1];

        'choices: for (pick, choice) in course.choices.iter().enumerate() {
            let mut index = branch.index.clone();
            let mut penalties = branch.penalties;
            for slot in &choice.slots {
                match index.try_insert(slot.day, slot.start_minutes(), slot.end_minutes()) {
                    Some(placement) => penalties.apply(placement, false),
                    None => {
                        stats.conflicts += 1;
                        trace!(
                            "course #{} option {} clashes on {}",
                            course.catalog_index,
                            pick,
                            slot.day
                        );
                        continue 'choices;
                    }
                }
            }
            penalties.campus += choice.off_campus;

            let bound = order.key(&penalties.lower_bound(remaining_fill));
            if !results.admits(&bound) {
                stats.pruned += 1;
                continue;
            }

            let mut picks = branch.picks.clone();
            picks.push(pick);
            seq += 1;
            frontier.push(Branch {
                bound,
                depth: branch.depth + 1,
                seq,
                picks,
                index,
                penalties,
            });
        }
    }

    results.into_schedules()
}
