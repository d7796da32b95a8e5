//! Search options and request envelope.
//!
//! Every field has a default, so `{}` is a valid options object:
//!
//! | Field | Default |
//! |-------|---------|
//! | `amount` | 10 |
//! | `rankings` | `["breaks", "days", "campus"]` |
//! | `campus` | first campus listed in the catalog |
//! | `campusPolicy` | `"alwaysFirst"` |
//! | `strategy` | `"branchAndBound"` |

use serde::{Deserialize, Serialize};

use super::{CampusPolicy, Ranking, RankingOrder};
use crate::models::{campuses, Course};

/// Default number of schedules returned.
pub const DEFAULT_AMOUNT: i64 = 10;

/// Search algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Best-first branch-and-bound with top-K pruning.
    #[default]
    BranchAndBound,
    /// Enumerate every combination, then filter and sort.
    ///
    /// Exponential; intended for small catalogs and as a reference.
    Exhaustive,
}

/// Ranking preferences for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of schedules to return. Zero or less returns none.
    pub amount: i64,
    /// Penalty dimensions, most important first.
    pub rankings: Vec<Ranking>,
    /// Preferred campus label (exact match). Empty = first campus in the catalog.
    pub campus: String,
    /// Placement of the campus penalty in the comparison.
    pub campus_policy: CampusPolicy,
    /// Search algorithm.
    pub strategy: Strategy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            rankings: Ranking::ALL.to_vec(),
            campus: String::new(),
            campus_policy: CampusPolicy::default(),
            strategy: Strategy::default(),
        }
    }
}

impl SearchOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of schedules to return.
    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the ranking dimensions.
    pub fn with_rankings(mut self, rankings: impl Into<Vec<Ranking>>) -> Self {
        self.rankings = rankings.into();
        self
    }

    /// Sets the preferred campus.
    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = campus.into();
        self
    }

    /// Sets the campus policy.
    pub fn with_campus_policy(mut self, policy: CampusPolicy) -> Self {
        self.campus_policy = policy;
        self
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Result capacity; zero when `amount` is not positive.
    pub fn capacity(&self) -> usize {
        usize::try_from(self.amount.max(0)).unwrap_or(usize::MAX)
    }

    /// Comparison order implied by `rankings` and `campus_policy`.
    pub fn ranking_order(&self) -> RankingOrder {
        RankingOrder::new(&self.rankings, self.campus_policy)
    }

    /// Preferred campus, falling back to the catalog's first campus.
    pub fn preferred_campus(&self, courses: &[Course]) -> String {
        if self.campus.is_empty() {
            campuses(courses).into_iter().next().unwrap_or_default()
        } else {
            self.campus.clone()
        }
    }
}

/// A generation request: catalog plus options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Courses to schedule.
    pub courses: Vec<Course>,
    /// Ranking preferences.
    #[serde(default)]
    pub options: SearchOptions,
}

impl GenerateRequest {
    /// Creates a request.
    pub fn new(courses: Vec<Course>, options: SearchOptions) -> Self {
        Self { courses, options }
    }
}
