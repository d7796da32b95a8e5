//! Ranking dimensions and schedule comparison.
//!
//! Callers rank schedules by an ordered subset of the penalty dimensions,
//! most important first. Comparison is lexicographic: the first dimension
//! that differs decides.
//!
//! # Campus policy
//! With [`CampusPolicy::AlwaysFirst`] (the default) the campus penalty is
//! compared before every other dimension, whether or not the caller listed
//! it. [`CampusPolicy::AsRanked`] uses the caller's order verbatim.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Penalties;

/// A penalty dimension schedules can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ranking {
    /// Idle minutes between classes.
    Breaks,
    /// Number of days on campus.
    Days,
    /// Slots away from the preferred campus.
    Campus,
}

impl Ranking {
    /// All dimensions in their default order.
    pub const ALL: [Ranking; 3] = [Ranking::Breaks, Ranking::Days, Ranking::Campus];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Ranking::Breaks => "breaks",
            Ranking::Days => "days",
            Ranking::Campus => "campus",
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the campus penalty sits in the comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CampusPolicy {
    /// Campus is always the primary key.
    #[default]
    AlwaysFirst,
    /// Campus participates only where the caller ranked it.
    AsRanked,
}

/// Comparable key of a schedule under a [`RankingOrder`].
///
/// Unused trailing positions are zero, so keys of one order compare
/// lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey([u32; 3]);

impl RankKey {
    /// Raw key values.
    pub fn values(&self) -> [u32; 3] {
        self.0
    }
}

/// Resolved comparison order over penalty dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingOrder {
    dims: Vec<Ranking>,
}

impl RankingOrder {
    /// Builds the comparison order from caller rankings.
    ///
    /// Repeated dimensions keep their first position.
    pub fn new(rankings: &[Ranking], policy: CampusPolicy) -> Self {
        let mut dims = Vec::with_capacity(3);
        if policy == CampusPolicy::AlwaysFirst {
            dims.push(Ranking::Campus);
        }
        for &r in rankings {
            if !dims.contains(&r) {
                dims.push(r);
            }
        }
        Self { dims }
    }

    /// Dimensions in comparison order.
    pub fn dimensions(&self) -> &[Ranking] {
        &self.dims
    }

    /// Key of a penalty vector.
    pub fn key(&self, penalties: &Penalties) -> RankKey {
        let mut key = [0u32; 3];
        for (slot, &dim) in key.iter_mut().zip(&self.dims) {
            *slot = penalties.get(dim);
        }
        RankKey(key)
    }

    /// Compares two penalty vectors; `Less` means `a` ranks better.
    pub fn compare(&self, a: &Penalties, b: &Penalties) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(breaks: u32, days: u32, campus: u32) -> Penalties {
        Penalties {
            breaks,
            days,
            campus,
        }
    }

    #[test]
    fn test_campus_always_first() {
        let order = RankingOrder::new(&[Ranking::Breaks, Ranking::Days], CampusPolicy::AlwaysFirst);
        assert_eq!(
            order.dimensions(),
            &[Ranking::Campus, Ranking::Breaks, Ranking::Days]
        );
        // Fewer campus mismatches win despite more breaks
        assert_eq!(order.compare(&p(500, 5, 0), &p(0, 1, 1)), Ordering::Less);
    }

    #[test]
    fn test_as_ranked() {
        let order = RankingOrder::new(&[Ranking::Days, Ranking::Breaks], CampusPolicy::AsRanked);
        assert_eq!(order.dimensions(), &[Ranking::Days, Ranking::Breaks]);
        assert_eq!(order.compare(&p(100, 2, 5), &p(0, 3, 0)), Ordering::Less);
        assert_eq!(order.compare(&p(10, 2, 5), &p(20, 2, 0)), Ordering::Less);
        // Campus unranked: ignored
        assert_eq!(order.compare(&p(10, 2, 5), &p(10, 2, 0)), Ordering::Equal);
    }

    #[test]
    fn test_duplicate_rankings_collapse() {
        let order = RankingOrder::new(
            &[Ranking::Days, Ranking::Campus, Ranking::Days],
            CampusPolicy::AsRanked,
        );
        assert_eq!(order.dimensions(), &[Ranking::Days, Ranking::Campus]);

        let forced = RankingOrder::new(&[Ranking::Days, Ranking::Campus], CampusPolicy::AlwaysFirst);
        assert_eq!(forced.dimensions(), &[Ranking::Campus, Ranking::Days]);
    }

    #[test]
    fn test_empty_rankings_tie() {
        let order = RankingOrder::new(&[], CampusPolicy::AsRanked);
        assert_eq!(order.compare(&p(1, 2, 3), &p(3, 2, 1)), Ordering::Equal);
    }

    #[test]
    fn test_ranking_serde() {
        let r: Vec<Ranking> = serde_json::from_str(r#"["days","campus","breaks"]"#).unwrap();
        assert_eq!(r, vec![Ranking::Days, Ranking::Campus, Ranking::Breaks]);
        assert!(serde_json::from_str::<Ranking>("\"lunch\"").is_err());

        let policy: CampusPolicy = serde_json::from_str("\"asRanked\"").unwrap();
        assert_eq!(policy, CampusPolicy::AsRanked);
    }
}
