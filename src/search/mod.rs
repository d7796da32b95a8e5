//! Schedule search.
//!
//! Finds the top-K conflict-free schedules for a course catalog under a
//! caller-defined ranking of penalty dimensions.
//!
//! # Components
//!
//! - [`ConflictIndex`]: per-day sorted intervals with probe-and-insert
//! - [`Penalties`]: breaks / days / campus, updated incrementally
//! - [`RankingOrder`]: lexicographic comparison over [`Ranking`] dimensions
//! - [`Deduplicator`]: canonical [`Signature`] of a time layout
//! - [`ResultSet`]: bounded best-first result collection
//! - [`SlotExpander`]: course option → linked slots
//! - [`SearchEngine`]: best-first branch-and-bound (or exhaustive) driver
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{Course, CourseType, SlotOption, Weekday};
//! use u_timetable::search::{Ranking, SearchEngine, SearchOptions};
//!
//! let courses = vec![Course::new("COSC1", CourseType::Lecture)
//!     .with_option(SlotOption::new(Weekday::Monday, "09:00".parse().unwrap(), 60).with_campus("City"))
//!     .with_option(SlotOption::new(Weekday::Monday, "13:00".parse().unwrap(), 60).with_campus("Bundoora"))];
//!
//! let options = SearchOptions::new()
//!     .with_amount(1)
//!     .with_rankings(vec![Ranking::Days])
//!     .with_campus("Bundoora");
//! let best = SearchEngine::new().generate(&courses, &options).unwrap();
//! assert_eq!(best[0].slots[0].campus, "Bundoora");
//! ```

mod choice;
mod conflict;
mod dedup;
mod engine;
mod exhaustive;
mod expand;
mod options;
mod penalty;
mod ranking;
mod results;

pub use conflict::{ConflictIndex, Interval, Placement};
pub use dedup::{Deduplicator, Signature};
pub use engine::{SearchEngine, SearchReport, SearchStats};
pub use expand::{MeetingExpander, SlotExpander};
pub use options::{GenerateRequest, SearchOptions, Strategy, DEFAULT_AMOUNT};
pub use penalty::Penalties;
pub use ranking::{CampusPolicy, RankKey, Ranking, RankingOrder};
pub use results::ResultSet;
