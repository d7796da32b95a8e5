//! Weekly timetable generation.
//!
//! Given a catalog of courses, each offering several mutually exclusive
//! weekly slot options, finds the best conflict-free timetables under a
//! caller-ranked set of penalties (idle time between classes, days on
//! campus, classes away from the preferred campus).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `SlotOption`, `Schedule`,
//!   `SelectedSlot`, `Weekday`, `ClockTime`
//! - **`search`**: Best-first branch-and-bound over course options, with
//!   an exhaustive reference strategy
//! - **`validation`**: Input integrity checks (missing codes, duplicate
//!   courses, degenerate slots)
//! - **`worker`**: Background thread with request supersession, plus a
//!   JSON message handler
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Course, CourseType, SlotOption, Weekday};
//! use u_timetable::search::SearchOptions;
//!
//! let courses = vec![
//!     Course::new("COSC1", CourseType::Lecture)
//!         .with_option(SlotOption::new(Weekday::Monday, "09:00".parse().unwrap(), 60))
//!         .with_option(SlotOption::new(Weekday::Tuesday, "09:00".parse().unwrap(), 60)),
//!     Course::new("COSC1", CourseType::Tutorial)
//!         .with_option(SlotOption::new(Weekday::Monday, "10:00".parse().unwrap(), 60)),
//! ];
//!
//! let schedules = u_timetable::generate(&courses, &SearchOptions::new()).unwrap();
//! assert_eq!(schedules.len(), 2);
//! assert_eq!(schedules[0].days_used().len(), 1);
//! ```

pub mod error;
pub mod models;
pub mod search;
pub mod validation;
pub mod worker;

pub use error::{Error, Result};

use models::{Course, Schedule};
use search::{SearchEngine, SearchOptions};

/// Generates the best schedules for `courses`, best first.
///
/// Shorthand for [`SearchEngine::generate`] with the default expander.
pub fn generate(courses: &[Course], options: &SearchOptions) -> Result<Vec<Schedule>> {
    SearchEngine::new().generate(courses, options)
}
