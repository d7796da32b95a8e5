//! Timetable domain models.
//!
//! Provides the data types for course catalogs and generated schedules.
//!
//! # Concepts
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Course`] | A class entry (code + type) with alternative time slots |
//! | [`SlotOption`] | One offered weekly meeting pattern |
//! | [`SelectedSlot`] | A slot materialized into a schedule |
//! | [`Schedule`] | A conflict-free set of selected slots with its penalties |

mod course;
mod schedule;
mod time;

pub use course::{campuses, combination_count, Course, CourseType, Meeting, SlotOption};
pub use schedule::{Schedule, SelectedSlot};
pub use time::{week_minute, ClockTime, ParseClockTimeError, Weekday, MINUTES_PER_DAY};
