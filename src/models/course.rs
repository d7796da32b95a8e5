//! Course catalog model.
//!
//! A course offers several mutually exclusive [`SlotOption`]s; a schedule
//! takes exactly one of them. An option may meet more than once a week
//! (see [`SlotOption::repeats`]), in which case all of its meetings are
//! chosen together.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClockTime, Weekday};

/// Kind of class a course entry represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Lecture.
    #[default]
    Lecture,
    /// Tutorial.
    Tutorial,
    /// Workshop.
    Workshop,
    /// Practical / lab.
    Practical,
    /// Anything else.
    Other,
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CourseType::Lecture => "Lecture",
            CourseType::Tutorial => "Tutorial",
            CourseType::Workshop => "Workshop",
            CourseType::Practical => "Practical",
            CourseType::Other => "Other",
        };
        f.write_str(name)
    }
}

/// An additional weekly meeting of a [`SlotOption`].
///
/// Shares the option's duration, room, and campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Weekday of the meeting.
    pub day: Weekday,
    /// Start time.
    pub start: ClockTime,
}

/// One offered meeting pattern for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOption {
    /// Weekday of the (first) meeting.
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
    /// Further meetings in the same week.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repeats: Vec<Meeting>,
}

impl SlotOption {
    /// Creates an option with no room or campus.
    pub fn new(day: Weekday, start: ClockTime, duration: u32) -> Self {
        Self {
            day,
            start,
            duration,
            room: String::new(),
            campus: String::new(),
            repeats: Vec::new(),
        }
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the campus label.
    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = campus.into();
        self
    }

    /// Adds another weekly meeting.
    pub fn with_repeat(mut self, day: Weekday, start: ClockTime) -> Self {
        self.repeats.push(Meeting { day, start });
        self
    }

    /// End of the first meeting in minutes since midnight.
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.start.minutes().saturating_add(self.duration)
    }

    /// Number of weekly meetings.
    pub fn meeting_count(&self) -> usize {
        1 + self.repeats.len()
    }
}

/// A course and its alternative time slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., `"COSC1234"`).
    pub code: String,
    /// Class type; together with `code` identifies the course entry.
    #[serde(rename = "type", default)]
    pub course_type: CourseType,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Color tag used by renderers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Mutually exclusive slot options.
    #[serde(default)]
    pub options: Vec<SlotOption>,
}

impl Course {
    /// Creates a course with no options.
    pub fn new(code: impl Into<String>, course_type: CourseType) -> Self {
        Self {
            code: code.into(),
            course_type,
            title: String::new(),
            color: None,
            options: Vec::new(),
        }
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Adds a slot option.
    pub fn with_option(mut self, option: SlotOption) -> Self {
        self.options.push(option);
        self
    }

    /// Number of slot options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Identity label, e.g. `"COSC1234 Lecture"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.code, self.course_type)
    }
}

/// Distinct campus labels across a catalog, in first-seen order.
///
/// The first entry is the natural default for a preferred campus.
pub fn campuses(courses: &[Course]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for option in courses.iter().flat_map(|c| &c.options) {
        if !option.campus.is_empty() && !seen.iter().any(|c| c == &option.campus) {
            seen.push(option.campus.clone());
        }
    }
    seen
}

/// Number of raw option combinations (saturating).
pub fn combination_count(courses: &[Course]) -> u64 {
    courses
        .iter()
        .fold(1u64, |acc, c| acc.saturating_mul(c.option_count() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hm: &str) -> ClockTime {
        hm.parse().unwrap()
    }

    #[test]
    fn test_course_builder() {
        let course = Course::new("COSC1234", CourseType::Tutorial)
            .with_title("Programming 1")
            .with_color("blue")
            .with_option(SlotOption::new(Weekday::Monday, t("09:00"), 60).with_campus("City"))
            .with_option(
                SlotOption::new(Weekday::Tuesday, t("10:00"), 120)
                    .with_room("80.03.12")
                    .with_repeat(Weekday::Thursday, t("10:00")),
            );

        assert_eq!(course.option_count(), 2);
        assert_eq!(course.label(), "COSC1234 Tutorial");
        assert_eq!(course.options[1].meeting_count(), 2);
        assert_eq!(course.options[1].end_minutes(), 12 * 60);
    }

    #[test]
    fn test_course_deserialize() {
        let json = r#"{
            "code": "MATH2411",
            "type": "Lecture",
            "title": "Mathematics",
            "options": [
                {"day": "Monday", "start": "09:00", "duration": 90, "room": "1.1", "campus": "City"},
                {"day": "Wed", "start": "13:30", "duration": 90, "campus": "Bundoora",
                 "repeats": [{"day": "Fri", "start": "13:30"}]}
            ]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.course_type, CourseType::Lecture);
        assert_eq!(course.options.len(), 2);
        assert_eq!(course.options[0].room, "1.1");
        assert_eq!(course.options[1].repeats[0].day, Weekday::Friday);
        assert!(course.color.is_none());
    }

    #[test]
    fn test_campuses_first_seen_order() {
        let courses = vec![
            Course::new("A", CourseType::Lecture)
                .with_option(SlotOption::new(Weekday::Monday, t("09:00"), 60).with_campus("City"))
                .with_option(SlotOption::new(Weekday::Monday, t("10:00"), 60).with_campus("Brunswick")),
            Course::new("B", CourseType::Lecture)
                .with_option(SlotOption::new(Weekday::Friday, t("09:00"), 60).with_campus("City"))
                .with_option(SlotOption::new(Weekday::Friday, t("11:00"), 60)),
        ];
        assert_eq!(campuses(&courses), vec!["City", "Brunswick"]);
    }

    #[test]
    fn test_combination_count() {
        let a = Course::new("A", CourseType::Lecture)
            .with_option(SlotOption::new(Weekday::Monday, t("09:00"), 60))
            .with_option(SlotOption::new(Weekday::Monday, t("10:00"), 60));
        let b = Course::new("B", CourseType::Lecture)
            .with_option(SlotOption::new(Weekday::Monday, t("09:00"), 60))
            .with_option(SlotOption::new(Weekday::Monday, t("10:00"), 60))
            .with_option(SlotOption::new(Weekday::Monday, t("11:00"), 60));
        assert_eq!(combination_count(&[a, b.clone()]), 6);
        assert_eq!(combination_count(&[]), 1);
        assert_eq!(combination_count(&[Course::new("C", CourseType::Other), b]), 0);
    }
}
