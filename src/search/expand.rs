//! Materialization of course options into selected slots.
//!
//! The search treats an option as an atomic choice group: every slot the
//! expander returns for it is placed together or not at all.

use std::fmt::Debug;

use crate::models::{Course, SelectedSlot, SlotOption};

/// Maps a course option to the slots it occupies.
///
/// Implementations must be pure: the same input always yields the same
/// slots in the same order.
pub trait SlotExpander: Send + Sync + Debug {
    /// Slots occupied when `option` is chosen for `course`.
    fn expand(&self, course: &Course, option: &SlotOption) -> Vec<SelectedSlot>;
}

/// Default expander: one slot per weekly meeting of the option.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingExpander;

impl SlotExpander for MeetingExpander {
    fn expand(&self, course: &Course, option: &SlotOption) -> Vec<SelectedSlot> {
        let first = (option.day, option.start);
        let repeats = option.repeats.iter().map(|m| (m.day, m.start));

        std::iter::once(first)
            .chain(repeats)
            .map(|(day, start)| SelectedSlot {
                course_code: course.code.clone(),
                title: course.title.clone(),
                course_type: course.course_type,
                color: course.color.clone(),
                day,
                start,
                duration: option.duration,
                room: option.room.clone(),
                campus: option.campus.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, Weekday};

    #[test]
    fn test_single_meeting() {
        let course = Course::new("COSC1", CourseType::Lecture)
            .with_title("Intro")
            .with_color("red");
        let option = SlotOption::new(Weekday::Monday, "09:00".parse().unwrap(), 60)
            .with_room("12.1")
            .with_campus("City");

        let slots = MeetingExpander.expand(&course, &option);
        assert_eq!(slots.len(), 1);
        let s = &slots[0];
        assert_eq!(s.course_code, "COSC1");
        assert_eq!(s.title, "Intro");
        assert_eq!(s.color.as_deref(), Some("red"));
        assert_eq!(s.day, Weekday::Monday);
        assert_eq!(s.duration, 60);
        assert_eq!(s.room, "12.1");
        assert_eq!(s.campus, "City");
    }

    #[test]
    fn test_repeats_share_duration_and_place() {
        let course = Course::new("MATH2", CourseType::Lecture);
        let option = SlotOption::new(Weekday::Tuesday, "10:00".parse().unwrap(), 90)
            .with_campus("City")
            .with_repeat(Weekday::Thursday, "14:00".parse().unwrap());

        let slots = MeetingExpander.expand(&course, &option);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].day, Weekday::Thursday);
        assert_eq!(slots[1].start_minutes(), 14 * 60);
        assert_eq!(slots[1].duration, 90);
        assert_eq!(slots[1].campus, "City");
    }
}
