//! Input validation for timetable generation.
//!
//! Checks structural integrity of a course catalog before searching.
//! Detects:
//! - Courses without a code
//! - Duplicate course identities (code + type)
//! - Zero-length slots
//! - Slots running past midnight
//! - Options that expand to no slots
//!
//! Weekday and time-of-day formats are enforced earlier by the model
//! types themselves, so an unknown weekday never reaches this module.
//!
//! Feasibility is not checked here: a course with no options, or a catalog
//! where every combination clashes, is valid input with an empty result.

use std::collections::HashSet;

use crate::models::{Course, SelectedSlot, MINUTES_PER_DAY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course has an empty code.
    MissingCode,
    /// Two courses share the same code and type.
    DuplicateCourse,
    /// A slot has zero duration.
    ZeroDuration,
    /// A slot ends after midnight.
    PastMidnight,
    /// An option expanded to no slots.
    EmptyExpansion,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. Every course has a code
/// 2. No two courses share code and type
/// 3. Every option has a positive duration
/// 4. Every meeting of every option ends by midnight
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut identities = HashSet::new();

    for course in courses {
        if course.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingCode,
                format!("Course '{}' has no code", course.title),
            ));
        }

        if !identities.insert((course.code.as_str(), course.course_type)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Duplicate course: {}", course.label()),
            ));
        }

        for (i, option) in course.options.iter().enumerate() {
            if option.duration == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ZeroDuration,
                    format!("{} option {} has zero duration", course.label(), i + 1),
                ));
                continue;
            }

            let starts = std::iter::once(option.start).chain(option.repeats.iter().map(|m| m.start));
            for start in starts {
                if option.duration > MINUTES_PER_DAY - start.minutes() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::PastMidnight,
                        format!(
                            "{} option {} starting {} runs past midnight",
                            course.label(),
                            i + 1,
                            start
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the slots an expander produced for one option.
///
/// Checks the same slot-level rules as [`validate_catalog`], since a custom
/// expander may derive slots that differ from the raw option.
pub fn validate_expansion(
    course: &Course,
    option_index: usize,
    slots: &[SelectedSlot],
) -> ValidationResult {
    let mut errors = Vec::new();
    let label = || format!("{} option {}", course.label(), option_index + 1);

    if slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyExpansion,
            format!("{} expands to no slots", label()),
        ));
    }

    for slot in slots {
        if slot.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("{} produced a zero-length slot on {}", label(), slot.day),
            ));
        } else if slot.duration > MINUTES_PER_DAY - slot.start_minutes() {
            errors.push(ValidationError::new(
                ValidationErrorKind::PastMidnight,
                format!("{} produced a slot past midnight on {}", label(), slot.day),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, SlotOption, Weekday};
    use crate::search::{MeetingExpander, SlotExpander};

    fn option(day: Weekday, start: &str, duration: u32) -> SlotOption {
        SlotOption::new(day, start.parse().unwrap(), duration)
    }

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("COSC1", CourseType::Lecture)
                .with_option(option(Weekday::Monday, "09:00", 120))
                .with_option(option(Weekday::Tuesday, "09:00", 120)),
            Course::new("COSC1", CourseType::Tutorial)
                .with_option(option(Weekday::Wednesday, "13:00", 60)),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_catalog(&sample_courses()).is_ok());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_course_without_options_is_valid() {
        let courses = vec![Course::new("EMPTY", CourseType::Other)];
        assert!(validate_catalog(&courses).is_ok());
    }

    #[test]
    fn test_missing_code() {
        let courses = vec![Course::new("  ", CourseType::Lecture).with_title("Nameless")];
        let errors = validate_catalog(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingCode));
    }

    #[test]
    fn test_duplicate_course() {
        let mut courses = sample_courses();
        courses.push(Course::new("COSC1", CourseType::Lecture));

        let errors = validate_catalog(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourse && e.message.contains("COSC1")));
    }

    #[test]
    fn test_zero_duration() {
        let courses = vec![Course::new("A", CourseType::Lecture)
            .with_option(option(Weekday::Monday, "09:00", 0))];

        let errors = validate_catalog(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDuration));
    }

    #[test]
    fn test_past_midnight_in_repeat() {
        let courses = vec![Course::new("A", CourseType::Lecture).with_option(
            option(Weekday::Monday, "09:00", 120).with_repeat(Weekday::Friday, "23:00".parse().unwrap()),
        )];

        let errors = validate_catalog(&courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::PastMidnight);
        assert!(errors[0].message.contains("23:00"));
    }

    #[test]
    fn test_ending_at_midnight_is_valid() {
        let courses = vec![Course::new("A", CourseType::Lecture)
            .with_option(option(Weekday::Monday, "22:00", 120))];
        assert!(validate_catalog(&courses).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let courses = vec![
            Course::new("", CourseType::Lecture).with_option(option(Weekday::Monday, "09:00", 0)),
            Course::new("B", CourseType::Lecture).with_option(option(Weekday::Monday, "23:30", 60)),
        ];

        let errors = validate_catalog(&courses).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_expansion_checks() {
        let course = Course::new("A", CourseType::Lecture);
        let errors = validate_expansion(&course, 0, &[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyExpansion);

        let good = option(Weekday::Monday, "09:00", 60);
        let slots = MeetingExpander.expand(&course, &good);
        assert!(validate_expansion(&course, 0, &slots).is_ok());

        let mut late = slots.clone();
        late[0].start = "23:30".parse().unwrap();
        let errors = validate_expansion(&course, 0, &late).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::PastMidnight);

        let mut huge = slots;
        huge[0].duration = u32::MAX;
        let errors = validate_expansion(&course, 0, &huge).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::PastMidnight);
    }

    #[test]
    fn test_huge_duration_is_past_midnight() {
        let courses = vec![Course::new("A", CourseType::Lecture)
            .with_option(option(Weekday::Monday, "09:00", u32::MAX))];

        let errors = validate_catalog(&courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::PastMidnight);
    }
}
