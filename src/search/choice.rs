//! Expanded, validated per-course choices shared by both strategies.

use crate::error::Result;
use crate::models::{Course, SelectedSlot};
use crate::validation::{validate_catalog, validate_expansion, ValidationError};

use super::SlotExpander;

/// One option of a course, expanded into its linked slots.
#[derive(Debug, Clone)]
pub(crate) struct Choice {
    /// Slots placed together when this option is chosen.
    pub slots: Vec<SelectedSlot>,
    /// Slots away from the preferred campus.
    pub off_campus: u32,
    /// Total minutes occupied.
    pub minutes: u32,
}

/// A course with its expanded choices, in catalog option order.
#[derive(Debug, Clone)]
pub(crate) struct CourseChoices {
    /// Position of the course in the input catalog.
    pub catalog_index: usize,
    pub choices: Vec<Choice>,
}

impl CourseChoices {
    /// Largest number of minutes any choice of this course occupies.
    pub fn max_minutes(&self) -> u32 {
        self.choices.iter().map(|c| c.minutes).max().unwrap_or(0)
    }
}

/// Validates the catalog and expands every option.
///
/// All validation problems are collected before failing.
pub(crate) fn prepare(
    courses: &[Course],
    expander: &dyn SlotExpander,
    preferred_campus: &str,
) -> Result<Vec<CourseChoices>> {
    let mut errors: Vec<ValidationError> = validate_catalog(courses).err().unwrap_or_default();
    let mut prepared = Vec::with_capacity(courses.len());

    for (catalog_index, course) in courses.iter().enumerate() {
        let mut choices = Vec::with_capacity(course.options.len());
        for (i, option) in course.options.iter().enumerate() {
            let slots = expander.expand(course, option);
            if let Err(mut errs) = validate_expansion(course, i, &slots) {
                errors.append(&mut errs);
                continue;
            }
            choices.push(Choice {
                off_campus: slots.iter().filter(|s| s.campus != preferred_campus).count() as u32,
                minutes: slots.iter().map(|s| s.duration).sum(),
                slots,
            });
        }
        prepared.push(CourseChoices {
            catalog_index,
            choices,
        });
    }

    if errors.is_empty() {
        Ok(prepared)
    } else {
        Err(errors.into())
    }
}
