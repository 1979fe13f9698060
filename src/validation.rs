//! Input validation for course catalogs.
//!
//! Checks structural integrity of a catalog before searching. Detects:
//! - Duplicate course names
//! - Courses without time slots
//! - Malformed intervals (empty, reversed, or past midnight)
//!
//! The search does not require a valid catalog: it is total over any
//! input. Names only matter for display, and intervals built through
//! `TimeInterval::new` are always well-formed. Catalogs loaded through
//! serde bypass that constructor, which is what this check is for.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same name.
    DuplicateName,
    /// A course has no time slots.
    EmptyCourse,
    /// A time slot has `end <= start` or ends after midnight.
    InvalidInterval,
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
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for course in catalog {
        if !names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate course name: {}", course.name),
            ));
        }

        if course.time_slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no time slots", course.name),
            ));
        }

        for slot in &course.time_slots {
            if !slot.is_well_formed() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidInterval,
                    format!(
                        "Course '{}' has invalid slot on {}: {}..{}",
                        course.name, slot.day, slot.start_minute, slot.end_minute
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
