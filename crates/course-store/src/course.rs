//! Course records.

use common::CourseId;
use serde::{Deserialize, Serialize};

use crate::error::CourseError;

/// Maximum length, in characters, of `title` and `instructor`.
pub const MAX_TEXT_LEN: usize = 100;

/// A stored course.
///
/// Serializes to exactly `{"id", "title", "instructor", "credits"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub instructor: String,
    pub credits: i32,
}

impl Course {
    /// Builds the stored record for a course that was assigned `id`.
    pub fn from_new(id: CourseId, course: NewCourse) -> Self {
        Self {
            id,
            title: course.title,
            instructor: course.instructor,
            credits: course.credits,
        }
    }
}

/// A validated course that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    title: String,
    instructor: String,
    credits: i32,
}

impl NewCourse {
    /// Validates the fields of a course about to be created.
    pub fn new(
        title: impl Into<String>,
        instructor: impl Into<String>,
        credits: i32,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        let instructor = instructor.into();
        check_text("title", &title)?;
        check_text("instructor", &instructor)?;

        Ok(Self {
            title,
            instructor,
            credits,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), CourseError> {
    if value.trim().is_empty() {
        return Err(CourseError::EmptyField { field });
    }
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CourseError::FieldTooLong {
            field,
            max: MAX_TEXT_LEN,
            actual: len,
        });
    }
    Ok(())
}
