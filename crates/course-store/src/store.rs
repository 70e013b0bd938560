use async_trait::async_trait;

use crate::{Course, CourseId, NewCourse, Result};

/// Core trait for course persistence.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Creates the course table if it does not exist yet.
    async fn ensure_schema(&self) -> Result<()>;

    /// Inserts a course and returns the stored row with its generated id.
    async fn insert(&self, course: NewCourse) -> Result<Course>;

    /// Retrieves a course by id.
    ///
    /// Returns None if no course has that id.
    async fn get(&self, id: CourseId) -> Result<Option<Course>>;

    /// Retrieves every course, ordered by id.
    async fn list(&self) -> Result<Vec<Course>>;
}
