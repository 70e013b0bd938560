use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Course, CourseId, CourseStore, NewCourse, Result, StoreError};

/// In-memory course store for testing.
///
/// Assigns ids from 1 upwards like a `SERIAL` column and never reuses them.
#[derive(Clone, Default)]
pub struct InMemoryCourseStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    courses: BTreeMap<CourseId, Course>,
    last_id: i32,
}

impl InMemoryCourseStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored courses.
    pub async fn course_count(&self) -> usize {
        self.inner.read().await.courses.len()
    }

    /// Removes all courses. Ids handed out before are not reused.
    pub async fn clear(&self) {
        self.inner.write().await.courses.clear();
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert(&self, course: NewCourse) -> Result<Course> {
        let mut inner = self.inner.write().await;

        let next = inner
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdSequenceExhausted)?;
        inner.last_id = next;

        let id = CourseId::new(next);
        let course = Course::from_new(id, course);
        inner.courses.insert(id, course.clone());

        tracing::debug!(%id, "stored course in memory");
        Ok(course)
    }

    async fn get(&self, id: CourseId) -> Result<Option<Course>> {
        Ok(self.inner.read().await.courses.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Course>> {
        Ok(self.inner.read().await.courses.values().cloned().collect())
    }
}
