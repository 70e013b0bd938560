use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::{Course, CourseId, CourseStore, DatabaseConfig, NewCourse, Result};

const CREATE_TABLE: &str = include_str!("../sql/create_course_table.sql");

/// PostgreSQL-backed course store.
#[derive(Clone)]
pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    /// Creates a new PostgreSQL course store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool described by `config`.
    #[tracing::instrument(skip(config), fields(url = %config.database_url()))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(config.connect_options())
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_course(row: PgRow) -> Result<Course> {
        Ok(Course {
            id: CourseId::new(row.try_get::<i32, _>("id")?),
            title: row.try_get("title")?,
            instructor: row.try_get("instructor")?,
            credits: row.try_get::<i32, _>("credits")?,
        })
    }
}

#[async_trait]
impl CourseStore for PostgresCourseStore {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::raw_sql(CREATE_TABLE).execute(&self.pool).await?;
        tracing::info!("course table ready");
        Ok(())
    }

    #[tracing::instrument(skip(self, course), fields(title = %course.title()))]
    async fn insert(&self, course: NewCourse) -> Result<Course> {
        let row = sqlx::query(
            r#"
            INSERT INTO course (title, instructor, credits)
            VALUES ($1, $2, $3)
            RETURNING id, title, instructor, credits
            "#,
        )
        .bind(course.title())
        .bind(course.instructor())
        .bind(course.credits())
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_course(row)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: CourseId) -> Result<Option<Course>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, instructor, credits
            FROM course
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_course).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Course>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, instructor, credits
            FROM course
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_course).collect()
    }
}
