//! Persistence adapter for course records.
//!
//! Maps [`Course`] rows to and from a single relational table. The
//! [`CourseStore`] trait is implemented by [`PostgresCourseStore`] for
//! production and [`InMemoryCourseStore`] for tests and local runs.

pub mod config;
pub mod course;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::CourseId;
pub use config::DatabaseConfig;
pub use course::{Course, MAX_TEXT_LEN, NewCourse};
pub use error::{CourseError, Result, StoreError};
pub use memory::InMemoryCourseStore;
pub use postgres::PostgresCourseStore;
pub use store::CourseStore;
