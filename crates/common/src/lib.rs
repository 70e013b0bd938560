//! Shared types for the course service.

pub mod types;

pub use types::CourseId;
