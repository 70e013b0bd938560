use thiserror::Error;

/// Reasons a course cannot be constructed from client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// A required text field was empty or whitespace only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A text field exceeds the column width.
    #[error("{field} must be at most {max} characters, got {actual}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Errors that can occur when interacting with the course store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No further course IDs can be assigned.
    #[error("Course id sequence exhausted")]
    IdSequenceExhausted,
}

/// Result type for course store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
