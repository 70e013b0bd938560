use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Primary key of a course row.
///
/// Wraps the database-generated integer so course IDs cannot be mixed up
/// with credit counts or other plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i32);

impl CourseId {
    /// Creates a course ID from a raw key value.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the underlying key value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i32> for CourseId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<CourseId> for i32 {
    fn from(id: CourseId) -> Self {
        id.0
    }
}
