//! Health check endpoint.

/// GET / — reports that the service is up. Never touches the database.
pub async fn check() -> &'static str {
    "Course Service is running"
}
