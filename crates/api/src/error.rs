//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use course_store::StoreError;
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found. Rendered as `{"error"}` with status 404.
    NotFound(&'static str),
    /// Any failure while serving a request. Rendered as
    /// `{"error", "details"}` with status 500.
    Failed {
        error: &'static str,
        details: String,
    },
}

impl ApiError {
    pub fn course_not_found() -> Self {
        ApiError::NotFound("Course not found")
    }

    pub fn create_failed(details: impl std::fmt::Display) -> Self {
        ApiError::Failed {
            error: "Failed to create course",
            details: details.to_string(),
        }
    }

    pub fn fetch_failed(details: impl std::fmt::Display) -> Self {
        ApiError::Failed {
            error: "Failed to fetch course",
            details: details.to_string(),
        }
    }

    pub fn list_failed(details: impl std::fmt::Display) -> Self {
        ApiError::Failed {
            error: "Failed to fetch courses",
            details: details.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Failed { error, details } => {
                tracing::error!(error, %details, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": error, "details": details }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] BuildError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
