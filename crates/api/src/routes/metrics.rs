//! Prometheus metrics: counter names and the scrape endpoint.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

pub const COURSES_CREATED: &str = "courses_created_total";
pub const COURSE_CREATE_FAILURES: &str = "course_create_failures_total";
pub const COURSE_LOOKUPS: &str = "course_lookups_total";
pub const COURSE_NOT_FOUND: &str = "course_not_found_total";
pub const COURSE_LIST_REQUESTS: &str = "course_list_requests_total";

/// Registers help text for the course counters with the installed recorder.
pub fn describe() {
    metrics::describe_counter!(COURSES_CREATED, "Courses stored successfully");
    metrics::describe_counter!(
        COURSE_CREATE_FAILURES,
        "Create requests rejected or failed in storage"
    );
    metrics::describe_counter!(COURSE_LOOKUPS, "Requests for a single course");
    metrics::describe_counter!(COURSE_NOT_FOUND, "Lookups for ids with no course");
    metrics::describe_counter!(COURSE_LIST_REQUESTS, "Requests listing all courses");
}

/// GET /metrics — Prometheus text exposition.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
