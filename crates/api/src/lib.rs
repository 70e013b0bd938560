//! HTTP API server for course records.
//!
//! Exposes a health check, course creation, lookup by id and listing,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use course_store::CourseStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::courses::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CourseStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::check))
        .route(
            "/courses",
            get(routes::courses::list::<S>).post(routes::courses::create::<S>),
        )
        .route("/courses/{id}", get(routes::courses::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps a store in the shared handler state.
pub fn create_state<S: CourseStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState { store })
}
