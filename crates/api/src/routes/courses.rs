//! Course create, lookup and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::CourseId;
use course_store::{Course, CourseStore, NewCourse};
use serde::Deserialize;

use super::metrics::{
    COURSE_CREATE_FAILURES, COURSE_LIST_REQUESTS, COURSE_LOOKUPS, COURSE_NOT_FOUND,
    COURSES_CREATED,
};
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CourseStore> {
    pub store: S,
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub instructor: String,
    pub credits: i32,
}

/// POST /courses — store a new course.
///
/// Every failure, including a malformed body, is answered with 500.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: CourseStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    match create_course(&state.store, payload).await {
        Ok(course) => {
            metrics::counter!(COURSES_CREATED).increment(1);
            tracing::info!(id = %course.id, "course created");
            Ok((StatusCode::CREATED, Json(course)))
        }
        Err(err) => {
            metrics::counter!(COURSE_CREATE_FAILURES).increment(1);
            Err(err)
        }
    }
}

async fn create_course<S: CourseStore>(
    store: &S,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<Course, ApiError> {
    let Json(req) = payload.map_err(ApiError::create_failed)?;
    let course =
        NewCourse::new(req.title, req.instructor, req.credits).map_err(ApiError::create_failed)?;
    store.insert(course).await.map_err(ApiError::create_failed)
}

/// GET /courses/{id} — load one course.
///
/// An id that is not an integer cannot name a course and is reported as not found.
#[tracing::instrument(skip(state))]
pub async fn get<S: CourseStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    metrics::counter!(COURSE_LOOKUPS).increment(1);

    let course = match id.parse::<CourseId>() {
        Ok(id) => state.store.get(id).await.map_err(ApiError::fetch_failed)?,
        Err(_) => None,
    };

    course.map(Json).ok_or_else(|| {
        metrics::counter!(COURSE_NOT_FOUND).increment(1);
        ApiError::course_not_found()
    })
}

/// GET /courses — list every course, ordered by id.
#[tracing::instrument(skip(state))]
pub async fn list<S: CourseStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Course>>, ApiError> {
    metrics::counter!(COURSE_LIST_REQUESTS).increment(1);

    let courses = state.store.list().await.map_err(ApiError::list_failed)?;
    Ok(Json(courses))
}
