//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, Json};

use super::dto::{HealthResponse, TeachersResponse};
use super::error::AppError;
use super::state::AppState;
use crate::error::Error;
use crate::models::Timetable;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Faculty
// =============================================================================

/// GET /teachers
///
/// Faculty of every configured department, with photos inlined as data URIs.
pub async fn list_teachers(State(state): State<AppState>) -> HandlerResult<TeachersResponse> {
    let data = services::aggregate_faculty(state.faculty.as_ref(), &state.departments)
        .await
        .map_err(AppError::Teachers)?;

    Ok(Json(TeachersResponse { status: true, data }))
}

// =============================================================================
// Timetable
// =============================================================================

/// GET /data
///
/// Fetch the timetable spreadsheet and reshape it into the structured schedule.
pub async fn get_timetable(State(state): State<AppState>) -> HandlerResult<Timetable> {
    let spreadsheet = state
        .sheets
        .fetch_spreadsheet()
        .await
        .map_err(AppError::Timetable)?;

    // CPU-bound transformation off the async workers
    let timetable = tokio::task::spawn_blocking(move || services::build_timetable(&spreadsheet))
        .await
        .map_err(|e| AppError::Timetable(Error::Task(format!("Task join error: {}", e))))?;

    Ok(Json(timetable))
}
