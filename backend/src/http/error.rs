//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::dto::FailureResponse;
use crate::error::Error;

/// Message returned when the faculty directory cannot be assembled.
pub const TEACHERS_FAILURE: &str = "Failed to fetch teachers";

/// Message returned when the timetable cannot be built.
pub const TIMETABLE_FAILURE: &str = "Failed to fetch timetable";

/// Application error type for HTTP handlers.
///
/// The cause is logged; clients only see the endpoint's generic message.
#[derive(Debug)]
pub enum AppError {
    /// A department list could not be fetched
    Teachers(Error),
    /// The spreadsheet could not be fetched or processed
    Timetable(Error),
}

impl AppError {
    fn message(&self) -> &'static str {
        match self {
            AppError::Teachers(_) => TEACHERS_FAILURE,
            AppError::Timetable(_) => TIMETABLE_FAILURE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();
        match &self {
            AppError::Teachers(e) | AppError::Timetable(e) => {
                error!(error = %e, "{}", message);
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FailureResponse::new(message)),
        )
            .into_response()
    }
}
