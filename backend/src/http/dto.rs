//! Data Transfer Objects for the HTTP API.
//!
//! The timetable itself is serialized straight from [`crate::models::Timetable`].

use serde::{Deserialize, Serialize};

use crate::models::FacultyRecord;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Successful `/teachers` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachersResponse {
    /// Always `true`
    pub status: bool,
    pub data: Vec<FacultyRecord>,
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Always `false`
    pub status: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
        }
    }
}
