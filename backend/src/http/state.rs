//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::sources::{FacultySource, HttpFacultySource, HttpSpreadsheetSource, SpreadsheetSource};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Department ids queried by `/teachers`, in response order
    pub departments: Arc<[String]>,
    /// Faculty directory upstream
    pub faculty: Arc<dyn FacultySource>,
    /// Timetable spreadsheet upstream
    pub sheets: Arc<dyn SpreadsheetSource>,
}

impl AppState {
    /// Create a new application state with the given sources.
    pub fn new(
        departments: Vec<String>,
        faculty: Arc<dyn FacultySource>,
        sheets: Arc<dyn SpreadsheetSource>,
    ) -> Self {
        Self {
            departments: departments.into(),
            faculty,
            sheets,
        }
    }

    /// Create state backed by the live upstream APIs.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let faculty = Arc::new(HttpFacultySource::from_config(config)?);
        let sheets = Arc::new(HttpSpreadsheetSource::from_config(config)?);
        Ok(Self::new(config.faculty.departments.clone(), faculty, sheets))
    }
}
