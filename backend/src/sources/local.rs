//! In-memory sources for tests and offline development.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;

use super::{FacultySource, SpreadsheetSource};
use crate::error::{Error, Result};
use crate::models::{FacultyRecord, Spreadsheet};

/// Faculty directory held in memory. Unknown departments and images fail
/// like an unreachable upstream would.
#[derive(Debug, Clone, Default)]
pub struct LocalFacultySource {
    departments: HashMap<String, Vec<FacultyRecord>>,
    images: HashMap<String, Vec<u8>>,
}

impl LocalFacultySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department(
        mut self,
        department: impl Into<String>,
        records: Vec<FacultyRecord>,
    ) -> Self {
        self.departments.insert(department.into(), records);
        self
    }

    pub fn with_image(mut self, image_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.images.insert(image_path.into(), bytes);
        self
    }
}

#[async_trait]
impl FacultySource for LocalFacultySource {
    async fn fetch_department(&self, department: &str) -> Result<Vec<FacultyRecord>> {
        self.departments
            .get(department)
            .cloned()
            .ok_or_else(|| Error::Unavailable(format!("department {}", department)))
    }

    async fn fetch_image(&self, image_path: &str) -> Result<Vec<u8>> {
        self.images
            .get(image_path)
            .cloned()
            .ok_or_else(|| Error::Unavailable(format!("image {}", image_path)))
    }
}

/// Spreadsheet held in memory, or absent to simulate an outage.
#[derive(Debug, Clone, Default)]
pub struct LocalSpreadsheetSource {
    spreadsheet: Option<Spreadsheet>,
}

impl LocalSpreadsheetSource {
    pub fn new(spreadsheet: Spreadsheet) -> Self {
        Self {
            spreadsheet: Some(spreadsheet),
        }
    }

    pub fn unavailable() -> Self {
        Self { spreadsheet: None }
    }

    /// Load a saved API response (`?includeGridData=true`) from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read spreadsheet file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::new(serde_json::from_str(&content)?))
    }
}

#[async_trait]
impl SpreadsheetSource for LocalSpreadsheetSource {
    async fn fetch_spreadsheet(&self) -> Result<Spreadsheet> {
        self.spreadsheet
            .clone()
            .ok_or_else(|| Error::Unavailable("spreadsheet".to_string()))
    }
}
