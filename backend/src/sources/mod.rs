//! Upstream data sources.
//!
//! The services talk to upstream APIs only through these traits, so the
//! same pipelines run against the live HTTP APIs ([`http`]) or against
//! in-memory data ([`local`]) in tests and offline development.
//!
//! # Thread Safety
//! Implementations must be `Send + Sync` to be shared across handlers.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FacultyRecord, Spreadsheet};

pub mod http;
pub mod local;

pub use http::{HttpFacultySource, HttpSpreadsheetSource};
pub use local::{LocalFacultySource, LocalSpreadsheetSource};

/// Faculty directory API.
#[async_trait]
pub trait FacultySource: Send + Sync {
    /// Fetch the faculty list of one department.
    ///
    /// # Returns
    /// * `Ok(Vec<FacultyRecord>)` - Records in upstream order
    /// * `Err(Error)` - Transport failure, non-success status or malformed body
    async fn fetch_department(&self, department: &str) -> Result<Vec<FacultyRecord>>;

    /// Fetch the raw bytes of a photo given its relative path.
    async fn fetch_image(&self, image_path: &str) -> Result<Vec<u8>>;
}

/// Spreadsheet API serving the timetable.
#[async_trait]
pub trait SpreadsheetSource: Send + Sync {
    /// Fetch the whole spreadsheet including grid data.
    async fn fetch_spreadsheet(&self) -> Result<Spreadsheet>;
}
