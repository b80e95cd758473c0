//! Live upstream sources backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{FacultySource, SpreadsheetSource};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::models::{FacultyRecord, Spreadsheet};

/// User-Agent string for upstream requests.
const USER_AGENT: &str = concat!("campus-feed/", env!("CARGO_PKG_VERSION"));

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(Error::from)
}

// ---------------------------------------------------------------------------
// Faculty directory
// ---------------------------------------------------------------------------

/// Faculty directory served at `{base_url}/Faculty/GetAllEmp?id=<department>`.
#[derive(Debug, Clone)]
pub struct HttpFacultySource {
    client: Client,
    base_url: String,
}

impl HttpFacultySource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.faculty.base_url, config.upstream.timeout())
    }

    pub fn department_url(&self, department: &str) -> String {
        format!("{}/Faculty/GetAllEmp?id={}", self.base_url, department)
    }

    /// Absolute location of a photo; upstream paths are host-relative.
    pub fn image_url(&self, image_path: &str) -> String {
        if image_path.starts_with('/') {
            format!("{}{}", self.base_url, image_path)
        } else {
            format!("{}/{}", self.base_url, image_path)
        }
    }
}

#[async_trait]
impl FacultySource for HttpFacultySource {
    async fn fetch_department(&self, department: &str) -> Result<Vec<FacultyRecord>> {
        let url = self.department_url(department);
        debug!(%url, "Fetching faculty list");

        let body = self
            .client
            .post(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let records: Vec<FacultyRecord> = serde_json::from_slice(&body)?;
        debug!(department, records = records.len(), "Fetched faculty list");
        Ok(records)
    }

    async fn fetch_image(&self, image_path: &str) -> Result<Vec<u8>> {
        let url = self.image_url(image_path);

        let bytes = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet
// ---------------------------------------------------------------------------

/// Spreadsheet fetched with grid data from `{base_url}/{spreadsheet_id}`.
#[derive(Debug, Clone)]
pub struct HttpSpreadsheetSource {
    client: Client,
    base_url: String,
    spreadsheet_id: Option<String>,
    api_key: Option<String>,
}

impl HttpSpreadsheetSource {
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: Option<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
            spreadsheet_id,
            api_key,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.sheets.base_url,
            config.sheets.spreadsheet_id.clone(),
            config.sheets.api_key.clone(),
            config.upstream.timeout(),
        )
    }
}

#[async_trait]
impl SpreadsheetSource for HttpSpreadsheetSource {
    async fn fetch_spreadsheet(&self) -> Result<Spreadsheet> {
        let spreadsheet_id = self
            .spreadsheet_id
            .as_deref()
            .ok_or(Error::MissingCredentials("spreadsheet id"))?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingCredentials("sheets API key"))?;

        let url = format!("{}/{}", self.base_url, spreadsheet_id);
        debug!(%url, "Fetching spreadsheet");

        let body = self
            .client
            .get(&url)
            .query(&[("includeGridData", "true"), ("key", api_key)])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let spreadsheet: Spreadsheet = serde_json::from_slice(&body)?;
        debug!(sheets = spreadsheet.sheets.len(), "Fetched spreadsheet");
        Ok(spreadsheet)
    }
}
