//! Service configuration.
//!
//! Settings come from built-in defaults, an optional `campus.toml` file and
//! environment variables, in increasing order of precedence.
//!
//! # Environment Variables
//! - `CAMPUS_CONFIG`: Explicit path to the TOML file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `FACULTY_BASE_URL`: Faculty directory host (default: http://isb.nu.edu.pk)
//! - `FACULTY_DEPARTMENTS`: Comma-separated department ids (default: 301,302,303,313)
//! - `SHEETS_BASE_URL`: Spreadsheet API base (default: https://sheets.googleapis.com/v4/spreadsheets)
//! - `GOOGLE_SHEET_ID`: Timetable spreadsheet id
//! - `GOOGLE_SHEETS_API_KEY`: Spreadsheet API key
//! - `UPSTREAM_TIMEOUT_SECS`: Timeout for every upstream request (default: 30)

use std::env;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CAMPUS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub faculty: FacultySettings,
    pub sheets: SheetsSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacultySettings {
    pub base_url: String,
    /// Department ids, fetched and concatenated in this order.
    pub departments: Vec<String>,
}

impl Default for FacultySettings {
    fn default() -> Self {
        Self {
            base_url: "http://isb.nu.edu.pk".to_string(),
            departments: ["301", "302", "303", "313"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsSettings {
    pub base_url: String,
    pub spreadsheet_id: Option<String>,
    pub api_key: Option<String>,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            base_url: "https://sheets.googleapis.com/v4/spreadsheets".to_string(),
            spreadsheet_id: None,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(Error::Config)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// First existing `campus.toml` in the current or `backend/` directory.
    pub fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from("campus.toml"),
            PathBuf::from("backend/campus.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load configuration from file (if any) and the process environment.
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(Self::default_location);

        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_var("PORT", &port)?;
        }
        if let Some(base_url) = lookup("FACULTY_BASE_URL") {
            self.faculty.base_url = base_url;
        }
        if let Some(departments) = lookup("FACULTY_DEPARTMENTS") {
            self.faculty.departments = departments
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(base_url) = lookup("SHEETS_BASE_URL") {
            self.sheets.base_url = base_url;
        }
        if let Some(id) = lookup("GOOGLE_SHEET_ID") {
            self.sheets.spreadsheet_id = Some(id);
        }
        if let Some(key) = lookup("GOOGLE_SHEETS_API_KEY") {
            self.sheets.api_key = Some(key);
        }
        if let Some(timeout) = lookup("UPSTREAM_TIMEOUT_SECS") {
            self.upstream.timeout_secs = parse_var("UPSTREAM_TIMEOUT_SECS", &timeout)?;
        }
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {} value {:?}: {}", key, value, e)))
}
