//! Error types for campus-feed

use thiserror::Error;

/// Result type for campus-feed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or talking to upstream APIs
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required credential was not configured
    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// Transport failure or non-success status from an upstream API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a body of the wrong shape
    #[error("Unexpected upstream payload: {0}")]
    UnexpectedPayload(String),

    /// Upstream data is not available (offline sources)
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    /// Background task failed to complete
    #[error("Task failed: {0}")]
    Task(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::UnexpectedPayload(err.to_string())
    }
}
