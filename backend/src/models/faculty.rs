//! Faculty directory records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream field holding the relative photo path.
pub const IMAGE_FIELD: &str = "ImagePath";

/// A faculty member as returned by the directory API.
///
/// The upstream schema is passed through untouched; only the image field is
/// interpreted, and it is replaced by an inline data URI before responding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacultyRecord(Map<String, Value>);

impl FacultyRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Relative photo path, when present and non-empty.
    pub fn image_path(&self) -> Option<&str> {
        self.0
            .get(IMAGE_FIELD)
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
    }

    pub fn set_image(&mut self, image: String) {
        self.0.insert(IMAGE_FIELD.to_string(), Value::String(image));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for FacultyRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
