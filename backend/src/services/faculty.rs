//! Faculty directory aggregation.
//!
//! Department lists are fetched concurrently and joined all-or-nothing.
//! Photos are then fetched concurrently per record; a failed photo only
//! blanks that record's image field.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use futures::future::{join_all, try_join_all};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::FacultyRecord;
use crate::sources::FacultySource;

/// Prefix of the inline image written into each record.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode photo bytes as an inline data URI.
pub fn encode_image(bytes: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, B64.encode(bytes))
}

/// Inline form of a record's photo, or an empty string when the record has
/// no photo or it cannot be fetched.
async fn inline_image(source: &dyn FacultySource, record: &FacultyRecord) -> String {
    let Some(path) = record.image_path() else {
        return String::new();
    };

    match source.fetch_image(path).await {
        Ok(bytes) => encode_image(&bytes),
        Err(e) => {
            warn!(image_path = path, error = %e, "Failed to fetch faculty photo");
            String::new()
        }
    }
}

/// Fetch every department in order, concatenate the records and inline
/// their photos.
///
/// # Errors
/// Fails when any department list cannot be fetched. Photo failures never
/// fail the aggregation.
pub async fn aggregate_faculty(
    source: &dyn FacultySource,
    departments: &[String],
) -> Result<Vec<FacultyRecord>> {
    let lists = try_join_all(
        departments
            .iter()
            .map(|department| source.fetch_department(department)),
    )
    .await?;

    let mut records: Vec<FacultyRecord> = lists.into_iter().flatten().collect();

    let images = join_all(records.iter().map(|record| inline_image(source, record))).await;
    let inlined = images.iter().filter(|image| !image.is_empty()).count();

    for (record, image) in records.iter_mut().zip(images) {
        record.set_image(image);
    }

    info!(
        departments = departments.len(),
        records = records.len(),
        photos = inlined,
        "Aggregated faculty directory"
    );

    Ok(records)
}

#[cfg(test)]
#[path = "faculty_tests.rs"]
mod faculty_tests;
