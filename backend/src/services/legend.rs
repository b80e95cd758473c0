//! Legend extraction.
//!
//! The top rows of the legend tab list every department and course as a
//! colored cell. Grid cells painted with the same color belong to that label.

use crate::models::{ColorKey, Label, Sheet};

/// Number of leading rows holding the legend.
pub const LEGEND_ROWS: usize = 4;

/// Metadata columns preceding the legend cells in each row.
pub const LEGEND_SKIP_COLUMNS: usize = 4;

/// Collect one label per non-empty legend cell, row by row, left to right.
pub fn extract_labels(legend: &Sheet) -> Vec<Label> {
    legend
        .rows()
        .iter()
        .take(LEGEND_ROWS)
        .flat_map(|row| row.values.iter().skip(LEGEND_SKIP_COLUMNS))
        .filter_map(|cell| {
            cell.display_text().map(|name| Label {
                color: ColorKey::of_cell(Some(cell)),
                name: name.to_string(),
            })
        })
        .collect()
}

/// First label whose color equals `key`.
pub fn find_label<'a>(labels: &'a [Label], key: &ColorKey) -> Option<&'a Label> {
    labels.iter().find(|label| label.color == *key)
}
