//! Time-slot header extraction for a weekday tab.

use crate::models::{RowData, Sheet, TimeSlot};

/// Row holding the lecture time-slot headers.
pub const LECTURE_HEADER_ROW: usize = 4;

/// First-column marker of the lab header row (case-insensitive).
pub const LAB_MARKER: &str = "lab";

/// Lecture and lab headers of a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySlots {
    pub lectures: Vec<TimeSlot>,
    pub labs: Vec<TimeSlot>,
    /// Row index of the lab header, if the tab has one.
    pub lab_header: Option<usize>,
}

/// Index of the first row whose first cell reads "lab".
pub fn lab_header_index(rows: &[RowData]) -> Option<usize> {
    rows.iter().position(|row| {
        row.leading_text()
            .is_some_and(|text| text.to_lowercase() == LAB_MARKER)
    })
}

/// Slots of a header row. Columns keep their position; empty headers are
/// dropped without renumbering the remaining ones.
pub fn slots_from_row(row: &RowData) -> Vec<TimeSlot> {
    row.values
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(column, cell)| {
            cell.display_text().map(|text| TimeSlot {
                text: text.to_string(),
                column,
            })
        })
        .collect()
}

pub fn extract_day_slots(sheet: &Sheet) -> DaySlots {
    let rows = sheet.rows();
    let lab_header = lab_header_index(rows);

    let lectures = rows
        .get(LECTURE_HEADER_ROW)
        .map(slots_from_row)
        .unwrap_or_default();
    let labs = lab_header
        .and_then(|index| rows.get(index))
        .map(slots_from_row)
        .unwrap_or_default();

    DaySlots {
        lectures,
        labs,
        lab_header,
    }
}
