//! Grid classification for one weekday tab.
//!
//! Each data row starts with its venue; every time slot of the day picks the
//! cell at the slot's column in that row. Missing cells, colors and
//! parentheses produce empty fields rather than errors.

use tracing::debug;

use super::legend::find_label;
use super::time_slots::DaySlots;
use crate::models::{CellData, ColorKey, DaySchedule, Label, RowData, ScheduleEntry, Sheet, TimeSlot};

/// First lecture data row, directly below the lecture header.
pub const FIRST_LECTURE_ROW: usize = 5;

/// Non-class activities flagged in the schedule. Matched exactly.
pub const MISC_ACTIVITIES: [&str; 2] = ["FSM", "FYP/ Thesis Evaluations"];

pub fn is_misc(text: &str) -> bool {
    MISC_ACTIVITIES.contains(&text)
}

pub fn is_lab(text: &str) -> bool {
    text.to_lowercase().contains("lab")
}

/// Text between the first `(` and the first `)`, trimmed.
///
/// Returns an empty string when either delimiter is missing or the closing
/// parenthesis comes first.
pub fn parse_section(text: &str) -> String {
    match (text.find('('), text.find(')')) {
        (Some(open), Some(close)) if open < close => text[open + 1..close].trim().to_string(),
        _ => String::new(),
    }
}

/// Classify the cell under `slot` in `row`.
pub fn classify_cell(row: &RowData, slot: &TimeSlot, labels: &[Label]) -> ScheduleEntry {
    let cell = row.cell(slot.column);
    let text = cell.and_then(CellData::text);
    let key = ColorKey::of_cell(cell);

    ScheduleEntry {
        slot: slot.text.clone(),
        text: text.map(str::to_string),
        label: find_label(labels, &key).map(|label| label.name.clone()),
        venue: row.leading_text().map(str::to_string),
        is_misc: text.is_some_and(is_misc),
        is_lab: text.is_some_and(is_lab),
        section: text.map(parse_section).unwrap_or_default(),
    }
}

fn classify_rows(rows: &[RowData], slots: &[TimeSlot], labels: &[Label]) -> Vec<ScheduleEntry> {
    rows.iter()
        .flat_map(|row| slots.iter().map(move |slot| classify_cell(row, slot, labels)))
        .collect()
}

/// Lecture rows sit between the lecture header and the lab header; lab rows
/// follow the lab header. Without a lab header every row after the lecture
/// header is a lecture row.
fn split_rows(rows: &[RowData], lab_header: Option<usize>) -> (&[RowData], &[RowData]) {
    let lecture_end = lab_header.unwrap_or(rows.len()).min(rows.len());
    let lectures = rows.get(FIRST_LECTURE_ROW..lecture_end).unwrap_or(&[]);
    let labs = lab_header
        .and_then(|index| rows.get(index + 1..))
        .unwrap_or(&[]);
    (lectures, labs)
}

/// Classify every lecture and lab cell of a weekday tab.
pub fn classify_day(sheet: &Sheet, slots: &DaySlots, labels: &[Label]) -> DaySchedule {
    let (lecture_rows, lab_rows) = split_rows(sheet.rows(), slots.lab_header);

    let classes = classify_rows(lecture_rows, &slots.lectures, labels);
    let labs = classify_rows(lab_rows, &slots.labs, labels);
    let miscs = classes
        .iter()
        .chain(labs.iter())
        .filter(|entry| entry.is_misc)
        .cloned()
        .collect();

    debug!(
        lecture_rows = lecture_rows.len(),
        lab_rows = lab_rows.len(),
        classes = classes.len(),
        labs = labs.len(),
        "Classified day grid"
    );

    DaySchedule {
        classes,
        labs,
        miscs,
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod grid_tests;
