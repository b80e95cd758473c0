//! Spreadsheet to timetable transformation.
//!
//! Pure and synchronous: the same spreadsheet always yields the same
//! timetable. Each weekday tab is classified independently and the results
//! are combined afterwards.

use std::collections::BTreeMap;

use tracing::{info, warn};

use super::grid::classify_day;
use super::legend::extract_labels;
use super::sections::{bucket_label, derive_sections};
use super::time_slots::extract_day_slots;
use crate::models::{ClassLabel, Day, LabLabel, Spreadsheet, Timetable};

/// Tab holding the color legend in its top rows.
pub const LEGEND_SHEET_INDEX: usize = 1;

/// Tab of the first weekday; the following tabs are the remaining weekdays in order.
pub const FIRST_DAY_SHEET_INDEX: usize = 1;

pub fn build_timetable(spreadsheet: &Spreadsheet) -> Timetable {
    let labels = match spreadsheet.sheets.get(LEGEND_SHEET_INDEX) {
        Some(sheet) => extract_labels(sheet),
        None => {
            warn!(
                sheets = spreadsheet.sheets.len(),
                "Legend tab missing, entries will have no label"
            );
            Vec::new()
        }
    };

    let mut timetable = Timetable::default();

    let day_sheets = spreadsheet.sheets.iter().skip(FIRST_DAY_SHEET_INDEX);
    for (day, sheet) in Day::ALL.into_iter().zip(day_sheets) {
        let slots = extract_day_slots(sheet);
        let schedule = classify_day(sheet, &slots, &labels);

        timetable.time_slots.insert(day, slots.lectures);
        timetable.lab_time_slots.insert(day, slots.labs);
        timetable.all_classes.insert(day, schedule.classes);
        timetable.all_labs.insert(day, schedule.labs);
        timetable.miscs.insert(day, schedule.miscs);
    }

    let sections = derive_sections(timetable.all_classes.values());

    timetable.classes = labels
        .iter()
        .map(|label| ClassLabel {
            label: label.clone(),
            classes: bucket_label(label, &sections, &timetable.all_classes),
        })
        .collect();
    timetable.labs = labels
        .iter()
        .map(|label| LabLabel {
            label: label.clone(),
            labs: bucket_label(label, &sections, &timetable.all_labs),
        })
        .collect();
    timetable.sections = sections;

    info!(
        labels = labels.len(),
        days = timetable.all_classes.len(),
        sections = timetable.sections.len(),
        classes = count_entries(&timetable.all_classes),
        labs = count_entries(&timetable.all_labs),
        "Built timetable"
    );

    timetable
}

fn count_entries<T>(per_day: &BTreeMap<Day, Vec<T>>) -> usize {
    per_day.values().map(Vec::len).sum()
}

#[cfg(test)]
#[path = "timetable_tests.rs"]
mod timetable_tests;
