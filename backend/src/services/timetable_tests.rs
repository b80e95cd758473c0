use super::*;
use crate::models::{CellData, Color, RowData, Sheet};

const CS: Color = Color {
    red: Some(0.85),
    green: Some(0.92),
    blue: Some(0.83),
    alpha: None,
};
const EE: Color = Color {
    red: Some(1.0),
    green: Some(0.95),
    blue: Some(0.8),
    alpha: None,
};

fn cells(texts: &[&str]) -> Vec<CellData> {
    texts.iter().map(|t| CellData::with_text(*t)).collect()
}

fn legend_row(first: &str, labels: Vec<CellData>) -> RowData {
    let mut values = cells(&[first, "", "", ""]);
    values.extend(labels);
    RowData::from_cells(values)
}

/// Weekday tab: legend block on top, lecture header at row 4, lab header below.
fn day_sheet(day: &str, lecture_cells: Vec<CellData>, lab_cells: Vec<CellData>) -> Sheet {
    let mut lecture_row = vec![CellData::with_text("R-101")];
    lecture_row.extend(lecture_cells);
    let mut lab_row = vec![CellData::with_text("Lab-1")];
    lab_row.extend(lab_cells);

    Sheet::from_rows(vec![
        legend_row(
            day,
            vec![
                CellData::with_text("BS(CS)").with_background(CS),
                CellData::with_text("BS(EE)").with_background(EE),
            ],
        ),
        legend_row("", vec![]),
        legend_row("", vec![]),
        legend_row("", vec![]),
        RowData::from_cells(cells(&["Venue", "8:00-8:50", "", "10:00-10:50"])),
        RowData::from_cells(lecture_row),
        RowData::from_cells(cells(&["Lab", "8:30-11:15"])),
        RowData::from_cells(lab_row),
    ])
    .with_title(day)
}

fn spreadsheet() -> Spreadsheet {
    Spreadsheet::from_sheets(vec![
        Sheet::default().with_title("Cover"),
        day_sheet(
            "Monday",
            vec![
                CellData::with_text("DS (BCS-3A)").with_background(CS),
                CellData::empty(),
                CellData::with_text("FSM"),
            ],
            vec![CellData::with_text("DS Lab (BCS-3A)").with_background(CS)],
        ),
        day_sheet(
            "Tuesday",
            vec![
                CellData::with_text("Circuits (BEE-1A)").with_background(EE),
                CellData::empty(),
                CellData::with_text("DS (BCS-3A)").with_background(CS),
            ],
            vec![CellData::empty()],
        ),
    ])
}

#[test]
fn test_build_timetable_days_and_slots() {
    let timetable = build_timetable(&spreadsheet());

    assert_eq!(
        timetable.time_slots.keys().copied().collect::<Vec<_>>(),
        vec![Day::Monday, Day::Tuesday]
    );
    let monday_slots = &timetable.time_slots[&Day::Monday];
    assert_eq!(monday_slots.len(), 2);
    assert_eq!(monday_slots[0].column, 1);
    assert_eq!(monday_slots[1].column, 3);
    assert_eq!(timetable.lab_time_slots[&Day::Monday][0].text, "8:30-11:15");
}

#[test]
fn test_build_timetable_labels_from_legend() {
    let timetable = build_timetable(&spreadsheet());

    let names: Vec<&str> = timetable.classes.iter().map(|c| c.label.name.as_str()).collect();
    assert_eq!(names, vec!["BS(CS)", "BS(EE)"]);
    let lab_names: Vec<&str> = timetable.labs.iter().map(|l| l.label.name.as_str()).collect();
    assert_eq!(lab_names, names);
}

#[test]
fn test_build_timetable_sections_and_buckets() {
    let timetable = build_timetable(&spreadsheet());

    assert_eq!(timetable.sections.len(), 2);
    assert_eq!(timetable.sections[0].section, "BCS-3A");
    assert_eq!(timetable.sections[0].label.as_deref(), Some("BS(CS)"));
    assert_eq!(timetable.sections[1].section, "BEE-1A");

    let cs = &timetable.classes[0].classes["BCS-3A"];
    assert_eq!(cs[&Day::Monday].len(), 1);
    assert_eq!(cs[&Day::Monday][0].slot, "8:00-8:50");
    assert_eq!(cs[&Day::Tuesday].len(), 1);
    assert_eq!(cs[&Day::Tuesday][0].slot, "10:00-10:50");

    let ee = &timetable.classes[1].classes;
    assert_eq!(ee.keys().collect::<Vec<_>>(), vec!["BEE-1A"]);

    let cs_labs = &timetable.labs[0].labs["BCS-3A"];
    assert_eq!(cs_labs[&Day::Monday].len(), 1);
    assert!(cs_labs[&Day::Monday][0].is_lab);
    assert!(cs_labs[&Day::Tuesday].is_empty());
}

#[test]
fn test_build_timetable_miscs() {
    let timetable = build_timetable(&spreadsheet());

    assert_eq!(timetable.miscs[&Day::Monday].len(), 1);
    assert_eq!(timetable.miscs[&Day::Monday][0].text.as_deref(), Some("FSM"));
    assert!(timetable.miscs[&Day::Tuesday].is_empty());
}

#[test]
fn test_build_timetable_is_idempotent() {
    let doc = spreadsheet();
    let first = build_timetable(&doc);
    let second = build_timetable(&doc);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_build_timetable_json_field_names() {
    let value = serde_json::to_value(build_timetable(&spreadsheet())).unwrap();

    for key in [
        "timeSlots",
        "labTimeSlots",
        "allClasses",
        "allLabs",
        "miscs",
        "sections",
        "classes",
        "labs",
    ] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }

    let entry = &value["allClasses"]["Monday"][0];
    assert_eq!(entry["formattedValue"], "DS (BCS-3A)");
    assert_eq!(entry["label"], "BS(CS)");
    assert_eq!(entry["venue"], "R-101");
    assert_eq!(entry["isMisc"], false);
    assert_eq!(entry["isLab"], false);
    assert_eq!(entry["section"], "BCS-3A");
    assert_eq!(value["timeSlots"]["Monday"][1]["startIndex"], 3);
    assert_eq!(value["classes"][0]["bgID"], "red:0.85,green:0.92,blue:0.83");
}

#[test]
fn test_build_timetable_empty_spreadsheet() {
    let timetable = build_timetable(&Spreadsheet::default());
    assert_eq!(timetable, Timetable::default());
}

#[test]
fn test_build_timetable_ignores_extra_tabs() {
    let mut doc = spreadsheet();
    for _ in 0..6 {
        doc.sheets.push(day_sheet("Extra", vec![], vec![]));
    }

    let timetable = build_timetable(&doc);
    assert_eq!(timetable.all_classes.len(), Day::ALL.len());
}
