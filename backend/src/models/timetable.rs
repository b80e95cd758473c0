//! Structured timetable produced from the spreadsheet grid.
//!
//! JSON field names follow the payload the web client already consumes
//! (`formattedValue`, `startIndex`, `bgID`, `isMisc`, ...).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::sheets::{CellData, Color};

/// Teaching day. One weekday tab per variant, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background color used to join grid cells to legend labels.
///
/// Comparison is on the channel values themselves. A cell without a
/// background yields the empty key (all channels absent).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorKey {
    pub red: Option<f64>,
    pub green: Option<f64>,
    pub blue: Option<f64>,
    pub alpha: Option<f64>,
}

impl ColorKey {
    pub fn of_cell(cell: Option<&CellData>) -> Self {
        cell.and_then(CellData::background).map(Self::from).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&Color> for ColorKey {
    fn from(color: &Color) -> Self {
        Self {
            red: color.red,
            green: color.green,
            blue: color.blue,
            alpha: color.alpha,
        }
    }
}

impl fmt::Display for ColorKey {
    /// `red:0.8,blue:0.2` style; present channels only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ];
        let parts: Vec<String> = channels
            .iter()
            .filter_map(|(name, value)| value.map(|v| format!("{}:{}", name, v)))
            .collect();
        f.write_str(&parts.join(","))
    }
}

impl Serialize for ColorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A colored legend cell naming a department or course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    #[serde(rename = "bgID")]
    pub color: ColorKey,
    #[serde(rename = "label")]
    pub name: String,
}

/// Header cell of a day's lecture or lab row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "formattedValue")]
    pub text: String,
    /// Column of the slot within the row; empty header cells still count.
    #[serde(rename = "startIndex")]
    pub column: usize,
}

/// One classified grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub slot: String,
    #[serde(rename = "formattedValue", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub is_misc: bool,
    pub is_lab: bool,
    pub section: String,
}

/// Distinct (section, label) pair seen in the lecture grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Entries of one section, split by day.
pub type SectionSchedule = BTreeMap<Day, Vec<ScheduleEntry>>;

/// Section name to its per-day entries.
pub type SectionBuckets = BTreeMap<String, SectionSchedule>;

/// Legend label with the lecture entries of each of its sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassLabel {
    #[serde(flatten)]
    pub label: Label,
    pub classes: SectionBuckets,
}

/// Legend label with the lab entries of each of its sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabLabel {
    #[serde(flatten)]
    pub label: Label,
    pub labs: SectionBuckets,
}

/// Classified grid of a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub classes: Vec<ScheduleEntry>,
    pub labs: Vec<ScheduleEntry>,
    pub miscs: Vec<ScheduleEntry>,
}

/// Full response of the timetable endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub time_slots: BTreeMap<Day, Vec<TimeSlot>>,
    pub lab_time_slots: BTreeMap<Day, Vec<TimeSlot>>,
    pub all_classes: BTreeMap<Day, Vec<ScheduleEntry>>,
    pub all_labs: BTreeMap<Day, Vec<ScheduleEntry>>,
    pub miscs: BTreeMap<Day, Vec<ScheduleEntry>>,
    pub sections: Vec<Section>,
    pub classes: Vec<ClassLabel>,
    pub labs: Vec<LabLabel>,
}
