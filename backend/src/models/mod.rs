//! Domain models shared by the services and the HTTP layer.

pub mod faculty;
pub mod sheets;
pub mod timetable;

pub use faculty::FacultyRecord;
pub use sheets::{CellData, CellFormat, Color, GridData, RowData, Sheet, Spreadsheet};
pub use timetable::{
    ClassLabel, ColorKey, Day, DaySchedule, LabLabel, Label, ScheduleEntry, Section,
    SectionBuckets, SectionSchedule, TimeSlot, Timetable,
};
