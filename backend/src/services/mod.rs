//! Service layer for business logic and orchestration.
//!
//! Services sit between the upstream sources and the HTTP handlers. The
//! timetable services are pure transformations over a fetched spreadsheet;
//! the faculty service drives the concurrent directory and photo fetches.

pub mod faculty;

pub mod grid;
pub mod legend;
pub mod sections;
pub mod time_slots;
pub mod timetable;

pub use faculty::{aggregate_faculty, encode_image};
pub use timetable::build_timetable;
