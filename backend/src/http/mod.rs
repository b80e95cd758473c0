//! HTTP server module for campus-feed.
//!
//! This module provides an axum-based HTTP server that exposes the faculty
//! directory and the timetable as a REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Faculty aggregation                                    │
//! │  - Spreadsheet to timetable transformation                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Sources (sources/)                                       │
//! │  - HttpFacultySource / HttpSpreadsheetSource              │
//! │  - LocalFacultySource / LocalSpreadsheetSource            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
