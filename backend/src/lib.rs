//! # campus-feed
//!
//! Backend for the university companion app.
//!
//! This crate aggregates the faculty directory from the university intranet
//! and reshapes the color-coded timetable spreadsheet into a structured
//! schedule. Both are exposed as a REST API via Axum.
//!
//! ## Features
//!
//! - **Faculty Directory**: Parallel department fetches with photos inlined as data URIs
//! - **Timetable**: Legend, time-slot and grid extraction from spreadsheet grid data
//! - **Sections**: Per-label, per-section, per-day buckets of classes and labs
//! - **HTTP API**: `/teachers`, `/data` and `/health`
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Spreadsheet payload, faculty records and timetable types
//! - [`services`]: Aggregation and transformation logic
//! - [`sources`]: Upstream API access behind async traits
//! - [`config`]: File and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Every request re-fetches its upstream data; nothing is cached between requests.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod sources;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{Error, Result};
