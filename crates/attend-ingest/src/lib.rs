//! Event data ingestion.
//!
//! This crate reads registration and check-in exports (CSV files) into
//! Polars DataFrames, maps their heterogeneous headers onto the canonical
//! schema, and projects them into typed records.
//!
//! # Features
//!
//! - **CSV Loading**: Read CSV files with trimmed header labels, every column as text
//! - **Column Normalization**: Detect identifier, category and check-in columns by alias
//! - **Record Loading**: Registration and check-in record sets from one or two files
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use attend_ingest::load_event_data;
//! use attend_model::LoadOptions;
//!
//! // One combined export, or a registration file plus a check-in file.
//! let sources = load_event_data(Path::new("attendees.csv"), None, &LoadOptions::default())?;
//! println!("{} registrations", sources.registrations.len());
//! ```

mod csv;
mod error;
mod loader;
mod normalize;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{SourceStatus, read_csv_frame, source_status};

// === Column Normalization ===
pub use normalize::{ColumnMapping, NormalizedFrame, detect_column, detect_columns, normalize_columns};

// === Record Loading ===
pub use loader::{
    EventSources, Loaded, load_checkin_data, load_event_data, load_registration_data,
};
