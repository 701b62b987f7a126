//! Shared utilities for attendance analytics crates.
//!
//! This crate provides common utilities used across the workspace,
//! including Polars DataFrame helpers, cell/label normalization and the
//! tolerant check-in timestamp parser.

pub mod datetime;
pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use datetime::parse_or_null;
pub use polars::{any_to_string, normalize_cell, normalize_label, string_column_values};
