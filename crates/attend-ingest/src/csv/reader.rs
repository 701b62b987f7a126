//! CSV file reading.

use std::path::Path;

use attend_common::normalize_label;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Whether a source can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    /// File exists and has content.
    Present,
    /// File does not exist.
    Missing,
    /// File exists but is zero bytes long.
    Empty,
}

/// Checks a source path without reading it.
pub fn source_status(path: &Path) -> Result<SourceStatus> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.len() == 0 => Ok(SourceStatus::Empty),
        Ok(_) => Ok(SourceStatus::Present),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SourceStatus::Missing),
        Err(e) => Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Reads a CSV file into a Polars DataFrame.
///
/// The first row is the header. Every column is read as text so identifiers
/// like `007` survive and timestamp parsing stays under our control. Header
/// labels are trimmed of whitespace and a UTF-8 BOM.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let labels: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_label(name.as_str()))
        .collect();
    df.set_column_names(labels.iter().map(String::as_str))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv"
    );
    Ok(df)
}
