//! Error types for event data ingestion.

use std::path::PathBuf;

use attend_model::ColumnRole;
use thiserror::Error;

/// Errors that abort a load.
///
/// Conditions a load can recover from (missing optional columns, bad
/// timestamps, absent files in the default mode) are reported as
/// [`attend_model::LoadWarning`] values instead.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Schema Errors ===
    /// None of the accepted header names for a mandatory role is present.
    #[error("no {role} column found in {found:?}; expected one of {aliases:?}")]
    MissingRequiredColumn {
        role: ColumnRole,
        aliases: Vec<&'static str>,
        found: Vec<String>,
    },

    // === File System Errors ===
    /// Source file does not exist (only raised when missing sources are fatal).
    #[error("CSV file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    pub(crate) fn missing_required(role: ColumnRole, found: &[String]) -> Self {
        Self::MissingRequiredColumn {
            role,
            aliases: role.aliases().to_vec(),
            found: found.to_vec(),
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_column_lists_aliases() {
        let err = IngestError::missing_required(
            ColumnRole::AttendeeId,
            &["Name".to_string(), "Category".to_string()],
        );
        let message = err.to_string();
        assert!(message.starts_with("no attendee ID column found"));
        assert!(message.contains("\"Attendee_ID\""));
        assert!(message.contains("\"AttendeeId\""));
        assert!(message.contains("\"Name\""));
    }

    #[test]
    fn test_error_display() {
        let err = IngestError::SourceNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
