//! Column normalization.
//!
//! Maps arbitrary source headers onto the canonical schema using the alias
//! table on [`ColumnRole`]. Selection walks the source columns in file
//! order and takes the first one found in a role's alias set.

use attend_model::{ColumnRole, LoadWarning};
use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};

/// Source column selected for each canonical role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub attendee_id: String,
    pub category: Option<String>,
    pub checkin_time: Option<String>,
}

impl ColumnMapping {
    /// Source column selected for `role`, if any.
    pub fn source_for(&self, role: ColumnRole) -> Option<&str> {
        match role {
            ColumnRole::AttendeeId => Some(self.attendee_id.as_str()),
            ColumnRole::Category => self.category.as_deref(),
            ColumnRole::CheckinTime => self.checkin_time.as_deref(),
        }
    }

    pub fn has(&self, role: ColumnRole) -> bool {
        self.source_for(role).is_some()
    }

    /// Optional roles with no matching source column.
    pub fn missing_optional(&self) -> Vec<ColumnRole> {
        ColumnRole::ALL
            .into_iter()
            .filter(|role| !role.is_required() && !self.has(*role))
            .collect()
    }
}

/// A renamed copy of a source frame.
#[derive(Debug, Clone)]
pub struct NormalizedFrame {
    /// Frame with selected columns renamed to their canonical names.
    pub frame: DataFrame,
    pub mapping: ColumnMapping,
    /// One warning per missing optional role.
    pub warnings: Vec<LoadWarning>,
}

impl NormalizedFrame {
    /// The missing-column warning for `role`, if one was raised.
    pub fn warning_for(&self, role: ColumnRole) -> Option<&LoadWarning> {
        self.warnings.iter().find(|warning| {
            matches!(warning, LoadWarning::MissingOptionalColumn { role: r, .. } if *r == role)
        })
    }
}

/// Finds the first source column (in file order) accepted for `role`.
pub fn detect_column(columns: &[String], role: ColumnRole) -> Option<&str> {
    columns
        .iter()
        .map(String::as_str)
        .find(|column| role.accepts(column))
}

/// Selects a source column for every role.
///
/// # Errors
///
/// Returns [`IngestError::MissingRequiredColumn`] when no identifier column
/// is present.
pub fn detect_columns(columns: &[String]) -> Result<ColumnMapping> {
    let attendee_id = detect_column(columns, ColumnRole::AttendeeId)
        .ok_or_else(|| IngestError::missing_required(ColumnRole::AttendeeId, columns))?;
    Ok(ColumnMapping {
        attendee_id: attendee_id.to_string(),
        category: detect_column(columns, ColumnRole::Category).map(str::to_string),
        checkin_time: detect_column(columns, ColumnRole::CheckinTime).map(str::to_string),
    })
}

/// Renames the detected columns of `df` to their canonical names.
///
/// The input frame is left untouched. A column that already carries a
/// canonical name but was not selected for that role is dropped, so the
/// canonical name always refers to the selected column.
pub fn normalize_columns(df: &DataFrame) -> Result<NormalizedFrame> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mapping = detect_columns(&columns)?;

    let mut frame = df.clone();
    for role in ColumnRole::ALL {
        let Some(source) = mapping.source_for(role) else {
            continue;
        };
        let canonical = role.canonical_name();
        if source == canonical {
            continue;
        }
        if frame.get_column_index(canonical).is_some() {
            frame = frame.drop(canonical)?;
        }
        frame.rename(source, canonical.into())?;
    }

    let warnings: Vec<LoadWarning> = mapping
        .missing_optional()
        .into_iter()
        .map(|role| LoadWarning::MissingOptionalColumn {
            role,
            aliases: role.aliases().to_vec(),
        })
        .collect();
    for warning in &warnings {
        tracing::debug!(%warning, "optional column missing");
    }

    Ok(NormalizedFrame {
        frame,
        mapping,
        warnings,
    })
}
