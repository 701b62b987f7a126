//! Non-fatal conditions raised while loading a source.
//!
//! A load that hits one of these still returns records; the warning is both
//! logged and handed back so callers can show it next to the results.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::{AttendeeId, ColumnRole};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// The source file does not exist; an empty record set was used.
    SourceNotFound { path: PathBuf },
    /// The source file has no content; an empty record set was used.
    EmptySource { path: PathBuf },
    /// An optional column is absent; its default is substituted.
    MissingOptionalColumn {
        role: ColumnRole,
        aliases: Vec<&'static str>,
    },
    /// A check-in value could not be parsed and was treated as no check-in.
    UnparseableTimestamp { attendee_id: AttendeeId, value: String },
    /// A row had no attendee identifier and was skipped.
    BlankIdentifier { path: PathBuf, row: usize },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::SourceNotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            LoadWarning::EmptySource { path } => write!(f, "file is empty: {}", path.display()),
            LoadWarning::MissingOptionalColumn { role, aliases } => match role {
                ColumnRole::CheckinTime => write!(
                    f,
                    "no check-in column found (expected one of {aliases:?}); check-in data will be empty"
                ),
                _ => write!(
                    f,
                    "no {role} column found (expected one of {aliases:?}); defaulting to Unknown"
                ),
            },
            LoadWarning::UnparseableTimestamp { attendee_id, value } => write!(
                f,
                "unparseable check-in time {value:?} for attendee {attendee_id}; counted as no-show"
            ),
            LoadWarning::BlankIdentifier { path, row } => write!(
                f,
                "row {row} of {} has no attendee identifier and was skipped",
                path.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_message_mentions_default() {
        let warning = LoadWarning::MissingOptionalColumn {
            role: ColumnRole::Category,
            aliases: ColumnRole::Category.aliases().to_vec(),
        };
        let message = warning.to_string();
        assert!(message.starts_with("no category column found"));
        assert!(message.contains("\"Role\""));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let warning = LoadWarning::SourceNotFound {
            path: PathBuf::from("missing.csv"),
        };
        let value = serde_json::to_value(&warning).unwrap();
        assert_eq!(value["kind"], "source_not_found");
        assert_eq!(value["path"], "missing.csv");
    }
}
