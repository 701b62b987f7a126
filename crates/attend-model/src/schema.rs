//! Canonical schema and header alias table.
//!
//! Source exports name the same field in many ways. Each [`ColumnRole`]
//! carries the fixed, case-sensitive list of header names accepted for it and
//! the canonical column name it is renamed to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical attendee identifier column.
pub const COL_ATTENDEE_ID: &str = "attendee_id";
/// Canonical category column.
pub const COL_CATEGORY: &str = "category";
/// Canonical check-in timestamp column.
pub const COL_CHECKIN_TIME: &str = "checkin_time";
/// Derived no-show flag column (merged set only).
pub const COL_NO_SHOW: &str = "no_show";

const ATTENDEE_ID_ALIASES: &[&str] = &["Attendee_ID", "ID", "AttendeeId", "attendee_id", "id"];
const CATEGORY_ALIASES: &[&str] = &["Category", "Type", "Role", "category", "type", "role"];
const CHECKIN_TIME_ALIASES: &[&str] = &[
    "Checkin_DateTime",
    "CheckinTime",
    "Checkin",
    "Check_in",
    "checkin_datetime",
    "checkin",
    "time",
    "check_in",
];

/// A canonical field that source columns are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Attendee identifier. Mandatory.
    AttendeeId,
    /// Attendee category (student, sponsor, guest...). Optional.
    Category,
    /// Check-in timestamp. Optional.
    CheckinTime,
}

impl ColumnRole {
    /// All roles in detection order.
    pub const ALL: [ColumnRole; 3] = [
        ColumnRole::AttendeeId,
        ColumnRole::Category,
        ColumnRole::CheckinTime,
    ];

    /// Accepted source header names for this role.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ColumnRole::AttendeeId => ATTENDEE_ID_ALIASES,
            ColumnRole::Category => CATEGORY_ALIASES,
            ColumnRole::CheckinTime => CHECKIN_TIME_ALIASES,
        }
    }

    /// Column name used after normalization.
    pub fn canonical_name(self) -> &'static str {
        match self {
            ColumnRole::AttendeeId => COL_ATTENDEE_ID,
            ColumnRole::Category => COL_CATEGORY,
            ColumnRole::CheckinTime => COL_CHECKIN_TIME,
        }
    }

    /// Whether a source without this role cannot be loaded at all.
    pub fn is_required(self) -> bool {
        matches!(self, ColumnRole::AttendeeId)
    }

    /// Exact, case-sensitive alias match.
    pub fn accepts(self, header: &str) -> bool {
        self.aliases().contains(&header)
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnRole::AttendeeId => "attendee ID",
            ColumnRole::Category => "category",
            ColumnRole::CheckinTime => "check-in",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
