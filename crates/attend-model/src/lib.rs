//! Data model for event attendance analytics.
//!
//! The canonical record shapes shared by ingestion, cleaning, merging and
//! metrics live here, together with the header alias table and the
//! non-fatal load warnings.

pub mod error;
pub mod ids;
pub mod options;
pub mod records;
pub mod schema;
pub mod warnings;

pub use error::{ModelError, Result};
pub use ids::AttendeeId;
pub use options::{LoadOptions, MissingSourceMode};
pub use records::{
    AttendanceSet, AttendeeRecord, CATEGORY_UNKNOWN, CheckinRecord, RegistrationRecord,
};
pub use schema::{COL_ATTENDEE_ID, COL_CATEGORY, COL_CHECKIN_TIME, COL_NO_SHOW, ColumnRole};
pub use warnings::LoadWarning;
