//! Registration, check-in and merged attendance records.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::AttendeeId;

/// Category assigned when the source has no category column or a blank cell.
pub const CATEGORY_UNKNOWN: &str = "Unknown";

/// One row of the registration source, projected to the canonical fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    pub attendee_id: AttendeeId,
    /// `None` until the cleaner substitutes [`CATEGORY_UNKNOWN`].
    pub category: Option<String>,
}

impl RegistrationRecord {
    pub fn new(attendee_id: AttendeeId, category: Option<String>) -> Self {
        Self {
            attendee_id,
            category,
        }
    }

    /// Category with the default applied.
    pub fn category_or_unknown(&self) -> &str {
        self.category.as_deref().unwrap_or(CATEGORY_UNKNOWN)
    }
}

/// One row of the check-in source, projected to the canonical fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinRecord {
    pub attendee_id: AttendeeId,
    /// Null when absent or unparseable.
    pub checkin_time: Option<NaiveDateTime>,
}

impl CheckinRecord {
    pub fn new(attendee_id: AttendeeId, checkin_time: Option<NaiveDateTime>) -> Self {
        Self {
            attendee_id,
            checkin_time,
        }
    }
}

/// Post-merge attendance record.
///
/// `no_show` is derived in [`AttendeeRecord::new`] and cannot be set any
/// other way, so `no_show == checkin_time.is_none()` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeRecord {
    attendee_id: AttendeeId,
    category: String,
    checkin_time: Option<NaiveDateTime>,
    no_show: bool,
}

impl AttendeeRecord {
    pub fn new(
        attendee_id: AttendeeId,
        category: impl Into<String>,
        checkin_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            attendee_id,
            category: category.into(),
            no_show: checkin_time.is_none(),
            checkin_time,
        }
    }

    pub fn attendee_id(&self) -> &AttendeeId {
        &self.attendee_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn checkin_time(&self) -> Option<NaiveDateTime> {
        self.checkin_time
    }

    pub fn no_show(&self) -> bool {
        self.no_show
    }

    pub fn attended(&self) -> bool {
        !self.no_show
    }
}

/// The merged record set: one record per registered attendee.
///
/// Immutable once built; every metric reads it by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttendanceSet {
    records: Vec<AttendeeRecord>,
}

impl AttendanceSet {
    pub fn new(records: Vec<AttendeeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AttendeeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttendeeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with a check-in.
    pub fn attended(&self) -> impl Iterator<Item = &AttendeeRecord> {
        self.records.iter().filter(|record| record.attended())
    }

    /// Records without a check-in.
    pub fn no_shows(&self) -> impl Iterator<Item = &AttendeeRecord> {
        self.records.iter().filter(|record| record.no_show())
    }
}

impl<'a> IntoIterator for &'a AttendanceSet {
    type Item = &'a AttendeeRecord;
    type IntoIter = std::slice::Iter<'a, AttendeeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
