//! Per-source cleanup.
//!
//! Both transforms are idempotent: running one on its own output returns
//! that output unchanged.

use attend_model::{CATEGORY_UNKNOWN, CheckinRecord, RegistrationRecord};

use crate::dedupe::dedupe_by_key;

/// Deduplicates registrations by attendee (first occurrence wins) and fills
/// blank categories with [`CATEGORY_UNKNOWN`].
pub fn clean_registration(records: Vec<RegistrationRecord>) -> Vec<RegistrationRecord> {
    dedupe_by_key(records, |record| record.attendee_id.clone())
        .into_iter()
        .map(|mut record| {
            if record.category.is_none() {
                record.category = Some(CATEGORY_UNKNOWN.to_string());
            }
            record
        })
        .collect()
}

/// Deduplicates check-ins by attendee, keeping the first occurrence even
/// when a later duplicate carries a time.
///
/// Header trimming and timestamp coercion already happened at load time;
/// [`CheckinRecord::checkin_time`] can only hold a parsed timestamp or null.
pub fn clean_checkin(records: Vec<CheckinRecord>) -> Vec<CheckinRecord> {
    dedupe_by_key(records, |record| record.attendee_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use attend_model::AttendeeId;
    use chrono::NaiveDate;

    fn registration(id: &str, category: Option<&str>) -> RegistrationRecord {
        RegistrationRecord::new(AttendeeId::new(id).unwrap(), category.map(str::to_string))
    }

    #[test]
    fn duplicate_registration_keeps_first_category() {
        let cleaned = clean_registration(vec![
            registration("A1", Some("student")),
            registration("A1", Some("sponsor")),
        ]);
        assert_eq!(cleaned, vec![registration("A1", Some("student"))]);
    }

    #[test]
    fn blank_category_becomes_unknown() {
        let cleaned = clean_registration(vec![registration("A1", None)]);
        assert_eq!(cleaned[0].category.as_deref(), Some("Unknown"));
    }

    #[test]
    fn duplicate_checkin_keeps_first_even_if_null() {
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let id = AttendeeId::new("A1").unwrap();
        let cleaned = clean_checkin(vec![
            CheckinRecord::new(id.clone(), None),
            CheckinRecord::new(id.clone(), Some(time)),
        ]);
        assert_eq!(cleaned, vec![CheckinRecord::new(id, None)]);
    }
}
