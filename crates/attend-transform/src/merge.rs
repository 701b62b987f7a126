//! Registration / check-in merge.

use std::collections::{HashMap, HashSet};

use attend_model::{AttendanceSet, AttendeeId, AttendeeRecord, CheckinRecord, RegistrationRecord};
use chrono::NaiveDateTime;
use tracing::debug;

/// Left-joins check-ins onto registrations by attendee identifier.
///
/// Every registered attendee appears exactly once, in registration order.
/// Only the check-in time is taken from the check-in side; check-ins for
/// unregistered identifiers are dropped. When either side repeats an
/// identifier its first occurrence is used. The no-show flag is derived
/// from the resulting check-in time.
pub fn merge(registrations: &[RegistrationRecord], checkins: &[CheckinRecord]) -> AttendanceSet {
    let mut times: HashMap<&AttendeeId, Option<NaiveDateTime>> =
        HashMap::with_capacity(checkins.len());
    for checkin in checkins {
        times
            .entry(&checkin.attendee_id)
            .or_insert(checkin.checkin_time);
    }

    let mut seen: HashSet<&AttendeeId> = HashSet::with_capacity(registrations.len());
    let records: Vec<AttendeeRecord> = registrations
        .iter()
        .filter(|registration| seen.insert(&registration.attendee_id))
        .map(|registration| {
            let checkin_time = times.get(&registration.attendee_id).copied().flatten();
            AttendeeRecord::new(
                registration.attendee_id.clone(),
                registration.category_or_unknown(),
                checkin_time,
            )
        })
        .collect();

    let unmatched = times.keys().filter(|id| !seen.contains(**id)).count();
    debug!(
        registrations = records.len(),
        checkins = checkins.len(),
        unregistered_checkins = unmatched,
        "merged record sets"
    );
    AttendanceSet::new(records)
}
