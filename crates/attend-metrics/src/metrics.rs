//! Descriptive metrics over the merged attendance set.

use std::collections::BTreeMap;

use attend_model::AttendanceSet;
use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::Serialize;

/// Share of registered attendees who checked in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttendanceRate {
    /// `attended / total`, or 0 when nobody is registered.
    pub rate: f64,
    pub total: usize,
    pub attended: usize,
}

/// Share of registered attendees who never checked in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoShowRate {
    /// `no_shows / total`, or 0 when nobody is registered.
    pub rate: f64,
    pub no_shows: usize,
}

/// Per-category attendance counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub shows: usize,
    pub no_shows: usize,
}

/// Category -> counts, ordered by category name.
pub type CategoryBreakdown = BTreeMap<String, CategoryCounts>;

/// Hour of day (0-23) -> arrivals. Hours without arrivals are absent.
pub type ArrivalDistribution = BTreeMap<u32, usize>;

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

pub fn attendance_rate(set: &AttendanceSet) -> AttendanceRate {
    let total = set.len();
    let attended = set.attended().count();
    AttendanceRate {
        rate: ratio(attended, total),
        total,
        attended,
    }
}

pub fn no_show_rate(set: &AttendanceSet) -> NoShowRate {
    let no_shows = set.no_shows().count();
    NoShowRate {
        rate: ratio(no_shows, set.len()),
        no_shows,
    }
}

/// Groups the set by category. Categories absent from the data are absent
/// from the result.
pub fn category_breakdown(set: &AttendanceSet) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::new();
    for record in set {
        let counts = breakdown.entry(record.category().to_string()).or_default();
        counts.total += 1;
        if record.no_show() {
            counts.no_shows += 1;
        } else {
            counts.shows += 1;
        }
    }
    breakdown
}

/// Counts check-ins per hour of day, ascending by hour.
pub fn arrival_time_distribution(set: &AttendanceSet) -> ArrivalDistribution {
    let mut distribution = ArrivalDistribution::new();
    for time in set.attended().filter_map(|record| record.checkin_time()) {
        *distribution.entry(time.hour()).or_default() += 1;
    }
    distribution
}

/// Mean check-in time of attendees who checked in, or `None` when nobody did.
///
/// Computed at microsecond precision.
pub fn average_arrival_time(set: &AttendanceSet) -> Option<NaiveDateTime> {
    let micros: Vec<i64> = set
        .attended()
        .filter_map(|record| record.checkin_time())
        .map(|time| time.and_utc().timestamp_micros())
        .collect();
    if micros.is_empty() {
        return None;
    }
    let sum: i128 = micros.iter().map(|&value| i128::from(value)).sum();
    let mean = i64::try_from(sum / micros.len() as i128).ok()?;
    DateTime::from_timestamp_micros(mean).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use attend_model::{AttendeeId, AttendeeRecord};
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn record(id: &str, category: &str, time: Option<NaiveDateTime>) -> AttendeeRecord {
        AttendeeRecord::new(AttendeeId::new(id).unwrap(), category, time)
    }

    fn sample() -> AttendanceSet {
        AttendanceSet::new(vec![
            record("A1", "student", Some(at(9, 0))),
            record("A2", "guest", None),
            record("A3", "student", Some(at(9, 40))),
            record("A4", "sponsor", Some(at(14, 20))),
        ])
    }

    #[test]
    fn attendance_rate_counts_checkins() {
        let rate = attendance_rate(&sample());
        assert_eq!(rate.total, 4);
        assert_eq!(rate.attended, 3);
        assert!((rate.rate - 0.75).abs() < 1e-12);
    }

    #[test]
    fn no_show_rate_counts_missing_checkins() {
        let rate = no_show_rate(&sample());
        assert_eq!(rate.no_shows, 1);
        assert!((rate.rate - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rates_are_zero_for_empty_set() {
        let empty = AttendanceSet::default();
        assert_eq!(
            attendance_rate(&empty),
            AttendanceRate {
                rate: 0.0,
                total: 0,
                attended: 0
            }
        );
        assert_eq!(
            no_show_rate(&empty),
            NoShowRate {
                rate: 0.0,
                no_shows: 0
            }
        );
    }

    #[test]
    fn breakdown_groups_by_category() {
        let breakdown = category_breakdown(&sample());
        let keys: Vec<&str> = breakdown.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["guest", "sponsor", "student"]);
        assert_eq!(
            breakdown["student"],
            CategoryCounts {
                total: 2,
                shows: 2,
                no_shows: 0
            }
        );
        assert_eq!(
            breakdown["guest"],
            CategoryCounts {
                total: 1,
                shows: 0,
                no_shows: 1
            }
        );
    }

    #[test]
    fn arrival_distribution_is_sparse_and_sorted() {
        let set = AttendanceSet::new(vec![
            record("A1", "guest", Some(at(14, 5))),
            record("A2", "guest", Some(at(9, 10))),
            record("A3", "guest", Some(at(9, 50))),
            record("A4", "guest", None),
        ]);
        let distribution = arrival_time_distribution(&set);
        assert_eq!(distribution, BTreeMap::from([(9, 2), (14, 1)]));
        assert_eq!(distribution.keys().copied().collect::<Vec<_>>(), vec![9, 14]);
    }

    #[test]
    fn average_arrival_is_mean_of_checkins() {
        // (09:00 + 09:40 + 14:20) / 3 = 11:00
        assert_eq!(average_arrival_time(&sample()), Some(at(11, 0)));
    }

    #[test]
    fn average_arrival_is_none_without_checkins() {
        let set = AttendanceSet::new(vec![
            record("A1", "student", None),
            record("A2", "guest", None),
        ]);
        assert_eq!(average_arrival_time(&set), None);
        assert_eq!(average_arrival_time(&AttendanceSet::default()), None);
    }
}
