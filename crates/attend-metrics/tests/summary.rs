//! Tests for the bundled event summary and metric invariants.

use attend_metrics::{
    ChartSet, EventSummary, attendance_rate, category_breakdown, no_show_rate,
};
use attend_model::{AttendanceSet, AttendeeId, AttendeeRecord};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn record(id: &str, category: &str, time: Option<NaiveDateTime>) -> AttendeeRecord {
    AttendeeRecord::new(AttendeeId::new(id).unwrap(), category, time)
}

fn event() -> AttendanceSet {
    AttendanceSet::new(vec![
        record("A1", "student", Some(at(9, 0))),
        record("A2", "guest", None),
        record("A3", "student", Some(at(9, 30))),
        record("A4", "sponsor", Some(at(14, 0))),
    ])
}

#[test]
fn summary_snapshot() {
    let summary = EventSummary::from_set(&event());
    insta::assert_json_snapshot!(serde_json::to_value(&summary).unwrap(), @r#"
    {
      "arrivals_by_hour": {
        "14": 1,
        "9": 2
      },
      "attendance": {
        "attended": 3,
        "rate": 0.75,
        "total": 4
      },
      "average_arrival": "2024-05-01T10:50:00",
      "categories": {
        "guest": {
          "no_shows": 1,
          "shows": 0,
          "total": 1
        },
        "sponsor": {
          "no_shows": 0,
          "shows": 1,
          "total": 1
        },
        "student": {
          "no_shows": 0,
          "shows": 2,
          "total": 2
        }
      },
      "no_shows": {
        "no_shows": 1,
        "rate": 0.25
      }
    }
    "#);
}

#[test]
fn registrations_without_checkins_have_zero_attendance() {
    let set = AttendanceSet::new(vec![
        record("A1", "student", None),
        record("A2", "guest", None),
    ]);
    let summary = EventSummary::from_set(&set);
    assert_eq!(summary.attendance.rate, 0.0);
    assert_eq!(summary.attendance.total, 2);
    assert_eq!(summary.attendance.attended, 0);
    assert!(summary.arrivals_by_hour.is_empty());
    assert_eq!(summary.average_arrival, None);
}

#[test]
fn chart_set_matches_summary_counts() {
    let set = event();
    let summary = EventSummary::from_set(&set);
    let charts = ChartSet::from_set(&set);

    let no_show_total: usize = charts.no_shows_per_category.bars.iter().map(|b| b.value).sum();
    assert_eq!(no_show_total, summary.no_shows.no_shows);
    assert_eq!(charts.overall_attendance.slices[0].value, summary.attendance.attended);
    assert_eq!(charts.arrival_distribution.x_ticks.len(), 6);
    assert_eq!(charts.category_attendance.bars.len(), summary.categories.len());
}

fn set_strategy() -> impl Strategy<Value = AttendanceSet> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["student", "guest", "sponsor", "Unknown"]),
            prop::option::of((0u32..24, 0u32..60)),
        ),
        0..40,
    )
    .prop_map(|rows| {
        AttendanceSet::new(
            rows.into_iter()
                .enumerate()
                .map(|(idx, (category, time))| {
                    record(
                        &format!("A{idx}"),
                        category,
                        time.map(|(h, m)| at(h, m)),
                    )
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn rates_are_complementary(set in set_strategy()) {
        let attendance = attendance_rate(&set);
        let no_shows = no_show_rate(&set);
        prop_assert_eq!(attendance.attended + no_shows.no_shows, attendance.total);
        if attendance.total > 0 {
            prop_assert!((attendance.rate + no_shows.rate - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(attendance.rate, 0.0);
            prop_assert_eq!(no_shows.rate, 0.0);
        }
    }

    #[test]
    fn breakdown_partitions_the_set(set in set_strategy()) {
        let breakdown = category_breakdown(&set);
        let total: usize = breakdown.values().map(|c| c.total).sum();
        prop_assert_eq!(total, set.len());
        for counts in breakdown.values() {
            prop_assert_eq!(counts.shows + counts.no_shows, counts.total);
            prop_assert!(counts.total > 0);
        }
    }

    #[test]
    fn arrivals_count_only_attended(set in set_strategy()) {
        let summary = EventSummary::from_set(&set);
        let arrivals: usize = summary.arrivals_by_hour.values().sum();
        prop_assert_eq!(arrivals, summary.attendance.attended);
        prop_assert!(summary.arrivals_by_hour.keys().all(|&hour| hour < 24));
        prop_assert_eq!(summary.average_arrival.is_some(), summary.attendance.attended > 0);
    }
}
