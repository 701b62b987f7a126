use attend_model::AttendanceSet;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::metrics::{
    ArrivalDistribution, AttendanceRate, CategoryBreakdown, NoShowRate,
    arrival_time_distribution, attendance_rate, average_arrival_time, category_breakdown,
    no_show_rate,
};

/// Every metric for one merged set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub attendance: AttendanceRate,
    pub no_shows: NoShowRate,
    pub categories: CategoryBreakdown,
    pub arrivals_by_hour: ArrivalDistribution,
    pub average_arrival: Option<NaiveDateTime>,
}

impl EventSummary {
    pub fn from_set(set: &AttendanceSet) -> Self {
        Self {
            attendance: attendance_rate(set),
            no_shows: no_show_rate(set),
            categories: category_breakdown(set),
            arrivals_by_hour: arrival_time_distribution(set),
            average_arrival: average_arrival_time(set),
        }
    }
}
