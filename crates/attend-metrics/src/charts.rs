//! Chart datasets.
//!
//! Rendering is left to whatever consumes these values (a plotting library,
//! a web dashboard, a spreadsheet). This module only decides what each of
//! the four standard attendance charts shows: series, values, axis labels,
//! and which data labels are worth drawing.

use attend_model::AttendanceSet;
use serde::Serialize;

use crate::metrics::{arrival_time_distribution, attendance_rate, category_breakdown};

const ATTENDED: &str = "Attended";
const NO_SHOWS: &str = "No-Shows";

/// One bar in a simple bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarDatum {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<BarDatum>,
    /// Explicit x-axis ticks; empty means one tick per bar.
    pub x_ticks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Share of the whole in percent, 0 when the whole is empty.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One segment of a stacked bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSegment {
    pub series: String,
    pub value: usize,
    /// Height at which this segment starts.
    pub bottom: usize,
    /// Segments below 1 are not labelled.
    pub show_label: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedBar {
    pub label: String,
    pub segments: Vec<BarSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Series names, bottom to top.
    pub series: Vec<String>,
    pub bars: Vec<StackedBar>,
}

/// The four standard attendance charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub no_shows_per_category: BarChart,
    pub overall_attendance: PieChart,
    pub arrival_distribution: BarChart,
    pub category_attendance: StackedBarChart,
}

impl ChartSet {
    pub fn from_set(set: &AttendanceSet) -> Self {
        Self {
            no_shows_per_category: no_shows_per_category(set),
            overall_attendance: overall_attendance(set),
            arrival_distribution: arrival_distribution(set),
            category_attendance: category_attendance(set),
        }
    }
}

/// Bar chart of no-shows per category.
pub fn no_shows_per_category(set: &AttendanceSet) -> BarChart {
    let bars = category_breakdown(set)
        .into_iter()
        .map(|(category, counts)| BarDatum {
            label: category,
            value: counts.no_shows,
        })
        .collect();
    BarChart {
        title: "No-Shows per Category".to_string(),
        x_label: "Category".to_string(),
        y_label: "Number of No-Shows".to_string(),
        bars,
        x_ticks: Vec::new(),
    }
}

/// Pie chart of attended vs. no-show attendees.
pub fn overall_attendance(set: &AttendanceSet) -> PieChart {
    let rate = attendance_rate(set);
    let no_shows = rate.total - rate.attended;
    let slice = |label: &str, value: usize| PieSlice {
        label: label.to_string(),
        value,
        percent: if rate.total == 0 {
            0.0
        } else {
            value as f64 * 100.0 / rate.total as f64
        },
    };
    PieChart {
        title: "Overall Attendance vs No-Shows".to_string(),
        slices: vec![slice(ATTENDED, rate.attended), slice(NO_SHOWS, no_shows)],
    }
}

/// Bar chart of check-ins per hour, ticked for every hour between the
/// earliest and latest observed arrival.
pub fn arrival_distribution(set: &AttendanceSet) -> BarChart {
    let distribution = arrival_time_distribution(set);
    let x_ticks = match (
        distribution.keys().next().copied(),
        distribution.keys().next_back().copied(),
    ) {
        (Some(first), Some(last)) => (first..=last).map(|hour| hour.to_string()).collect(),
        _ => Vec::new(),
    };
    let bars = distribution
        .into_iter()
        .map(|(hour, count)| BarDatum {
            label: hour.to_string(),
            value: count,
        })
        .collect();
    BarChart {
        title: "Check-In Time Distribution".to_string(),
        x_label: "Hour of Arrival".to_string(),
        y_label: "Number of Attendees".to_string(),
        bars,
        x_ticks,
    }
}

/// Stacked bar chart: attended at the bottom, no-shows on top, per category.
pub fn category_attendance(set: &AttendanceSet) -> StackedBarChart {
    let bars = category_breakdown(set)
        .into_iter()
        .map(|(category, counts)| StackedBar {
            label: category,
            segments: vec![
                BarSegment {
                    series: ATTENDED.to_string(),
                    value: counts.shows,
                    bottom: 0,
                    show_label: counts.shows >= 1,
                },
                BarSegment {
                    series: NO_SHOWS.to_string(),
                    value: counts.no_shows,
                    bottom: counts.shows,
                    show_label: counts.no_shows >= 1,
                },
            ],
        })
        .collect();
    StackedBarChart {
        title: "Attendance vs No-Shows per Category".to_string(),
        x_label: "Category".to_string(),
        y_label: "Number of Attendees".to_string(),
        series: vec![ATTENDED.to_string(), NO_SHOWS.to_string()],
        bars,
    }
}
