//! Attendance metrics.
//!
//! Every function here reads an immutable [`AttendanceSet`] and returns a
//! fresh value; nothing is cached or mutated, so metrics can be computed in
//! any order and as often as needed.
//!
//! - [`metrics`]: attendance and no-show rates, per-category counts, arrival hours
//! - [`summary`]: all metrics bundled for output
//! - [`charts`]: renderer-agnostic datasets for the standard attendance charts
//! - [`frame`]: the merged set as a Polars DataFrame / CSV file
//!
//! [`AttendanceSet`]: attend_model::AttendanceSet

pub mod charts;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod summary;

pub use charts::{
    BarChart, BarDatum, BarSegment, ChartSet, PieChart, PieSlice, StackedBar, StackedBarChart,
};
pub use error::{ExportError, Result};
pub use frame::{attendance_frame, write_attendance_csv};
pub use metrics::{
    ArrivalDistribution, AttendanceRate, CategoryBreakdown, CategoryCounts, NoShowRate,
    arrival_time_distribution, attendance_rate, average_arrival_time, category_breakdown,
    no_show_rate,
};
pub use summary::EventSummary;
