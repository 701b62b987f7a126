//! CLI library components for the attendance report.

pub mod logging;
pub mod pipeline;
