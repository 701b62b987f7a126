use std::path::PathBuf;

use attend_cli::pipeline::EventReport;

#[derive(Debug)]
pub struct ReportResult {
    pub report: EventReport,
    pub charts: Option<PathBuf>,
    pub output: Option<PathBuf>,
}
