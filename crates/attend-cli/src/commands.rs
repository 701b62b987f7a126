use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use attend_cli::pipeline::run_pipeline;
use attend_metrics::{ChartSet, write_attendance_csv};
use attend_model::{AttendanceSet, ColumnRole, LoadOptions, MissingSourceMode};

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;
use crate::types::ReportResult;

pub fn run_aliases() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Required", "Accepted headers"]);
    apply_table_style(&mut table);
    for role in ColumnRole::ALL {
        table.add_row(vec![
            role.canonical_name().to_string(),
            if role.is_required() { "yes" } else { "no" }.to_string(),
            role.aliases().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let options = LoadOptions::new().with_missing_source(if args.strict_sources {
        MissingSourceMode::Fail
    } else {
        MissingSourceMode::Degrade
    });
    let report = run_pipeline(&args.registration, args.checkin.as_deref(), &options)?;

    if let Some(path) = &args.charts {
        write_charts(&report.set, path)?;
    }
    if let Some(path) = &args.output {
        write_attendance_csv(&report.set, path)
            .with_context(|| format!("write merged set to {}", path.display()))?;
    }

    Ok(ReportResult {
        report,
        charts: args.charts.clone(),
        output: args.output.clone(),
    })
}

fn write_charts(set: &AttendanceSet, path: &Path) -> Result<()> {
    let charts = ChartSet::from_set(set);
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &charts)
        .with_context(|| format!("write charts to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("write charts to {}", path.display()))?;
    info!(path = %path.display(), "wrote chart datasets");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::cli::ReportFormatArg;

    fn args(registration: PathBuf, strict_sources: bool) -> ReportArgs {
        ReportArgs {
            registration,
            checkin: None,
            format: ReportFormatArg::Table,
            charts: None,
            output: None,
            strict_sources,
        }
    }

    #[test]
    fn missing_file_degrades_by_default() {
        let dir = TempDir::new().unwrap();
        let result = run_report(&args(dir.path().join("missing.csv"), false)).unwrap();
        assert!(result.report.set.is_empty());
        assert_eq!(result.report.warnings.len(), 1);
    }

    #[test]
    fn strict_sources_fail_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = run_report(&args(dir.path().join("missing.csv"), true)).unwrap_err();
        assert!(format!("{error:#}").contains("missing.csv"));
    }
}
