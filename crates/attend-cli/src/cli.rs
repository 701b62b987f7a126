//! CLI argument definitions for the attendance report.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use attend_cli::logging::{LogConfig, LogFormat};
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "attend",
    version,
    about = "Event attendance report - reconcile registrations with check-ins",
    long_about = "Reconcile an event registration list with check-in records.\n\n\
                  Reports attendance and no-show rates, per-category counts, and\n\
                  arrival times. Either one combined export or a registration\n\
                  file plus a separate check-in file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup for these flags.
    ///
    /// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            with_ansi: self.log_ansi(),
            ..LogConfig::default()
        }
    }

    /// Colors only reach a terminal; a log file never gets them under `auto`.
    fn log_ansi(&self) -> bool {
        match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Load, reconcile and summarize an event.
    Report(ReportArgs),

    /// List the header names accepted for each canonical column.
    Aliases,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Registration export, or a combined export that also holds check-ins.
    #[arg(value_name = "REGISTRATION")]
    pub registration: PathBuf,

    /// Separate check-in export.
    #[arg(long = "checkin", value_name = "PATH")]
    pub checkin: Option<PathBuf>,

    /// How to print the summary.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write chart datasets as JSON.
    #[arg(long = "charts", value_name = "PATH")]
    pub charts: Option<PathBuf>,

    /// Write the merged attendance set as CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail instead of continuing with an empty set when a file is missing.
    #[arg(long = "strict-sources")]
    pub strict_sources: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
