//! Event attendance report CLI.

use std::process::ExitCode;

use anyhow::Result;
use attend_cli::logging::init_logging;
use clap::Parser;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_aliases, run_report};
use crate::summary::print_report;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Report(args) => {
            let result = run_report(&args)?;
            print_report(&result, args.format)
        }
        Command::Aliases => run_aliases(),
    }
}
