//! Command-line layer: argument parsing, command dispatch, output and exit codes.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::CommandSummary;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let summary = run::run(args)?;
    report::print(&summary)?;

    Ok(match &summary {
        CommandSummary::Check(check) => ExitStatus::from_summary(&check.run),
        CommandSummary::Init(_) => ExitStatus::Success,
    })
}
