//! Report formatting and printing utilities.
//!
//! Separate from core logic so the parity engine can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandSummary, InitSummary},
};
use crate::core::{Report, ResourceCheck, ResourceOutcome, RunSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(summary: &CommandSummary) -> Result<()> {
    let stdout = &mut io::stdout().lock();
    match summary {
        CommandSummary::Check(CheckSummary { run, format }) => match format {
            OutputFormat::Text => {
                report_to(run, stdout);
                Ok(())
            }
            OutputFormat::Json => report_json_to(run, stdout),
        },
        CommandSummary::Init(summary) => {
            print_init(summary, stdout);
            Ok(())
        }
    }
}

/// Print every resource's reports followed by a summary line.
pub fn report_to<W: Write>(run: &RunSummary, writer: &mut W) {
    for check in &run.resources {
        print_resource(check, writer);
    }
    print_summary(run, writer);
}

/// Write the run as pretty-printed JSON.
pub fn report_json_to<W: Write>(run: &RunSummary, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, run).context("Failed to serialize report")?;
    writeln!(writer)?;
    Ok(())
}

/// Print a verbose diagnostic note to stderr.
pub fn print_note(message: &str) {
    eprintln!("{} {}", "note:".bold().cyan(), message);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_resource<W: Write>(check: &ResourceCheck, writer: &mut W) {
    let resource = &check.resource;
    match &check.outcome {
        ResourceOutcome::Checked { reports, .. } => {
            for report in reports {
                print_report(resource, report, writer);
            }
        }
        ResourceOutcome::BaseMissing { base_path } => {
            let _ = writeln!(
                writer,
                "{} base resource missing: {}",
                "warning:".bold().yellow(),
                base_path.display()
            );
        }
        ResourceOutcome::Failed { error } => {
            let _ = writeln!(writer, "{} {}: {}", "error:".bold().red(), resource, error);
        }
    }
}

fn print_report<W: Write>(resource: &str, report: &Report, writer: &mut W) {
    let path = report.path.display();

    if !report.has_issues() {
        let _ = writeln!(
            writer,
            "{} {} matches for {}",
            SUCCESS_MARK.green(),
            resource,
            path
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} issues in {}",
        FAILURE_MARK.red(),
        resource.bold(),
        path
    );
    print_keys("Missing keys", &report.missing, writer);
    print_keys("Extra keys", &report.extra, writer);
    print_keys("Duplicate keys", &report.duplicates, writer);
}

fn print_keys<W: Write>(label: &str, keys: &[String], writer: &mut W) {
    if keys.is_empty() {
        return;
    }
    let _ = writeln!(writer, "   {}: {}", label.dimmed(), keys.join(", "));
}

fn print_summary<W: Write>(run: &RunSummary, writer: &mut W) {
    let problems = run.issue_count() + run.base_missing_count() + run.failed_count();

    if problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} {} across {} {}",
            FAILURE_MARK.red(),
            problems,
            plural(problems, "problem", "problems").red(),
            run.resources.len(),
            plural(run.resources.len(), "resource", "resources")
        );
    } else {
        let files = run.files_checked();
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - no issues found",
                files,
                plural(files, "file", "files")
            )
            .green()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.config_path.display()).green()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
