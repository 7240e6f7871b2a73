use std::process::ExitCode;

use crate::core::RunSummary;

/// Process exit status of the CLI.
///
/// - `Success` (0): every resource matched its base
/// - `Failure` (1): a report has issues, or a base resource is missing
/// - `Error` (2): a file could not be read, or the command itself failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_summary(summary: &RunSummary) -> Self {
        if summary.failed_count() > 0 {
            ExitStatus::Error
        } else if summary.has_issues() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
