//! Checking a whole set of resources.
//!
//! Each resource is checked independently; a missing or unreadable base for
//! one resource never stops the others.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::{Serialize, Serializer};

use super::{
    ParityError,
    check::{BaseFile, BaseStatus, check_resource_with_base},
    layout::ResourceLayout,
    report::Report,
};

/// What to check: resources under a layout, against target languages.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub layout: ResourceLayout,
    pub languages: Vec<String>,
    pub resources: Vec<String>,
}

/// Result of checking one resource.
#[derive(Debug, Serialize)]
pub struct ResourceCheck {
    pub resource: String,
    #[serde(flatten)]
    pub outcome: ResourceOutcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ResourceOutcome {
    /// The base was read and every target compared.
    Checked {
        base_path: PathBuf,
        base_status: BaseStatus,
        reports: Vec<Report>,
    },
    /// The base file does not exist; no target was looked at.
    BaseMissing { base_path: PathBuf },
    /// A file of this resource exists but could not be read.
    Failed {
        #[serde(serialize_with = "serialize_error")]
        error: ParityError,
    },
}

impl ResourceCheck {
    pub fn reports(&self) -> &[Report] {
        match &self.outcome {
            ResourceOutcome::Checked { reports, .. } => reports,
            ResourceOutcome::BaseMissing { .. } | ResourceOutcome::Failed { .. } => &[],
        }
    }
}

/// Results of a whole run, in plan resource order.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub resources: Vec<ResourceCheck>,
}

impl RunSummary {
    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.resources.iter().flat_map(|r| r.reports())
    }

    /// Number of reports with at least one issue.
    pub fn issue_count(&self) -> usize {
        self.reports().filter(|r| r.has_issues()).count()
    }

    pub fn base_missing_count(&self) -> usize {
        self.resources
            .iter()
            .filter(|r| matches!(r.outcome, ResourceOutcome::BaseMissing { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.resources
            .iter()
            .filter(|r| matches!(r.outcome, ResourceOutcome::Failed { .. }))
            .count()
    }

    /// Number of files that were compared, the base included.
    pub fn files_checked(&self) -> usize {
        self.resources
            .iter()
            .map(|r| match &r.outcome {
                ResourceOutcome::Checked {
                    base_status,
                    reports,
                    ..
                } => {
                    let target_reports = reports
                        .iter()
                        .filter(|report| !report.is_missing_file())
                        .count();
                    // The base duplicates report is about the base, not a target.
                    let base_reports = usize::from(*base_status == BaseStatus::Duplicates);
                    1 + target_reports - base_reports
                }
                ResourceOutcome::BaseMissing { .. } | ResourceOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0 || self.base_missing_count() > 0
    }
}

/// Check every resource of the plan.
///
/// Resources are checked in parallel; the summary keeps plan order.
pub fn check_all(plan: &RunPlan) -> RunSummary {
    let resources = plan
        .resources
        .par_iter()
        .map(|resource| ResourceCheck {
            resource: resource.clone(),
            outcome: check_one(plan, resource),
        })
        .collect();

    RunSummary { resources }
}

fn check_one(plan: &RunPlan, resource: &str) -> ResourceOutcome {
    let base_path = plan.layout.base_path(resource);

    let base = match BaseFile::load(&base_path) {
        Ok(base) => base,
        Err(ParityError::BaseNotFound { path }) => {
            return ResourceOutcome::BaseMissing { base_path: path };
        }
        Err(error) => return ResourceOutcome::Failed { error },
    };

    let targets = plan.layout.targets(&plan.languages, resource);
    match check_resource_with_base(&base, &targets) {
        Ok(reports) => ResourceOutcome::Checked {
            base_path,
            base_status: base.status(),
            reports,
        },
        Err(error) => ResourceOutcome::Failed { error },
    }
}

fn serialize_error<S: Serializer>(error: &ParityError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}
