//! Parity checking of one resource across languages.
//!
//! The base file is loaded once, then every target is compared against its
//! key set. Absent targets and duplicate keys end up in [`Report`]s; only
//! files that exist but cannot be read fail the resource.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use serde::Serialize;

use super::{
    ParityError,
    compare::{compare_keys, key_set},
    extract::{ExtractionResult, extract_keys_from_file},
    report::{Report, sorted},
};

/// A target file to compare against the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Language code, e.g. `vi`.
    pub language: String,
    pub path: PathBuf,
}

impl Target {
    pub fn new(language: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            language: language.into(),
            path: path.into(),
        }
    }
}

/// State of a loaded base file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseStatus {
    /// The file declares no keys.
    Empty,
    /// At least one key is declared more than once.
    Duplicates,
    Clean,
}

/// The base-language file of a resource and its extracted keys.
#[derive(Debug, Clone)]
pub struct BaseFile {
    pub path: PathBuf,
    pub extraction: ExtractionResult,
    key_set: BTreeSet<String>,
}

impl BaseFile {
    /// Load and extract the base file.
    ///
    /// Returns [`ParityError::BaseNotFound`] when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ParityError> {
        if !exists(path)? {
            return Err(ParityError::BaseNotFound {
                path: path.to_path_buf(),
            });
        }
        let extraction = extract_keys_from_file(path)?;
        Ok(Self::from_extraction(path, extraction))
    }

    pub fn from_extraction(path: impl Into<PathBuf>, extraction: ExtractionResult) -> Self {
        let key_set = key_set(&extraction.keys);
        Self {
            path: path.into(),
            extraction,
            key_set,
        }
    }

    pub fn status(&self) -> BaseStatus {
        if self.extraction.is_empty() {
            BaseStatus::Empty
        } else if !self.extraction.duplicates.is_empty() {
            BaseStatus::Duplicates
        } else {
            BaseStatus::Clean
        }
    }

    /// Distinct declared keys, sorted.
    pub fn key_set(&self) -> &BTreeSet<String> {
        &self.key_set
    }
}

/// Check every target of one resource against its base file.
///
/// Reports come back in `targets` order, preceded by a report on the base
/// path when the base itself declares duplicate keys.
pub fn check_resource(base_path: &Path, targets: &[Target]) -> Result<Vec<Report>, ParityError> {
    let base = BaseFile::load(base_path)?;
    check_resource_with_base(&base, targets)
}

/// Same as [`check_resource`] with an already loaded base file.
pub fn check_resource_with_base(
    base: &BaseFile,
    targets: &[Target],
) -> Result<Vec<Report>, ParityError> {
    let mut reports = Vec::with_capacity(targets.len() + 1);

    if base.status() == BaseStatus::Duplicates {
        reports.push(Report::base_duplicates(
            &base.path,
            &base.extraction.duplicates,
        ));
    }

    for target in targets {
        reports.push(check_target(base, &target.path)?);
    }

    Ok(reports)
}

/// Compare a single target file against the base.
pub fn check_target(base: &BaseFile, path: &Path) -> Result<Report, ParityError> {
    if !exists(path)? {
        return Ok(Report::missing_file(path, base.key_set()));
    }

    let extraction = extract_keys_from_file(path)?;
    let diff = compare_keys(base.key_set(), &extraction.keys);

    Ok(Report {
        path: path.to_path_buf(),
        missing: diff.missing,
        extra: diff.extra,
        duplicates: sorted(&extraction.duplicates),
    })
}

/// Existence check that does not mistake an inaccessible path for an absent one.
fn exists(path: &Path) -> Result<bool, ParityError> {
    path.try_exists().map_err(|source| ParityError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
