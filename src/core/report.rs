use std::path::{Path, PathBuf};

use serde::Serialize;

use super::compare::key_set;

/// Placed at the head of `missing` when a target file does not exist.
pub const MISSING_FILE_MARKER: &str = "<file missing>";

/// Parity result for one file of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The file this report describes.
    pub path: PathBuf,
    /// Base keys absent from this file, sorted.
    pub missing: Vec<String>,
    /// Keys in this file absent from the base, sorted.
    pub extra: Vec<String>,
    /// Keys declared more than once in this file, sorted.
    pub duplicates: Vec<String>,
}

impl Report {
    /// Report for a target file that does not exist: every base key is missing.
    pub fn missing_file<I>(path: impl Into<PathBuf>, base_keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let missing = std::iter::once(MISSING_FILE_MARKER.to_string())
            .chain(key_set(base_keys))
            .collect();

        Self {
            path: path.into(),
            missing,
            extra: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    /// Report that only lists duplicated keys of the base file.
    pub fn base_duplicates(path: impl Into<PathBuf>, duplicates: &[String]) -> Self {
        Self {
            path: path.into(),
            missing: Vec::new(),
            extra: Vec::new(),
            duplicates: sorted(duplicates),
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.missing.is_empty() || !self.extra.is_empty() || !self.duplicates.is_empty()
    }

    /// True when this report stands for a target file that does not exist.
    pub fn is_missing_file(&self) -> bool {
        self.missing.first().map(String::as_str) == Some(MISSING_FILE_MARKER)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn sorted(keys: &[String]) -> Vec<String> {
    let mut keys = keys.to_vec();
    keys.sort();
    keys
}
