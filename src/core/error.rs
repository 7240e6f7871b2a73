use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that stop a single resource from being checked.
///
/// Absent target files and duplicate keys are not errors; they are recorded
/// in [`Report`](super::Report)s.
#[derive(Debug, Error)]
pub enum ParityError {
    /// The base-language file for a resource does not exist.
    #[error("base resource missing: {}", path.display())]
    BaseNotFound { path: PathBuf },

    /// A file exists but could not be read (permission denied, invalid UTF-8, ...).
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
