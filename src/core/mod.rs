//! Core parity engine.
//!
//! - `extract`: comment stripping and key extraction from `.strings` text
//! - `compare`: set comparison of two key collections
//! - `report`: per-file parity report
//! - `check`: base file loading and per-resource checking
//! - `layout`: `<root>/<lang>.lproj/<resource>` path resolution and discovery
//! - `run`: checking a whole set of resources
//!
//! Nothing here prints or decides exit codes; that is the `cli` layer's job.

pub mod check;
pub mod compare;
mod error;
pub mod extract;
pub mod layout;
pub mod report;
pub mod run;

pub use check::{BaseFile, BaseStatus, Target, check_resource, check_resource_with_base};
pub use compare::{KeyDiff, compare_keys};
pub use error::ParityError;
pub use extract::{ExtractionResult, extract_keys, extract_keys_from_file, strip_comments};
pub use layout::ResourceLayout;
pub use report::{MISSING_FILE_MARKER, Report};
pub use run::{ResourceCheck, ResourceOutcome, RunPlan, RunSummary, check_all};
