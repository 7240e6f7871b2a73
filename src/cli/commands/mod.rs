pub mod check;
pub mod init;

use std::path::PathBuf;

use crate::core::RunSummary;

use super::args::OutputFormat;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub run: RunSummary,
    pub format: OutputFormat,
}

/// Outcome of `init`: where the config file was written.
#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
}
