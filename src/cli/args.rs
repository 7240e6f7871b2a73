//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare every target language against the base language
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Arguments that override the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory containing the <lang>.lproj folders (overrides config file)
    #[arg(long, env = "LPROJ_PARITY_ROOT")]
    pub root: Option<PathBuf>,

    /// Base language used as the source of truth (overrides config file)
    #[arg(long)]
    pub base: Option<String>,

    /// Target languages to verify; pass no value to check every .lproj folder
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Resource files to compare; pass no value to check every .strings file
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub resources: Option<Vec<String>>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every language declares the same keys as the base language
    Check(CheckCommand),
    /// Initialize a new .lprojparityrc.json configuration file
    Init,
}
