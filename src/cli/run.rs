use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandSummary, check::check, init::init},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandSummary)` describing what the command did
/// - `Err` if the command fails (e.g. invalid config, config file already exists)
pub fn run(Arguments { command }: Arguments) -> Result<CommandSummary> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
