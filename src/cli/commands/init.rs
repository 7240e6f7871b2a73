use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandSummary> {
    init_at(Path::new(CONFIG_FILE_NAME))
}

/// Write the default configuration to `config_path`, refusing to overwrite.
pub fn init_at(config_path: &Path) -> Result<CommandSummary> {
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandSummary::Init(InitSummary {
        config_path: config_path.to_path_buf(),
    }))
}
