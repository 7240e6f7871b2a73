use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lprojparityrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory that holds the `<lang>.lproj` folders.
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_base_language", alias = "base")]
    pub base_language: String,
    /// Target languages. Empty means every `.lproj` folder found under `root`.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Resource file names. Empty means every `.strings` file of the base language.
    #[serde(default = "default_resources")]
    pub resources: Vec<String>,
}

fn default_root() -> String {
    ".".to_string()
}

fn default_base_language() -> String {
    "en".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["vi".to_string()]
}

fn default_resources() -> Vec<String> {
    ["Localizable.strings", "InfoPlist.strings"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            base_language: default_base_language(),
            languages: default_languages(),
            resources: default_resources(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Language codes and resource names must be plain names and targets
    /// cannot repeat.
    pub fn validate(&self) -> Result<()> {
        validate_name("baseLanguage", &self.base_language)?;

        for (i, language) in self.languages.iter().enumerate() {
            validate_name("languages", language)?;
            if self.languages[..i].contains(language) {
                bail!(
                    "Invalid value in 'languages': \"{}\" is listed twice",
                    language
                );
            }
        }

        for resource in &self.resources {
            validate_name("resources", resource)?;
        }

        if self.root.trim().is_empty() {
            bail!("Invalid value in 'root': must not be empty");
        }

        Ok(())
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("Invalid value in '{}': must not be empty", field);
    }
    if value.contains('/') || value.contains('\\') {
        bail!(
            "Invalid value in '{}': \"{}\" must not contain a path separator",
            field,
            value
        );
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
