use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{CheckSummary, CommandSummary};
use crate::{
    cli::{
        args::{CheckCommand, CommonArgs},
        report::print_note,
    },
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{ResourceLayout, RunPlan, check_all},
};

pub fn check(cmd: CheckCommand) -> Result<CommandSummary> {
    let args = cmd.args;
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let mut plan = build_plan(&args.common, &cwd)?;
    // Printed paths stay relative when the root is inside the working directory.
    plan.layout.root = relative_to(&plan.layout.root, &cwd);

    if args.common.verbose {
        print_note(&format!(
            "Checking {} resource(s) in {} against base '{}' for: {}",
            plan.resources.len(),
            plan.layout.root.display(),
            plan.layout.base_language,
            plan.languages.join(", ")
        ));
        print_files(&plan);
    }

    let run = check_all(&plan);

    Ok(CommandSummary::Check(CheckSummary {
        run,
        format: args.format,
    }))
}

/// Resolve what to check: CLI overrides > config file > defaults.
///
/// Empty language or resource lists are filled by scanning the root. The
/// base language is never checked against itself, so it is dropped from the
/// target languages.
pub fn build_plan(common: &CommonArgs, start_dir: &Path) -> Result<RunPlan> {
    let verbose = common.verbose;
    let loaded = load_config(start_dir)?;

    match &loaded.path {
        Some(path) if verbose => print_note(&format!("Using config {}", path.display())),
        None if verbose => print_note(&format!(
            "No {} found, using default configuration",
            CONFIG_FILE_NAME
        )),
        _ => {}
    }

    let config_dir = loaded
        .path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf);
    let mut config = loaded.config;
    apply_overrides(&mut config, common);
    config
        .validate()
        .context("Invalid command line arguments")?;

    let discover_languages = config.languages.is_empty();
    let base_language = config.base_language.clone();
    if config.languages.contains(&base_language) {
        config.languages.retain(|lang| *lang != base_language);
        if verbose {
            print_note(&format!(
                "Skipping base language '{}' in target languages",
                base_language
            ));
        }
    }

    let root = resolve_root(&config, common, config_dir.as_deref(), start_dir);
    let layout = ResourceLayout::new(root, base_language);

    let languages = if discover_languages {
        let discovered = layout.discover_languages()?;
        if verbose {
            print_note(&format!("Discovered languages: {}", discovered.join(", ")));
        }
        discovered
    } else {
        config.languages
    };

    let resources = if config.resources.is_empty() {
        let discovered = layout.discover_resources()?;
        if verbose {
            print_note(&format!("Discovered resources: {}", discovered.join(", ")));
        }
        discovered
    } else {
        config.resources
    };

    Ok(RunPlan {
        layout,
        languages,
        resources,
    })
}

fn print_files(plan: &RunPlan) {
    for resource in &plan.resources {
        let base_path = plan.layout.base_path(resource);
        for target in plan.layout.targets(&plan.languages, resource) {
            print_note(&format!(
                "Comparing {} with {}",
                target.path.display(),
                base_path.display()
            ));
        }
    }
}

fn apply_overrides(config: &mut Config, common: &CommonArgs) {
    if let Some(ref base) = common.base {
        config.base_language = base.clone();
    }
    if let Some(ref languages) = common.languages {
        config.languages = languages.clone();
    }
    if let Some(ref resources) = common.resources {
        config.resources = resources.clone();
    }
}

/// `--root` is taken relative to the start directory, a config `root`
/// relative to the directory holding the config file.
fn resolve_root(
    config: &Config,
    common: &CommonArgs,
    config_dir: Option<&Path>,
    start_dir: &Path,
) -> PathBuf {
    if let Some(ref root) = common.root {
        return join_relative(start_dir, root);
    }
    join_relative(config_dir.unwrap_or(start_dir), &config.root_path())
}

fn join_relative(dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let rel = path.strip_prefix(".").unwrap_or(path);
    if rel.as_os_str().is_empty() {
        dir.to_path_buf()
    } else {
        dir.join(rel)
    }
}

/// `path` relative to `dir` when it lies inside it (`.` for `dir` itself),
/// unchanged otherwise.
fn relative_to(path: &Path, dir: &Path) -> PathBuf {
    match path.strip_prefix(dir) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
