// src/config/validate.rs

use globset::Glob;

use crate::config::model::Config;
use crate::errors::{DevloopError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `[project] name` is non-empty (the artifact path depends on it)
/// - at least one tracked extension, none of them empty
/// - all `[commands]` entries are non-empty command lines
/// - `debounce_ms >= 1`
/// - every `[watch] exclude` pattern is a valid glob
pub fn validate_config(cfg: &Config) -> Result<()> {
    validate_project(cfg)?;
    validate_commands(cfg)?;
    validate_watch(cfg)?;
    Ok(())
}

fn validate_project(cfg: &Config) -> Result<()> {
    if cfg.project.name.trim().is_empty() {
        return Err(DevloopError::Config(
            "[project].name must be set to the artifact name".to_string(),
        ));
    }

    if cfg.project.extensions.is_empty() {
        return Err(DevloopError::Config(
            "[project].extensions must list at least one tracked extension".to_string(),
        ));
    }

    for ext in cfg.project.extensions.iter() {
        if ext.trim_start_matches('.').is_empty() {
            return Err(DevloopError::Config(format!(
                "[project].extensions contains an empty entry ({ext:?})"
            )));
        }
    }

    Ok(())
}

fn validate_commands(cfg: &Config) -> Result<()> {
    for (key, cmd) in [
        ("install", &cfg.commands.install),
        ("check", &cfg.commands.check),
        ("build", &cfg.commands.build),
    ] {
        if cmd.trim().is_empty() {
            return Err(DevloopError::Config(format!(
                "[commands].{key} must be a non-empty command line"
            )));
        }
    }
    Ok(())
}

fn validate_watch(cfg: &Config) -> Result<()> {
    if cfg.watch.debounce_ms == 0 {
        return Err(DevloopError::Config(
            "[watch].debounce_ms must be >= 1 (got 0)".to_string(),
        ));
    }

    for pattern in cfg.watch.exclude.iter() {
        Glob::new(pattern).map_err(|err| {
            DevloopError::Config(format!(
                "[watch].exclude has invalid glob pattern {pattern:?}: {err}"
            ))
        })?;
    }

    Ok(())
}
