// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GoferError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = GoferError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.task))
    }
}

// Label delimiters, unknown dependencies and cycles are not checked here:
// the manual reports those when tasks are registered and performed.
fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_global_config(cfg)?;
    validate_tasks(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(GoferError::ConfigError(
            "definition file must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.shell.is_empty() || cfg.config.shell[0].trim().is_empty() {
        return Err(GoferError::ConfigError(
            "[config].shell must name a shell program".to_string(),
        ));
    }
    Ok(())
}

fn validate_tasks(cfg: &RawConfigFile) -> Result<()> {
    for (position, task) in cfg.task.iter().enumerate() {
        if task.label.trim().is_empty() {
            return Err(GoferError::ConfigError(format!(
                "task #{} has an empty label",
                position + 1
            )));
        }

        if let Some(cmd) = &task.cmd {
            if cmd.trim().is_empty() {
                return Err(GoferError::ConfigError(format!(
                    "task '{}' has an empty `cmd`; omit it for grouping tasks",
                    task.label
                )));
            }
        }

        if task.dependencies.iter().any(|dep| dep.trim().is_empty()) {
            return Err(GoferError::ConfigError(format!(
                "task '{}' lists an empty dependency",
                task.label
            )));
        }
    }
    Ok(())
}
