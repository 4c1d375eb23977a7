// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::exec::ShellAction;
use crate::manual::{join_path, ActionRef, Manual, Origin, TaskDefinition};

/// Load a definition file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** validate.
/// Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a definition file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load, validate and register every task of a definition file.
///
/// The file path is the origin of each definition, so entries repeated
/// within one file accumulate dependencies while a second file redefining a
/// task replaces them. Tasks with a `cmd` get a [`ShellAction`] running in
/// the configured working directory (default: the file's directory).
///
/// Returns the number of entries registered.
pub fn register_file(manual: &mut Manual, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let config = load_and_validate(path)?;
    let origin = Origin::new(path.display().to_string());
    let working_dir = resolve_working_dir(path, config.config.working_dir.as_deref());

    let count = config.task.len();
    for task in config.task {
        let namespace = task.namespace;
        let label = task.label;
        let full_path = join_path(&namespace, &label);

        let action = task.cmd.map(|cmd| {
            let shell = ShellAction::new(full_path, cmd, config.config.shell.clone())
                .with_working_dir(working_dir.clone());
            Arc::new(shell) as ActionRef
        });

        manual.register(TaskDefinition {
            namespace,
            label,
            description: task.description,
            dependencies: task.dependencies.into(),
            action,
            origin: origin.clone(),
        })?;
    }

    info!(file = %path.display(), tasks = count, "definition file registered");
    Ok(count)
}

fn resolve_working_dir(config_path: &Path, configured: Option<&Path>) -> PathBuf {
    let base = config_root_dir(config_path);
    match configured {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => base.join(dir),
        None => base,
    }
}

/// Directory a definition file lives in.
///
/// A bare filename like `Gofer.toml` (parent = "") falls back to the current
/// working directory.
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Default definition file, `Gofer.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Gofer.toml")
}
