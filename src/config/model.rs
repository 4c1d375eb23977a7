// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Task definition file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// shell = ["sh", "-c"]
///
/// [[task]]
/// label = "clean"
/// cmd = "rm -rf target"
///
/// [[task]]
/// namespace = "build"
/// label = "release"
/// description = "Build the release binary"
/// cmd = "cargo build --release"
/// dependencies = ["clean"]
/// ```
///
/// Tasks are kept in file order; registering them in that order is what
/// makes repeated entries for the same path accumulate dependencies.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// Validated definition file. Only constructed through
/// `TryFrom<RawConfigFile>` (see `config::validate`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub task: Vec<TaskConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, task: Vec<TaskConfig>) -> Self {
        Self { config, task }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Shell program plus leading arguments; the task's `cmd` is appended.
    #[serde(default = "default_shell")]
    pub shell: Vec<String>,

    /// Directory commands run in. Relative paths are taken relative to the
    /// definition file; if unset, the file's own directory is used.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

pub(crate) fn default_shell() -> Vec<String> {
    if cfg!(windows) {
        vec!["cmd".to_string(), "/C".to_string()]
    } else {
        vec!["sh".to_string(), "-c".to_string()]
    }
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            working_dir: None,
        }
    }
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    #[serde(default)]
    pub namespace: String,

    pub label: String,

    #[serde(default)]
    pub description: String,

    /// Command line to run. Without one the task only groups its
    /// dependencies.
    #[serde(default)]
    pub cmd: Option<String>,

    /// Full paths of tasks to perform first.
    #[serde(default)]
    pub dependencies: Vec<String>,
}
