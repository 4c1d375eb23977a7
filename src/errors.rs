// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every engine operation (register / resolve / perform) returns one of these
//! variants so callers can tell validation, resolution and execution failures
//! apart without string matching.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoferError {
    /// A task label contained the `:` section delimiter (or was empty).
    #[error("{}", bad_label_message(.0))]
    BadLabel(String),

    /// The namespace of a task could not be established in the manual.
    #[error("Registration for task failed: {0}")]
    RegistrationFailure(String),

    /// `perform` was asked for a path that is not registered.
    #[error("Unable to look up task: {0}")]
    UnknownTask(String),

    #[error("Unable to resolve dependencies: {0}")]
    UnresolvableDependencies(String),

    #[error("Cyclic dependency detected: {0}")]
    CyclicDependency(String),

    /// A task's action reported failure; execution stopped at this task.
    #[error("Task {task} failed to execute")]
    ActionFailure {
        task: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn bad_label_message(label: &str) -> String {
    if label.is_empty() {
        "Bad label for task, label is empty".to_string()
    } else {
        format!("Bad label for task, unexpected section delimiter: {label:?}")
    }
}

pub type Result<T> = std::result::Result<T, GoferError>;
