// src/config/mod.rs

//! Task definition files.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a definition file from disk and register it (`loader.rs`).
//! - Validate basic invariants of a file (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, register_file};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
