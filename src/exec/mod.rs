// src/exec/mod.rs

//! Task execution layer.
//!
//! - [`action`] defines the [`Action`] trait that every task behaviour
//!   implements (async closures implement it directly).
//! - [`shell`] provides [`ShellAction`], which runs a command line through a
//!   shell using `tokio::process::Command`.
//! - [`perform`] runs a resolved task order, strictly one action at a time,
//!   stopping at the first failure.

pub mod action;
pub mod perform;
pub mod shell;

pub use action::{Action, ActionFuture};
pub use perform::PerformReport;
pub use shell::ShellAction;
