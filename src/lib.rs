// src/lib.rs

//! `gofer`: a task manager for namespaced tasks with dependencies.
//!
//! The engine is the [`Manual`](manual::Manual): tasks are registered into
//! it ([`registrar`]), a requested path is resolved into a running order
//! ([`resolve`]), and that order is performed action by action ([`exec`]).
//! Definition files ([`config`]) and the CLI are thin layers over those
//! three operations.

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod manual;
pub mod registrar;
pub mod resolve;

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{default_config_path, register_file};
use crate::manual::graph::DependencyGraph;
use crate::manual::Manual;

/// High-level entry point used by `main.rs`.
///
/// Registers every definition file, then either lists, exports, dry-runs or
/// performs the requested task.
pub async fn run(args: CliArgs) -> Result<()> {
    let manual = load_manual(&args)?;

    if args.list {
        print_listing(&manual);
        return Ok(());
    }

    if args.graph {
        print!("{}", DependencyGraph::from_manual(&manual).to_dot());
        return Ok(());
    }

    let Some(task) = args.task.as_deref() else {
        anyhow::bail!("no task given; pass a task path or --list");
    };

    if args.dry_run {
        print!("{}", render_dry_run(&manual, task)?);
        return Ok(());
    }

    let report = manual
        .perform_with(task, &args.args, |path| {
            print_success_notice(&format!("Successfully performed task {path}"));
        })
        .await?;
    debug!(skipped = ?report.skipped, "perform complete");

    Ok(())
}

/// Build a manual from the `--config` files (or the default file).
fn load_manual(args: &CliArgs) -> Result<Manual> {
    let paths: Vec<PathBuf> = if args.config.is_empty() {
        vec![default_config_path()]
    } else {
        args.config.iter().map(PathBuf::from).collect()
    };

    let mut manual = Manual::new();
    for path in &paths {
        register_file(&mut manual, path)
            .with_context(|| format!("loading {}", path.display()))?;
    }
    Ok(manual)
}

fn print_listing(manual: &Manual) {
    for task in manual {
        let marker = if task.has_action() { " " } else { "*" };
        if task.description().is_empty() {
            println!("{marker} {}", task.path());
        } else {
            println!("{marker} {:<30} {}", task.path(), task.description());
        }
    }
}

/// Running order for `task` as printed by `--dry-run`, without running
/// anything. Tasks without an action are marked.
pub fn render_dry_run(manual: &Manual, task: &str) -> errors::Result<String> {
    if manual.index(task).is_none() {
        return Err(errors::GoferError::UnknownTask(task.to_string()));
    }
    let order = manual.calculate_dependencies(task)?;

    let mut out = String::new();
    let _ = writeln!(out, "gofer dry-run: {task}");
    for (step, path) in order.iter().enumerate() {
        let note = match manual.index(path) {
            Some(node) if !node.has_action() => " (no action)",
            _ => "",
        };
        let _ = writeln!(out, "  {}. {path}{note}", step + 1);
    }
    Ok(out)
}

/// `[ ✓ ] message` on stderr.
pub fn print_success_notice(msg: &str) {
    eprintln!("[ \u{1b}[32m\u{2713}\u{1b}[0m ] {msg}");
}

/// `[ ✗ ] message` on stderr.
pub fn print_failure_notice(msg: &str) {
    eprintln!("[ \u{1b}[31m\u{2717}\u{1b}[0m ] {msg}");
}
