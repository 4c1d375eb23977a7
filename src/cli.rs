// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{ArgGroup, Parser, ValueEnum};

/// Command-line arguments for `gofer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gofer",
    version,
    about = "Run namespaced tasks and their dependencies, each exactly once.",
    long_about = None
)]
#[command(group(ArgGroup::new("mode").args(["list", "graph", "dry_run"])))]
pub struct CliArgs {
    /// Task definition file (TOML). Repeat to load several files in order.
    ///
    /// Default: `Gofer.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GOFER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// List every registered task with its description.
    #[arg(long)]
    pub list: bool,

    /// Print the dependency graph in Graphviz DOT format.
    #[arg(long)]
    pub graph: bool,

    /// Resolve the task and print the running order without executing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Task to perform, e.g. `build:release`.
    #[arg(value_name = "TASK", required_unless_present_any = ["list", "graph"])]
    pub task: Option<String>,

    /// Arguments handed to every action that runs.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
