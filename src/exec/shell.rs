// src/exec/shell.rs

//! Shell-command action used for tasks loaded from definition files.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use tokio::process::Command;
use tracing::{debug, info};

use crate::exec::action::{Action, ActionFuture};

/// Name passed as `$0` so perform arguments land in `$1`, `$2`, ...
const SCRIPT_NAME: &str = "gofer";

/// Runs a command line through a shell, e.g. `sh -c "<cmd>" gofer <args>...`.
///
/// Stdio is inherited, so the command's output goes straight to the
/// terminal. The task path is exported as `GOFER_TASK`.
#[derive(Debug, Clone)]
pub struct ShellAction {
    task: String,
    cmd: String,
    shell: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ShellAction {
    pub fn new(task: impl Into<String>, cmd: impl Into<String>, shell: Vec<String>) -> Self {
        Self {
            task: task.into(),
            cmd: cmd.into(),
            shell,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    fn command(&self, args: &[String]) -> anyhow::Result<Command> {
        let (program, shell_args) = self
            .shell
            .split_first()
            .ok_or_else(|| anyhow!("no shell configured for task '{}'", self.task))?;

        let mut command = Command::new(program);
        command
            .args(shell_args)
            .arg(&self.cmd)
            .arg(SCRIPT_NAME)
            .args(args)
            .env("GOFER_TASK", &self.task)
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        Ok(command)
    }
}

impl Action for ShellAction {
    fn call<'a>(&'a self, args: &'a [String]) -> ActionFuture<'a> {
        Box::pin(async move {
            let mut command = self.command(args)?;

            info!(task = %self.task, cmd = %self.cmd, ?args, "starting task process");

            let status = command
                .status()
                .await
                .with_context(|| format!("spawning process for task '{}'", self.task))?;

            debug!(task = %self.task, ?status, "task process exited");

            if status.success() {
                Ok(())
            } else {
                match status.code() {
                    Some(code) => Err(anyhow!("command `{}` exited with code {code}", self.cmd)),
                    None => Err(anyhow!("command `{}` was terminated by a signal", self.cmd)),
                }
            }
        })
    }
}
