// src/exec/perform.rs

//! Performing a task: validate, resolve, then run each action in order.

use tracing::{debug, error, info};

use crate::errors::{GoferError, Result};
use crate::manual::{Manual, TaskPath};

/// What a successful [`Manual::perform`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformReport {
    /// Resolved running order, requested task last.
    pub order: Vec<TaskPath>,
    /// Tasks whose action ran and succeeded, in order.
    pub performed: Vec<TaskPath>,
    /// Tasks skipped because they carry no action (namespace nodes).
    pub skipped: Vec<TaskPath>,
}

impl Manual {
    /// Perform the task at `definition` and all of its dependencies.
    ///
    /// 1. The path must be registered, otherwise [`GoferError::UnknownTask`].
    /// 2. Dependencies are resolved; cycle and lookup errors propagate as-is.
    /// 3. Actions run one after another with `arguments`. The first failure
    ///    stops execution and is returned as [`GoferError::ActionFailure`];
    ///    nothing after it runs and nothing before it is undone.
    pub async fn perform(&self, definition: &str, arguments: &[String]) -> Result<PerformReport> {
        self.perform_with(definition, arguments, |_| {}).await
    }

    /// [`Manual::perform`], calling `on_performed` with each task path as
    /// soon as its action succeeds.
    pub async fn perform_with<F>(
        &self,
        definition: &str,
        arguments: &[String],
        mut on_performed: F,
    ) -> Result<PerformReport>
    where
        F: FnMut(&str),
    {
        if self.index(definition).is_none() {
            return Err(GoferError::UnknownTask(definition.to_string()));
        }

        let order = self.calculate_dependencies(definition)?;
        let mut report = PerformReport {
            order: order.as_slice().to_vec(),
            ..PerformReport::default()
        };

        for (step, path) in order.iter().enumerate() {
            let task = self
                .index(path)
                .ok_or_else(|| GoferError::UnknownTask(path.clone()))?;

            let Some(action) = task.action() else {
                debug!(task = %path, step, "no action; skipping");
                report.skipped.push(path.clone());
                continue;
            };

            debug!(task = %path, step, total = order.len(), "performing task");

            if let Err(source) = action.call(arguments).await {
                error!(task = %path, error = %source, "task failed");
                return Err(GoferError::ActionFailure {
                    task: path.clone(),
                    source,
                });
            }

            info!(task = %path, "task performed");
            on_performed(path.as_str());
            report.performed.push(path.clone());
        }

        Ok(report)
    }
}
