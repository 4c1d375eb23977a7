// src/registrar.rs

//! Registration of task definitions into a [`Manual`].

use tracing::debug;

use crate::errors::{GoferError, Result};
use crate::manual::{Manual, Task, TaskDefinition, DELIMITER};

impl Manual {
    /// Store a task definition.
    ///
    /// - A label containing the delimiter (or an empty label) is rejected
    ///   with [`GoferError::BadLabel`] before anything is touched.
    /// - A definition for an existing path is merged into that node (see
    ///   [`Task::rewrite`](crate::manual::Task)); redefinition is not an
    ///   error.
    /// - Otherwise the namespace is sectionalized and the task is appended
    ///   under it, or as a root when the namespace is empty.
    pub fn register(&mut self, definition: TaskDefinition) -> Result<()> {
        if definition.label.is_empty() || definition.label.contains(DELIMITER) {
            return Err(GoferError::BadLabel(definition.label));
        }

        let path = definition.path();

        if let Some(defined) = self.index_mut(&path) {
            let origin = definition.origin.clone();
            let appended = defined.rewrite(definition);
            debug!(
                task = %path,
                %origin,
                appended,
                "task redefined; merged into existing entry"
            );
            return Ok(());
        }

        let task = Task::from_definition(definition);

        if task.namespace().is_empty() {
            self.push(task);
        } else {
            let namespace = task.namespace().to_string();
            let parent = self.sectionalize(&namespace).ok_or_else(|| {
                GoferError::RegistrationFailure(format!(
                    "cannot establish namespace {namespace:?} for task {path:?}"
                ))
            })?;
            parent.children_mut().push(task);
        }

        debug!(task = %path, "task registered");
        Ok(())
    }
}
