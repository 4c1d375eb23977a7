#![allow(dead_code)]

use gofer::manual::{ActionRef, Dependencies, Manual, Origin, TaskDefinition};

use crate::recording_action::CallLog;

/// Builder for `TaskDefinition` to simplify test setup.
///
/// `TaskDefinitionBuilder::new("build:release")` splits the path into
/// namespace `build` and label `release`.
pub struct TaskDefinitionBuilder {
    definition: TaskDefinition,
}

impl TaskDefinitionBuilder {
    pub fn new(path: &str) -> Self {
        let (namespace, label) = match path.rsplit_once(':') {
            Some((namespace, label)) => (namespace, label),
            None => ("", path),
        };
        Self::with_parts(namespace, label)
    }

    /// Namespace and label given separately (no splitting).
    pub fn with_parts(namespace: &str, label: &str) -> Self {
        let mut definition = TaskDefinition::new(namespace, label);
        definition.origin = Origin::new("tests");
        Self { definition }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.definition.description = text.to_string();
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.definition.dependencies.add(dep);
        self
    }

    pub fn dependencies(mut self, deps: &[&str]) -> Self {
        self.definition.dependencies = deps.iter().copied().collect::<Dependencies>();
        self
    }

    pub fn action(mut self, action: ActionRef) -> Self {
        self.definition.action = Some(action);
        self
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.definition.origin = Origin::new(origin);
        self
    }

    pub fn build(self) -> TaskDefinition {
        self.definition
    }
}

/// Builder for a `Manual` whose tasks all record into one [`CallLog`].
pub struct ManualBuilder {
    manual: Manual,
    log: CallLog,
}

impl ManualBuilder {
    pub fn new() -> Self {
        Self {
            manual: Manual::new(),
            log: CallLog::new(),
        }
    }

    /// Register `path` with a recording action and the given dependencies.
    pub fn task(mut self, path: &str, deps: &[&str]) -> Self {
        let definition = TaskDefinitionBuilder::new(path)
            .dependencies(deps)
            .action(self.log.action(path))
            .build();
        self.manual
            .register(definition)
            .expect("Failed to register task from builder");
        self
    }

    /// Register `path` with an action that records its call and fails.
    pub fn failing_task(mut self, path: &str, deps: &[&str]) -> Self {
        let definition = TaskDefinitionBuilder::new(path)
            .dependencies(deps)
            .action(self.log.failing_action(path))
            .build();
        self.manual
            .register(definition)
            .expect("Failed to register task from builder");
        self
    }

    /// Register `path` without an action.
    pub fn group(mut self, path: &str, deps: &[&str]) -> Self {
        let definition = TaskDefinitionBuilder::new(path).dependencies(deps).build();
        self.manual
            .register(definition)
            .expect("Failed to register task from builder");
        self
    }

    pub fn build(self) -> (Manual, CallLog) {
        (self.manual, self.log)
    }
}

impl Default for ManualBuilder {
    fn default() -> Self {
        Self::new()
    }
}
