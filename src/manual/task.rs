// src/manual/task.rs

//! Task nodes and the definitions they are registered from.

use std::fmt;
use std::sync::Arc;

use crate::exec::Action;
use crate::manual::{join_path, Dependencies, Manual, Origin};

/// Shared handle to a task's action.
pub type ActionRef = Arc<dyn Action>;

/// Inbound registration record handed to [`Manual::register`].
#[derive(Clone, Default)]
pub struct TaskDefinition {
    /// Namespace the task lives under (`"build"`, `"db:migrate"`), or empty.
    pub namespace: String,
    /// The task's own segment. Must not contain the delimiter.
    pub label: String,
    pub description: String,
    /// Full paths of tasks to perform first.
    pub dependencies: Dependencies,
    pub action: Option<ActionRef>,
    /// Where this definition was registered from.
    pub origin: Origin,
}

impl TaskDefinition {
    pub fn new(namespace: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Full path the definition registers under.
    pub fn path(&self) -> String {
        join_path(&self.namespace, &self.label)
    }
}

impl fmt::Debug for TaskDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskDefinition")
            .field("namespace", &self.namespace)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("dependencies", &self.dependencies)
            .field("has_action", &self.action.is_some())
            .field("origin", &self.origin)
            .finish()
    }
}

/// A single node of the manual.
///
/// A node without an action is a pure namespace / grouping node. Children
/// are owned exclusively; there is no link back to the parent, so the
/// namespace string is stored on the node itself.
#[derive(Default)]
pub struct Task {
    namespace: String,
    label: String,
    description: String,
    dependencies: Dependencies,
    action: Option<ActionRef>,
    children: Manual,
    origin: Option<Origin>,
}

impl Task {
    /// An empty namespace node created while sectionalizing.
    pub(crate) fn section(namespace: String, label: &str) -> Self {
        Self {
            namespace,
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn from_definition(definition: TaskDefinition) -> Self {
        Self {
            namespace: definition.namespace,
            label: definition.label,
            description: definition.description,
            dependencies: definition.dependencies,
            action: definition.action,
            children: Manual::new(),
            origin: Some(definition.origin),
        }
    }

    /// Copy description, action and dependencies from a redefinition.
    ///
    /// Dependencies accumulate when the node has no origin yet or the origin
    /// matches; a definition from another origin replaces them. The origin
    /// itself is fixed at insertion and never rewritten, so a namespace node
    /// keeps appending. Returns `true` if the dependencies were appended.
    pub(crate) fn rewrite(&mut self, definition: TaskDefinition) -> bool {
        self.description = definition.description;
        self.action = definition.action;

        let append = match &self.origin {
            None => true,
            Some(origin) => *origin == definition.origin,
        };

        if append {
            self.dependencies.append(definition.dependencies);
        } else {
            self.dependencies = definition.dependencies;
        }

        append
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Full `namespace:label` path of this node.
    pub fn path(&self) -> String {
        join_path(&self.namespace, &self.label)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    pub fn action(&self) -> Option<&ActionRef> {
        self.action.as_ref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Sub-namespace directly below this node.
    pub fn children(&self) -> &Manual {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Manual {
        &mut self.children
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("namespace", &self.namespace)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("dependencies", &self.dependencies)
            .field("has_action", &self.action.is_some())
            .field("children", &self.children)
            .field("origin", &self.origin)
            .finish()
    }
}
