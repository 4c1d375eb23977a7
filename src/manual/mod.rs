// src/manual/mod.rs

//! The task manual: a forest of namespaced task nodes.
//!
//! - [`dependencies`] holds the ordered path list used for task dependencies
//!   and for resolution bookkeeping.
//! - [`task`] defines the [`Task`] node and the inbound [`TaskDefinition`].
//! - [`graph`] exports the dependency relation as a `petgraph` graph.
//!
//! Paths are `segment(':'segment)*`. Every node lives at exactly one path;
//! lookups never create nodes, [`Manual::sectionalize`] does.

pub mod dependencies;
pub mod graph;
pub mod task;

use std::fmt;
use std::slice;

pub use dependencies::Dependencies;
pub use task::{ActionRef, Task, TaskDefinition};

/// Canonical full task path type (`"build:release"`).
pub type TaskPath = String;

/// Reserved section delimiter.
pub const DELIMITER: &str = ":";

/// Opaque marker for where a definition was registered from (a file path,
/// a module name, ...). Compared for equality only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Origin {
    fn from(origin: &str) -> Self {
        Self::new(origin)
    }
}

/// Join a namespace and a label into a full path.
pub fn join_path(namespace: &str, label: &str) -> TaskPath {
    if namespace.is_empty() {
        label.to_string()
    } else {
        format!("{namespace}{DELIMITER}{label}")
    }
}

/// Split a path into its segments.
///
/// Returns `None` for an empty path or one with an empty segment
/// (`"a::b"`, `":a"`, `"a:"`); no node can live at such a path.
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = path.split(DELIMITER).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// Ordered collection of sibling task nodes.
///
/// The top-level `Manual` is the registry; every [`Task`] also owns a
/// `Manual` of its children.
#[derive(Debug, Default)]
pub struct Manual {
    tasks: Vec<Task>,
}

impl Manual {
    /// Empty manual.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Direct entries of this level, in registration order.
    pub fn entries(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Look up the node at `definition`, descending one label per segment.
    pub fn index(&self, definition: &str) -> Option<&Task> {
        let segments = split_path(definition)?;
        let (last, sections) = segments.split_last()?;

        let mut entries = self;
        for section in sections {
            entries = entries.find(section)?.children();
        }
        entries.find(last)
    }

    /// Mutable variant of [`Manual::index`].
    pub fn index_mut(&mut self, definition: &str) -> Option<&mut Task> {
        let segments = split_path(definition)?;
        let (last, sections) = segments.split_last()?;

        let mut entries = self;
        for section in sections {
            entries = entries.find_mut(section)?.children_mut();
        }
        entries.find_mut(last)
    }

    /// Ensure every segment of `definition` exists and return the deepest
    /// node.
    ///
    /// Missing segments are created as empty namespace nodes whose namespace
    /// is the joined prefix of the segments before them. Existing segments
    /// are reused. Returns `None` only when the path is not a valid path.
    pub fn sectionalize(&mut self, definition: &str) -> Option<&mut Task> {
        let segments = split_path(definition)?;
        Some(self.descend(&segments, 0))
    }

    fn descend(&mut self, segments: &[&str], depth: usize) -> &mut Task {
        let label = segments[depth];
        let position = match self.position(label) {
            Some(position) => position,
            None => {
                let namespace = segments[..depth].join(DELIMITER);
                self.tasks.push(Task::section(namespace, label));
                self.tasks.len() - 1
            }
        };

        let task = &mut self.tasks[position];
        if depth + 1 == segments.len() {
            task
        } else {
            task.children_mut().descend(segments, depth + 1)
        }
    }

    /// Append a node at this level.
    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Depth-first walk over every node, parents before children.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![self.tasks.iter()],
        }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.label() == label)
    }

    fn find(&self, label: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.label() == label)
    }

    fn find_mut(&mut self, label: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.label() == label)
    }
}

/// Depth-first iterator returned by [`Manual::iter`].
pub struct Iter<'a> {
    stack: Vec<slice::Iter<'a, Task>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(task) => {
                    self.stack.push(task.children().entries());
                    return Some(task);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Manual {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
