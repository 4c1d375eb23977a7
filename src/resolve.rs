// src/resolve.rs

//! Dependency resolution: turn a requested task path into a running order.
//!
//! This is a depth-first topological sort with three-state marking:
//!
//! - `half` holds the paths on the current DFS stack ("visit in progress"),
//! - `marked` holds the paths already placed in the output order.
//!
//! Reaching a path that is still in `half` means it depends on itself,
//! directly or transitively. Reaching a path that is already `marked` is a
//! no-op, which is what keeps diamond dependencies from running twice.
//!
//! The traversal keeps its own stack of frames instead of recursing, so deep
//! dependency chains cannot overflow the call stack.

use tracing::{debug, trace};

use crate::errors::{GoferError, Result};
use crate::manual::{Dependencies, Manual, TaskPath};

impl Manual {
    /// Running order for `definition`: every transitive dependency exactly
    /// once, each after its own dependencies, with `definition` last.
    ///
    /// The root path itself is expected to exist; callers check that first
    /// (see [`Manual::perform`]). A missing root surfaces here as
    /// [`GoferError::UnresolvableDependencies`].
    pub fn calculate_dependencies(&self, definition: &str) -> Result<Dependencies> {
        let order = Resolution::new(self).run(definition)?;
        debug!(task = %definition, order = ?order.as_slice(), "dependencies resolved");
        Ok(order)
    }
}

/// A node being visited: its path and the next dependency to descend into.
struct Frame<'a> {
    path: &'a str,
    dependencies: &'a [TaskPath],
    next: usize,
}

struct Resolution<'a> {
    manual: &'a Manual,
    half: Dependencies,
    marked: Dependencies,
}

impl<'a> Resolution<'a> {
    fn new(manual: &'a Manual) -> Self {
        Self {
            manual,
            half: Dependencies::new(),
            marked: Dependencies::new(),
        }
    }

    fn run(mut self, root: &'a str) -> Result<Dependencies> {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        if let Some(frame) = self.enter(root, None)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let dependencies = frame.dependencies;
            if frame.next < dependencies.len() {
                let dependency = dependencies[frame.next].as_str();
                let dependent = frame.path;
                frame.next += 1;

                if let Some(child) = self.enter(dependency, Some(dependent))? {
                    stack.push(child);
                }
            } else {
                let path = frame.path;
                stack.pop();
                self.half.remove(path);
                self.marked.add(path);
                trace!(task = %path, "marked");
            }
        }

        Ok(self.marked)
    }

    /// Start visiting `path`. Returns `None` when it is already resolved.
    fn enter(&mut self, path: &'a str, required_by: Option<&str>) -> Result<Option<Frame<'a>>> {
        if let Some(start) = self.half.position(path) {
            let mut cycle: Vec<&str> = self.half.as_slice()[start..]
                .iter()
                .map(String::as_str)
                .collect();
            cycle.push(path);
            return Err(GoferError::CyclicDependency(cycle.join(" -> ")));
        }

        if self.marked.includes(path) {
            return Ok(None);
        }

        self.half.add(path);

        let task = self.manual.index(path).ok_or_else(|| {
            GoferError::UnresolvableDependencies(match required_by {
                Some(dependent) => format!("task {path:?} required by {dependent:?} is not defined"),
                None => format!("task {path:?} is not defined"),
            })
        })?;

        Ok(Some(Frame {
            path,
            dependencies: task.dependencies().as_slice(),
            next: 0,
        }))
    }
}
