// src/manual/dependencies.rs

//! Ordered list of task paths with set-like helpers.

use std::slice;

use crate::manual::TaskPath;

/// Ordered collection of full task paths.
///
/// Used both as the dependency list of a [`Task`](crate::manual::Task) and as
/// the `half` / `marked` working sets of dependency resolution. Membership is
/// a linear scan; insertion order is significant (it is the execution order
/// once resolution finishes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(Vec<TaskPath>);

impl Dependencies {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether `definition` is already present.
    pub fn includes(&self, definition: &str) -> bool {
        self.0.iter().any(|dependency| dependency == definition)
    }

    /// Append `definition` at the end. Does not deduplicate.
    pub fn add(&mut self, definition: impl Into<TaskPath>) {
        self.0.push(definition.into());
    }

    /// Remove every occurrence of `definition`.
    pub fn remove(&mut self, definition: &str) {
        self.0.retain(|dependency| dependency != definition);
    }

    /// Append all of `other`, keeping duplicates.
    pub fn append(&mut self, other: Dependencies) {
        self.0.extend(other.0);
    }

    /// Position of `definition`, if present.
    pub fn position(&self, definition: &str) -> Option<usize> {
        self.0.iter().position(|dependency| dependency == definition)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TaskPath> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TaskPath] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<TaskPath> {
        self.0
    }
}

impl From<Vec<TaskPath>> for Dependencies {
    fn from(paths: Vec<TaskPath>) -> Self {
        Self(paths)
    }
}

impl<S: Into<TaskPath>> FromIterator<S> for Dependencies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Dependencies {
    type Item = TaskPath;
    type IntoIter = std::vec::IntoIter<TaskPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a TaskPath;
    type IntoIter = slice::Iter<'a, TaskPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[&str]> for Dependencies {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Dependencies {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
