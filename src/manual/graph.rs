// src/manual/graph.rs

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::manual::{Manual, TaskPath};

/// Dependency relation of a whole manual as a `petgraph` graph.
///
/// Edge direction: dependency -> dependent. For a task `B` with
/// `dependencies = ["A"]` the graph holds `A -> B`. Paths that are referenced
/// as dependencies but never registered still get a node, so the export
/// shows dangling references instead of hiding them.
#[derive(Debug)]
pub struct DependencyGraph {
    graph: DiGraph<TaskPath, ()>,
}

impl DependencyGraph {
    pub fn from_manual(manual: &Manual) -> Self {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<TaskPath, NodeIndex> = HashMap::new();

        for task in manual {
            node_for(&mut graph, &mut indices, &task.path());
        }

        for task in manual {
            let dependent = node_for(&mut graph, &mut indices, &task.path());
            for dependency in task.dependencies() {
                let dependency = node_for(&mut graph, &mut indices, dependency);
                graph.update_edge(dependency, dependent, ());
            }
        }

        Self { graph }
    }

    pub fn graph(&self) -> &DiGraph<TaskPath, ()> {
        &self.graph
    }

    /// Graphviz DOT rendering.
    pub fn to_dot(&self) -> String {
        let labelled = self.graph.map(|_, path| path.as_str(), |_, _| "");
        format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
    }
}

fn node_for(
    graph: &mut DiGraph<TaskPath, ()>,
    indices: &mut HashMap<TaskPath, NodeIndex>,
    path: &str,
) -> NodeIndex {
    if let Some(index) = indices.get(path) {
        return *index;
    }
    let index = graph.add_node(path.to_string());
    indices.insert(path.to_string(), index);
    index
}
