// tests/property/main.rs

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use gofer::errors::GoferError;
use gofer::manual::Manual;
use gofer_test_utils::builders::TaskDefinitionBuilder;

/// Raw dependency indices per task; task `i` may only depend on tasks
/// `0..i`, which keeps the generated graph acyclic.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        )
        .prop_map(|raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    if i == 0 {
                        return Vec::new();
                    }
                    // Duplicates are kept on purpose: dependency lists are
                    // not deduplicated and resolution must cope.
                    potential.into_iter().map(|dep| dep % i).collect()
                })
                .collect()
        })
    })
}

/// Task names live in a couple of namespaces so lookups cross levels.
fn task_name(i: usize) -> String {
    match i % 3 {
        0 => format!("t{i}"),
        1 => format!("ns:t{i}"),
        _ => format!("ns:deep:t{i}"),
    }
}

fn build_manual(deps: &[Vec<usize>]) -> Manual {
    let mut manual = Manual::new();
    for (i, task_deps) in deps.iter().enumerate() {
        let names: Vec<String> = task_deps.iter().map(|&d| task_name(d)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        manual
            .register(TaskDefinitionBuilder::new(&task_name(i)).dependencies(&refs).build())
            .unwrap();
    }
    manual
}

fn reachable(deps: &[Vec<usize>], root: usize) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        if seen.insert(task_name(i)) {
            stack.extend(deps[i].iter().copied());
        }
    }
    seen
}

proptest! {
    #[test]
    fn resolution_is_a_duplicate_free_topological_order(
        (deps, root) in dag_strategy(12).prop_flat_map(|deps| {
            let len = deps.len();
            (Just(deps), 0..len)
        })
    ) {
        let manual = build_manual(&deps);
        let root_name = task_name(root);
        let order = manual.calculate_dependencies(&root_name).unwrap().into_vec();

        // Requested task last.
        prop_assert_eq!(order.last(), Some(&root_name));

        // Each task at most once.
        let unique: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());

        // Exactly the reachable set.
        let in_order: BTreeSet<String> = order.iter().cloned().collect();
        prop_assert_eq!(in_order, reachable(&deps, root));

        // Every dependency strictly before its dependent.
        for (position, path) in order.iter().enumerate() {
            let task = manual.index(path).unwrap();
            for dependency in task.dependencies() {
                let dep_position = order.iter().position(|p| p == dependency).unwrap();
                prop_assert!(dep_position < position, "{} must precede {}", dependency, path);
            }
        }
    }

    #[test]
    fn back_edge_makes_resolution_cyclic(
        deps in dag_strategy(10).prop_filter("needs a dependency", |deps| {
            deps.iter().any(|d| !d.is_empty())
        })
    ) {
        // Pick a task with a dependency and make that dependency depend back
        // on it.
        let (from, task_deps) = deps
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_empty())
            .map(|(i, d)| (i, d.clone()))
            .unwrap();
        let to = task_deps[0];

        let mut manual = build_manual(&deps);
        manual
            .register(
                TaskDefinitionBuilder::new(&task_name(to))
                    .after(&task_name(from))
                    .build(),
            )
            .unwrap();

        let result = manual.calculate_dependencies(&task_name(from));
        prop_assert!(matches!(result, Err(GoferError::CyclicDependency(_))));
    }

    #[test]
    fn merge_appends_for_same_origin_and_replaces_otherwise(
        first in proptest::collection::vec("[a-z]{1,4}", 0..5),
        second in proptest::collection::vec("[a-z]{1,4}", 0..5),
        same_origin in any::<bool>(),
    ) {
        let first_refs: Vec<&str> = first.iter().map(String::as_str).collect();
        let second_refs: Vec<&str> = second.iter().map(String::as_str).collect();
        let second_origin = if same_origin { "one" } else { "two" };

        let mut manual = Manual::new();
        manual
            .register(TaskDefinitionBuilder::new("ns:task").dependencies(&first_refs).origin("one").build())
            .unwrap();
        manual
            .register(TaskDefinitionBuilder::new("ns:task").dependencies(&second_refs).origin(second_origin).build())
            .unwrap();

        let expected: Vec<String> = if same_origin {
            first.iter().chain(second.iter()).cloned().collect()
        } else {
            second.clone()
        };

        let task = manual.index("ns:task").unwrap();
        prop_assert_eq!(task.dependencies().as_slice(), expected.as_slice());
        prop_assert_eq!(manual.iter().filter(|t| t.path() == "ns:task").count(), 1);
    }
}
