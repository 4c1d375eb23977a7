// tests/integration/config_files.rs

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use gofer::config::{load_and_validate, register_file};
use gofer::manual::Manual;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_tasks_are_registered_in_order_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Gofer.toml",
        r#"
[[task]]
label = "clean"
description = "Remove build output"
cmd = "true"

[[task]]
namespace = "build"
label = "release"
cmd = "true"
dependencies = ["clean"]

[[task]]
label = "all"
dependencies = ["build:release"]
"#,
    );

    let config = load_and_validate(&path).unwrap();
    assert_eq!(config.config.shell.len(), 2);
    assert_eq!(config.task.len(), 3);
    assert_eq!(config.task[1].namespace, "build");
    assert!(config.task[2].cmd.is_none());

    let mut manual = Manual::new();
    let count = register_file(&mut manual, &path).unwrap();
    assert_eq!(count, 3);

    let release = manual.index("build:release").unwrap();
    assert!(release.has_action());
    assert_eq!(*release.dependencies(), ["clean"]);
    assert_eq!(
        release.origin().map(|o| o.as_str().to_string()),
        Some(path.display().to_string())
    );

    assert!(!manual.index("all").unwrap().has_action());
    assert!(!manual.index("build").unwrap().has_action());
    assert_eq!(
        manual.index("clean").unwrap().description(),
        "Remove build output"
    );
}

#[test]
fn repeated_entries_in_one_file_accumulate_dependencies() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Gofer.toml",
        r#"
[[task]]
label = "check"
dependencies = ["fmt"]

[[task]]
label = "check"
dependencies = ["lint"]
"#,
    );

    let mut manual = Manual::new();
    register_file(&mut manual, &path).unwrap();

    assert_eq!(*manual.index("check").unwrap().dependencies(), ["fmt", "lint"]);
}

#[test]
fn second_file_replaces_dependencies_of_shared_tasks() {
    let dir = TempDir::new().unwrap();
    let base = write_file(
        &dir,
        "base.toml",
        r#"
[[task]]
label = "check"
dependencies = ["fmt", "lint"]
"#,
    );
    let local = write_file(
        &dir,
        "local.toml",
        r#"
[[task]]
label = "check"
description = "local override"
dependencies = ["lint"]
"#,
    );

    let mut manual = Manual::new();
    register_file(&mut manual, &base).unwrap();
    register_file(&mut manual, &local).unwrap();

    let check = manual.index("check").unwrap();
    assert_eq!(*check.dependencies(), ["lint"]);
    assert_eq!(check.description(), "local override");
}

#[test]
fn cyclic_file_loads_but_cannot_be_resolved() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Gofer.toml",
        r#"
[[task]]
label = "A"
dependencies = ["B"]

[[task]]
label = "B"
dependencies = ["A"]
"#,
    );

    let mut manual = Manual::new();
    register_file(&mut manual, &path).unwrap();

    let result = manual.calculate_dependencies("A");
    match result {
        Err(gofer::errors::GoferError::CyclicDependency(msg)) => {
            assert_eq!(msg, "A -> B -> A");
        }
        other => panic!("Expected CyclicDependency, got: {:?}", other),
    }
}
