// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use gofer::config::{load_and_validate, register_file};
use gofer::errors::GoferError;
use gofer::manual::Manual;

fn temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn file_without_tasks_is_a_config_error() {
    let file = temp_config(
        r#"
[config]
shell = ["bash", "-c"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(GoferError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_shell_is_a_config_error() {
    let file = temp_config(
        r#"
[config]
shell = []

[[task]]
label = "a"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(GoferError::ConfigError(_))
    ));
}

#[test]
fn blank_cmd_is_a_config_error() {
    let file = temp_config(
        r#"
[[task]]
label = "a"
cmd = "   "
"#,
    );

    match load_and_validate(file.path()) {
        Err(GoferError::ConfigError(msg)) => assert!(msg.contains("'a'")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn unknown_field_is_a_toml_error() {
    let file = temp_config(
        r#"
[[task]]
label = "a"
after = ["b"]
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(GoferError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_and_validate("/definitely/not/here/Gofer.toml");
    assert!(matches!(result, Err(GoferError::IoError(_))));
}

#[test]
fn bad_label_in_file_fails_registration() {
    let file = temp_config(
        r#"
[[task]]
label = "build:release"
cmd = "true"
"#,
    );

    let mut manual = Manual::new();
    match register_file(&mut manual, file.path()) {
        Err(GoferError::BadLabel(label)) => assert_eq!(label, "build:release"),
        other => panic!("Expected BadLabel, got: {:?}", other),
    }
    assert!(manual.is_empty());
}
