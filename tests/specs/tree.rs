//! Behavioral specs for nested working directories.

use crate::prelude::*;

const SMALL: &str = r#"
[[targets]]
name = "hello"
command = "echo hello"
"#;

/// > every directory holding oval.toml gets a header with its relative path
#[test]
fn nested_directories_get_headers() {
    let project = Project::empty();
    project.file("b/oval.toml", SMALL);
    project.file("a/oval.toml", SMALL);
    project.file("a/inner/oval.toml", SMALL);
    project.file(".hidden/oval.toml", SMALL);

    similar_asserts::assert_eq!(
        project.stdout(&["list"]),
        "===== a\nhello: echo hello\n===== b\nhello: echo hello\n".to_string()
    );
}

/// > one broken directory does not stop the others
#[test]
fn broken_directory_is_isolated() {
    let project = Project::empty();
    project.file("a/oval.toml", "not toml at all [");
    project.file("b/oval.toml", SMALL);

    project
        .oval(&["-j", "2", "run"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("===== b"))
        .stdout(predicates::str::contains("hello"));
    assert!(project.exists("b/hello.out"));
}
