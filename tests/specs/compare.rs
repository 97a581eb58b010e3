//! Behavioral specs for diff, validate and run-diff.

use crate::prelude::*;

/// > run, validate, diff: an unchanged output passes
#[test]
fn validated_output_passes() {
    let project = Project::demo();
    project.oval(&["run", "demo1"]).assert().success();
    project
        .oval(&["validate", "demo1"])
        .assert()
        .success()
        .stdout("copied demo1.out to demo1.ref\n");
    similar_asserts::assert_eq!(project.stdout(&["diff", "demo1"]), "==\n".to_string());
}

/// > a changed line is reported as removed and added
#[test]
fn changed_line_reported() {
    let project = Project::demo();
    project.file("demo1.ref", "LINE 1\nLINE 20\nLINE 3\n");
    project.oval(&["run", "demo1"]).assert().success();
    project
        .oval(&["diff", "demo1"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("- LINE 20\n"))
        .stdout(predicates::str::contains("+ LINE 2\n"))
        .stdout(predicates::str::contains("LINE 1").not());
}

/// > key/value tokens are compared by key
#[test]
fn differing_value_reported() {
    let project = Project::demo();
    project.file("keys.ref", "C = 3\nA = 1\nB = 2\n");
    project
        .oval(&["run-diff", "keys"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("value differs for B: 2 != 20"));
}

/// > wildcard diff skips targets without comparable files
#[test]
fn wildcard_diff_only_comparable_targets() {
    let project = Project::demo();
    project.file("demo1.ref", "LINE 1\nLINE 2\nLINE 3\n");
    project.oval(&["run", "demo%"]).assert().success();
    similar_asserts::assert_eq!(
        project.stdout(&["diff", "%"]),
        "demo1: ==\n".to_string()
    );
}

/// > a literal target without reference warns about the lacking file
#[test]
fn literal_diff_without_reference_warns() {
    let project = Project::demo();
    project.oval(&["run", "demo2"]).assert().success();
    project
        .oval(&["diff", "demo2"])
        .assert()
        .stderr(predicates::str::contains("lacking file demo2.ref or demo2.md5"));
}

/// > filter-out shows the extracted tokens
#[test]
fn filter_out_shows_tokens() {
    let project = Project::demo();
    project.oval(&["run", "keys"]).assert().success();
    similar_asserts::assert_eq!(
        project.stdout(&["fo", "keys"]),
        "A = 1\nB = 20\nC = 3\n".to_string()
    );
}

/// > JSON output has one object per directory
#[test]
fn json_output() {
    let project = Project::demo();
    project.oval(&["run", "demo1"]).assert().success();
    project.oval(&["validate", "demo1"]).assert().success();
    let stdout = project.stdout(&["-o", "json", "diff", "demo1"]);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["dir"], ".");
    assert_eq!(value["failed"], false);
    assert_eq!(value["lines"][0]["style"], "pass");
    assert_eq!(value["lines"][0]["text"], "==");
}
