//! Behavioral specs for target selection, listing and running.

use crate::prelude::*;

// =============================================================================
// LIST
// =============================================================================

/// > list prints every target with its command, in descriptor order
#[test]
fn list_prints_targets_in_descriptor_order() {
    let project = Project::demo();
    let stdout = project.stdout(&["list"]);
    let names: Vec<&str> = stdout
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(names, ["demo1", "demo2", "keys", "failing"]);
}

/// > subcommands accept short aliases
#[test]
fn list_alias_with_wildcard() {
    let project = Project::demo();
    project
        .oval(&["l", "demo%"])
        .assert()
        .success()
        .stdout(predicates::str::contains("demo1: echo LINE 1"))
        .stdout(predicates::str::contains("keys").not());
}

/// > an unknown literal target is a warning and does not fail the run
#[test]
fn unknown_target_warns() {
    let project = Project::demo();
    project
        .oval(&["list", "nope", "keys"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown target nope"))
        .stdout(predicates::str::contains("keys: "));
}

// =============================================================================
// RUN
// =============================================================================

/// > a single target echoes every kept line and writes <name>.out
#[test]
fn run_single_target_echoes_output() {
    let project = Project::demo();
    let stdout = project.stdout(&["run", "demo2"]);
    similar_asserts::assert_eq!(stdout, "LINE 10\nLINE 30\n".to_string());
    assert_eq!(project.read("demo2.out"), "LINE 10\nLINE 30\n");
}

/// > several targets echo only the filtered lines, prefixed by target name
#[test]
fn run_several_targets_prefixes_filtered_lines() {
    let project = Project::demo();
    let stdout = project.stdout(&["run", "demo%"]);
    similar_asserts::assert_eq!(
        stdout,
        "demo1: LINE 1\ndemo1: LINE 2\ndemo1: LINE 3\ndemo2: LINE 10\ndemo2: LINE 30\n"
            .to_string()
    );
}

/// > a command that exits non-zero fails the invocation
#[test]
fn run_failing_command_exits_one() {
    let project = Project::demo();
    project
        .oval(&["run", "failing"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("partial"));
    assert!(project.exists("failing.out"));
}

/// > prod runs then promotes the output to reference
#[test]
fn prod_writes_reference() {
    let project = Project::demo();
    project.oval(&["prod", "demo1"]).assert().success();
    assert_eq!(project.read("demo1.ref"), "LINE 1\nLINE 2\nLINE 3\n");
}

/// > the build step runs only for targets that declare one
#[test]
fn build_runs_declared_step() {
    let project = Project::with_config(
        r#"
[[targets]]
name = "app"
command = "cat built.txt"
build = "echo compiled > built.txt && echo building"
"#,
    );
    project
        .oval(&["build"])
        .assert()
        .success()
        .stdout(predicates::str::contains("building"));
    assert_eq!(project.read("built.txt"), "compiled\n");
}

// =============================================================================
// LOGGING
// =============================================================================

/// > the detailed log is written to .oval.log by default
#[test]
fn log_file_written_by_default() {
    let project = Project::demo();
    oval_cmd()
        .args(["--color", "never", "list"])
        .current_dir(project.path())
        .assert()
        .success();
    assert!(project.exists(".oval.log"));
}

/// > no descriptor anywhere is a warning, not an error
#[test]
fn no_descriptor_warns() {
    let project = Project::empty();
    project
        .oval(&["list"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("no oval.toml"));
}

/// > a malformed descriptor fails its directory
#[test]
fn malformed_descriptor_fails() {
    let project = Project::with_config("[[targets]]\nname = 3\n");
    project.oval(&["list"]).assert().code(1);
}
