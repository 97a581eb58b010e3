// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use tempfile::TempDir;

use super::*;
use crate::timing::split_timing;

#[test]
fn shell_script_merges_stderr() {
    assert_eq!(shell_script("echo hi", TimeMode::Off), "( echo hi ) 2>&1");
}

#[test]
fn shell_script_wraps_timed_commands() {
    assert_eq!(
        shell_script("sleep 1", TimeMode::Real),
        "{ time ( sleep 1 ) ; } 2>&1"
    );
}

#[test]
fn captures_stdout_and_stderr_lines() {
    let tmp = TempDir::new().unwrap();
    let out = run_command("echo LINE 1 && echo LINE 2 >&2", tmp.path(), TimeMode::Off).unwrap();
    assert!(out.success());
    assert_eq!(out.lines, vec!["LINE 1", "LINE 2"]);
}

#[test]
fn runs_in_the_given_directory() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("marker.txt"), "here\n").unwrap();
    let out = run_command("cat marker.txt", tmp.path(), TimeMode::Off).unwrap();
    assert_eq!(out.lines, vec!["here"]);
}

#[test]
fn failing_command_still_captures_output() {
    let tmp = TempDir::new().unwrap();
    let out = run_command("echo partial; exit 3", tmp.path(), TimeMode::Off).unwrap();
    assert!(!out.success());
    assert_eq!(out.status.code(), Some(3));
    assert_eq!(out.lines, vec!["partial"]);
}

#[test]
fn empty_output_has_no_lines() {
    let tmp = TempDir::new().unwrap();
    let out = run_command("true", tmp.path(), TimeMode::Off).unwrap();
    assert!(out.lines.is_empty());
}

#[test]
fn timed_command_ends_with_timing_lines() {
    let tmp = TempDir::new().unwrap();
    let out = run_command("echo done", tmp.path(), TimeMode::Real).unwrap();
    let timed = split_timing(&out.lines, TimeMode::Real);
    assert_eq!(timed.lines, vec!["done"]);
    assert!(timed.duration >= 0.0);
    assert!(out.lines.iter().any(|l| l.starts_with("real")));
}
