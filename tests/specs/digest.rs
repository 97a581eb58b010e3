//! Behavioral specs for crypt and digest comparison.

use crate::prelude::*;

/// > crypt writes <name>.md5 which diff then uses in place of <name>.ref
#[test]
fn crypt_then_diff_against_digests() {
    let project = Project::demo();
    project.oval(&["prod", "keys"]).assert().success();
    project
        .oval(&["crypt", "keys"])
        .assert()
        .success()
        .stdout("crypting keys.ref into keys.md5\n");

    let stored = project.read("keys.md5");
    assert!(!stored.contains(" = "));
    assert_eq!(stored.lines().count(), 3);

    std::fs::remove_file(project.path().join("keys.ref")).unwrap();
    similar_asserts::assert_eq!(project.stdout(&["diff", "keys"]), "==\n".to_string());
}

/// > a changed value no longer matches its digest
#[test]
fn digest_mismatch_fails() {
    let project = Project::demo();
    project.file("keys.ref", "A = 1\nB = 21\nC = 3\n");
    project.oval(&["digest", "keys"]).assert().success();
    std::fs::remove_file(project.path().join("keys.ref")).unwrap();
    project
        .oval(&["run-diff", "keys"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("value differs for B: "))
        .stdout(predicates::str::contains(" != 20"));
}
