//! End-to-end CLI tests for the argument-handling paths
//!
//! These exercise the built binary without any network I/O: usage errors,
//! help, and version all exit before the HTTP request is made.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("gh-activity").expect("binary should build")
}

#[test]
fn test_missing_username_exits_64_with_usage() {
    cmd()
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_flag_exits_64() {
    cmd()
        .args(["octocat", "--frobnicate"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_limit_value_exits_64() {
    cmd().args(["octocat", "--limit"]).assert().code(64);
}

#[test]
fn test_non_numeric_limit_exits_64() {
    cmd()
        .args(["octocat", "--limit", "many"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("invalid limit"));
}

#[test]
fn test_help_exits_zero_and_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("--token"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn test_version_exits_zero() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gh-activity"));
}
