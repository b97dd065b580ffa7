//! Integration tests for the seedling binary.
//!
//! The wizard itself needs a terminal, so these cover the non-interactive
//! surface: help, version, completions, and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_flag_describes_the_tool() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provisions a new project"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_cargo() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_bash_emits_a_script() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seedling"));
}

#[test]
fn completions_rejects_unknown_shell() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.args(["completions", "tcsh"]).assert().failure().code(2);
}

#[test]
fn quiet_and_verbose_conflict_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.args(["--quiet", "--verbose", "completions", "bash"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.arg("definitely-not-a-command").assert().failure().code(2);
}

#[test]
fn missing_explicit_config_file_exits_with_config_code() {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.args(["--config", "/definitely/not/a/config.toml", "completions", "bash"])
        .assert()
        .failure()
        .code(4);
}
