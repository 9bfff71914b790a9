//! End-to-end tests of the `devtools` binary.

mod common;

use assert_cmd::Command;
use common::{files_under, project};
use predicates::prelude::*;

fn devtools() -> Command {
    let mut cmd = Command::cargo_bin("devtools").unwrap();
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn help_prints_usage() {
    devtools()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dist: [(all)|hvm|kernel|website]"));
}

#[test]
fn missing_action_prints_error_and_usage() {
    devtools()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No action provided"))
        .stdout(predicate::str::contains("actions:"));
}

#[test]
fn invalid_action_is_rejected() {
    devtools()
        .arg("deploy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid action: deploy"));
}

#[test]
fn invalid_target_is_rejected_before_any_write() {
    let project = project();

    devtools()
        .arg("--root")
        .arg(project.path())
        .args(["dist", "bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid target: bogus"));

    assert!(!project.path().join("dist").exists());
}

#[test]
fn list_targets_prints_every_target() {
    devtools()
        .arg("list-targets")
        .assert()
        .success()
        .stdout(predicate::str::diff("all hvm kernel website\n"));
}

#[test]
fn dist_website_assembles_output_directory() {
    let project = project();

    devtools()
        .arg("--root")
        .arg(project.path())
        .args(["dist", "website"])
        .assert()
        .success();

    assert_eq!(
        files_under(&project.path().join("dist")),
        vec!["favicon.ico", "index.html", "js/index.js"]
    );
}

#[test]
fn dist_website_honours_out_dir() {
    let project = project();
    let out = tempfile::tempdir().unwrap();

    devtools()
        .arg("--root")
        .arg(project.path())
        .arg("--out-dir")
        .arg(out.path())
        .args(["dist", "website"])
        .assert()
        .success();

    assert!(out.path().join("favicon.ico").is_file());
    assert!(!project.path().join("dist").exists());
}

#[test]
fn failed_step_sets_exit_code() {
    let project = project();
    std::fs::remove_dir_all(project.path().join("website")).unwrap();

    devtools()
        .arg("--root")
        .arg(project.path())
        .args(["dist", "website"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("copying website assets"));
}
