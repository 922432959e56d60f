//! Tests for error handling, validation order, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn repogen() -> Command {
    Command::cargo_bin("repogen").unwrap()
}

#[test]
fn missing_interface_fails_with_exit_2_and_writes_nothing() {
    let temp = TempDir::new().unwrap();

    repogen()
        .current_dir(temp.path())
        .args([
            "make",
            "--repository",
            "UserRepository",
            "--model",
            "User",
            "--yes",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no interface name given"))
        .stderr(predicate::str::contains("--interface"));

    assert!(!temp.path().join("app").exists());
    assert!(!temp.path().join("config").exists());
}

#[test]
fn interface_is_reported_first_when_everything_is_missing() {
    repogen()
        .args(["make"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no interface name given"));
}

#[test]
fn missing_repository_is_reported_once_interface_is_present() {
    repogen()
        .args(["make", "--interface", "UserRepositoryInterface"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no repository class given"));
}

#[test]
fn missing_model_is_reported_last() {
    repogen()
        .args([
            "make",
            "--interface",
            "UserRepositoryInterface",
            "--repository",
            "UserRepository",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no model class given"));
}

#[test]
fn blank_option_values_count_as_missing() {
    repogen()
        .args(["make", "--interface", "  ", "-r", "UserRepository", "-m", "User"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no interface name given"));
}

#[test]
fn broken_root_namespace_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("repogen.toml"),
        "[namespace]\nroot = \"\\\\App\"\n",
    )
    .unwrap();

    repogen()
        .current_dir(temp.path())
        .args([
            "make",
            "-i",
            "UserRepositoryInterface",
            "-r",
            "UserRepository",
            "-m",
            "User",
            "--yes",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("did not converge"));
}

#[test]
fn malformed_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("repogen.toml"), "this is not toml [").unwrap();

    repogen()
        .current_dir(temp.path())
        .args(["make", "-i", "I", "-r", "R", "-m", "M"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_subcommand_exits_2() {
    repogen().arg("frobnicate").assert().failure().code(2);
}
