//! End-to-end checks of the `expenses` binary

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use common::FakeBackend;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").expect("bin");
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSE_TRACKER_API_URL");
    cmd
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    expenses(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("expense"))
        .stdout(predicate::str::contains("category"));
}

#[test]
fn status_when_logged_out() {
    let temp = TempDir::new().unwrap();
    expenses(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn protected_command_requires_login() {
    let temp = TempDir::new().unwrap();
    expenses(&temp)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn config_shows_data_directory() {
    let temp = TempDir::new().unwrap();
    expenses(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(temp.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("http://localhost:8080/api"));
}

#[test]
fn invalid_api_url_is_rejected() {
    let temp = TempDir::new().unwrap();
    expenses(&temp)
        .env("EXPENSE_TRACKER_API_URL", "localhost:8080")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API URL must start with http://"));
}

#[test]
fn login_then_status_and_logout() {
    let backend = FakeBackend::start(vec![(200, json!({"token": "abc"}))]);
    let temp = TempDir::new().unwrap();

    expenses(&temp)
        .env("EXPENSE_TRACKER_API_URL", backend.url())
        .args(["login", "--email", "a@b.com", "--password", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"));

    assert_eq!(
        fs::read_to_string(temp.path().join("session.json")).unwrap(),
        r#"{"token":"abc"}"#
    );

    expenses(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    expenses(&temp)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("LOGIN Session"));

    expenses(&temp)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!temp.path().join("session.json").exists());
    assert_eq!(backend.finish().len(), 1);
}

#[test]
fn rejected_session_ends_in_logout() {
    let backend = FakeBackend::start(vec![(401, json!({"error": "Invalid token"}))]);
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("session.json"), r#"{"token":"abc"}"#).unwrap();

    expenses(&temp)
        .env("EXPENSE_TRACKER_API_URL", backend.url())
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Your session has expired"));

    assert!(!temp.path().join("session.json").exists());
}

#[test]
fn unreadable_response_is_reported_once() {
    let backend = FakeBackend::start(vec![(200, json!({"expenses": []}))]);
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("session.json"), r#"{"token":"abc"}"#).unwrap();

    expenses(&temp)
        .env("EXPENSE_TRACKER_API_URL", backend.url())
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The server sent an unexpected response").count(1))
        .stderr(predicate::str::contains("Unexpected response:").not());

    assert!(temp.path().join("session.json").exists());
}
