//! Integration tests for moviecenter-cli
//!
//! These tests drive the real binary against a temporary database and
//! session file. Tests run serially to avoid database lock conflicts.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the moviecenter binary, sandboxed into `dir`
fn moviecenter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moviecenter").unwrap();
    cmd.env("MOVIECENTER_DB_PATH", dir.path().join("moviecenter.db"));
    cmd.env("MOVIECENTER_SESSION_PATH", dir.path().join("session.json"));
    cmd
}

fn register_jane(dir: &TempDir) {
    moviecenter(dir)
        .args([
            "register",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--password",
            "secret1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration successful"));
}

fn login_jane(dir: &TempDir) {
    moviecenter(dir)
        .args(["login", "--email", "jane@example.com", "--password", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Jane Doe"));
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
#[serial]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    moviecenter(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("moviecenter"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("films"));
}

#[test]
#[serial]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    moviecenter(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("moviecenter"));
}

// =============================================================================
// Account Flow Tests
// =============================================================================

#[test]
#[serial]
fn test_register_login_status_logout() {
    let dir = TempDir::new().unwrap();

    register_jane(&dir);
    login_jane(&dir);

    moviecenter(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("jane@example.com"));

    moviecenter(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    moviecenter(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
#[serial]
fn test_register_duplicate_email_fails() {
    let dir = TempDir::new().unwrap();

    register_jane(&dir);

    moviecenter(&dir)
        .args([
            "register",
            "--name",
            "Jane Two",
            "--email",
            "jane@example.com",
            "--password",
            "other1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email already exists"));
}

#[test]
#[serial]
fn test_login_wrong_password_fails() {
    let dir = TempDir::new().unwrap();

    register_jane(&dir);

    moviecenter(&dir)
        .args(["login", "--email", "jane@example.com", "--password", "wrong1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));
}

#[test]
#[serial]
fn test_register_short_password_fails() {
    let dir = TempDir::new().unwrap();

    moviecenter(&dir)
        .args([
            "register",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--password",
            "short",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 6 characters"));
}

// =============================================================================
// Films and Search Tests
// =============================================================================

#[test]
#[serial]
fn test_films_list() {
    let dir = TempDir::new().unwrap();

    moviecenter(&dir)
        .args(["films", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception"))
        .stdout(predicate::str::contains("The Dark Knight"));
}

#[test]
#[serial]
fn test_films_show_json() {
    let dir = TempDir::new().unwrap();

    moviecenter(&dir)
        .args(["films", "show", "inception", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Inception\""))
        .stdout(predicate::str::contains("poster_url"));
}

#[test]
#[serial]
fn test_films_show_unknown_title() {
    let dir = TempDir::new().unwrap();

    moviecenter(&dir)
        .args(["films", "show", "No Such Film"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No film titled"));
}

#[test]
#[serial]
fn test_search_works_logged_out() {
    let dir = TempDir::new().unwrap();

    // Search is available before login; it just isn't recorded
    moviecenter(&dir)
        .args(["search", "matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Matrix"));
}

// =============================================================================
// History Tests
// =============================================================================

#[test]
#[serial]
fn test_history_requires_login() {
    let dir = TempDir::new().unwrap();

    moviecenter(&dir)
        .args(["history", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
#[serial]
fn test_search_records_history_when_logged_in() {
    let dir = TempDir::new().unwrap();

    register_jane(&dir);
    login_jane(&dir);

    moviecenter(&dir).args(["search", "batman"]).assert().success();
    moviecenter(&dir).args(["search", "inception"]).assert().success();

    // Most recent first
    let output = moviecenter(&dir)
        .args(["history", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let inception_pos = stdout.find("inception").unwrap();
    let batman_pos = stdout.find("batman").unwrap();
    assert!(inception_pos < batman_pos);

    moviecenter(&dir)
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2"));

    moviecenter(&dir)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to show"));
}
