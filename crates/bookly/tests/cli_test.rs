//! Integration tests for the `bookly` CLI binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! the offline validation path — all without a live server.
#![allow(clippy::unwrap_used)]

use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `bookly` binary with env isolation.
///
/// Clears all `BOOKLY_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn bookly_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("bookly").unwrap();
    cmd.env("HOME", "/tmp/bookly-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/bookly-cli-test-nonexistent")
        .env_remove("BOOKLY_BASE_URL")
        .env_remove("BOOKLY_TIMEOUT_SECS")
        .env_remove("BOOKLY_DEFAULTS__LANGUAGE");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = bookly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    bookly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("book collection")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("create"))
            .and(predicate::str::contains("delete")),
    );
}

#[test]
fn test_version_flag() {
    bookly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookly"));
}

#[test]
fn test_unknown_subcommand_is_a_usage_error() {
    let output = bookly_cmd().arg("shelve").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    bookly_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Validation (offline — fails before any network call) ────────────

#[test]
fn test_create_without_title_fails_validation() {
    let output = bookly_cmd()
        .args(["create", "--author", "Allen B. Downey"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "Expected validation exit code");
    let text = combined_output(&output);
    assert!(text.contains("Title"), "Expected title message in:\n{text}");
}

#[test]
fn test_create_with_malformed_date_fails_validation() {
    let output = bookly_cmd()
        .args([
            "create",
            "--title",
            "Think Python",
            "--author",
            "Allen B. Downey",
            "--date",
            "2021-1-1",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("YYYY-MM-DD"));
}

#[test]
fn test_create_with_nonpositive_pages_fails_validation() {
    let output = bookly_cmd()
        .args([
            "create",
            "--title",
            "Think Python",
            "--author",
            "Allen B. Downey",
            "--pages",
            "0",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("Page count"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_prints_a_location() {
    bookly_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bookly"));
}

#[test]
fn test_config_show_renders_resolved_defaults() {
    bookly_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("base_url")
                .and(predicate::str::contains("127.0.0.1:8000"))
                .and(predicate::str::contains("English")),
        );
}
