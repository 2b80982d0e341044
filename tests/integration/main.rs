//! Integration tests for the slackbox CLI
//!
//! These tests run the compiled binary and assert on its exit status and
//! output. The server itself is long-running, so only its startup failure
//! paths are exercised here.

use assert_cmd::cargo;
use predicates::prelude::*;

/// Helper function to create a slackbox command
fn slackbox() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("slackbox"))
}

// =============================================================================
// VERSION AND HELP
// =============================================================================

#[test]
fn test_version_flag() {
    slackbox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slackbox"));
}

#[test]
fn test_version_subcommand() {
    slackbox().arg("version").assert().success().stdout(predicate::str::contains("slackbox v"));
}

#[test]
fn test_help_describes_the_service() {
    slackbox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed Slack deliveries"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_no_arguments_shows_hint() {
    slackbox()
        .assert()
        .success()
        .stdout(predicate::str::contains("slackbox v"))
        .stdout(predicate::str::contains("Run 'slackbox serve' to start the server"));
}

// =============================================================================
// SERVE STARTUP FAILURES
// =============================================================================

#[test]
fn test_serve_rejects_invalid_port() {
    slackbox()
        .arg("serve")
        .env("PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid PORT value 'not-a-port'"));
}

#[test]
fn test_unknown_subcommand_fails() {
    slackbox().arg("bogus").assert().failure();
}
