// file: tests/cli.rs
// version: 1.0.0
// guid: 9c50e8d7-2b16-4f94-81a3-6e74d0b2c5f8

//! Binary-level CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

fn command() -> Command {
    let mut cmd = Command::cargo_bin("sf-field-perms").unwrap();
    // Make session resolution deterministic regardless of the host env
    cmd.env_remove("SF_INSTANCE_URL")
        .env_remove("SF_ACCESS_TOKEN")
        .env_remove("SF_USERNAME")
        .env_remove("SF_API_VERSION");
    cmd
}

#[test]
fn test_help_lists_object_subcommand() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("object"));
}

#[test]
fn test_assign_help_lists_required_flags() {
    command()
        .args(["object", "fields", "permission", "assign", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--object"))
        .stdout(predicate::str::contains("--permission"))
        .stdout(predicate::str::contains("--fieldname"));
}

#[test]
fn test_assign_missing_flags_fails() {
    command()
        .args(["object", "fields", "permission", "assign", "-o", "Account"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_permission_level_fails_without_session() {
    // No session env is set; the level check must fire first
    command()
        .args([
            "object",
            "fields",
            "permission",
            "assign",
            "-o",
            "Account",
            "-p",
            "Write",
            "-f",
            "Foo__c",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Permission requested should be either 'Read' or 'Edit'",
        ));
}

#[test]
fn test_valid_level_without_session_reports_missing_variables() {
    command()
        .args([
            "object",
            "fields",
            "permission",
            "assign",
            "-o",
            "Account",
            "-p",
            "Read",
            "-f",
            "Foo__c",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing environment variables"))
        .stderr(predicate::str::contains("SF_INSTANCE_URL"));
}

#[test]
fn test_auth_file_missing_path_fails() {
    command()
        .args([
            "object",
            "fields",
            "permission",
            "assign",
            "-o",
            "Account",
            "-p",
            "Read",
            "-f",
            "Foo__c",
            "--auth-file",
            "/nonexistent/auth.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read auth file"));
}

#[test]
fn test_auth_file_with_invalid_url_fails_validation() {
    // Arrange
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("auth.json");
    std::fs::write(
        &path,
        r#"{
            "instanceUrl": "not a url",
            "accessToken": "sometoken",
            "username": "admin@example.com"
        }"#,
    )
    .unwrap();

    // Act & Assert
    command()
        .args([
            "object",
            "fields",
            "permission",
            "assign",
            "-o",
            "Account",
            "-p",
            "Read",
            "-f",
            "Foo__c",
            "--auth-file",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL error").or(predicate::str::contains("relative URL")));
}
