//! Integration tests for the `staffdesk` CLI binary.
//!
//! Argument parsing, help output, route lookups and config handling run
//! without a backend; the remaining tests point the binary at a wiremock
//! server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `staffdesk` binary with env isolation.
///
/// Clears all `STAFFDESK_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn staffdesk_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("staffdesk");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STAFFDESK_PROFILE")
        .env_remove("STAFFDESK_API_URL")
        .env_remove("STAFFDESK_OUTPUT")
        .env_remove("STAFFDESK_INSECURE")
        .env_remove("STAFFDESK_TIMEOUT")
        .env_remove("STAFFDESK_STRICT_ENVELOPE")
        .env_remove("STAFFDESK_LOG_FORMAT");
    cmd
}

fn staffdesk_cmd() -> assert_cmd::Command {
    staffdesk_cmd_in(Path::new("/tmp/staffdesk-cli-test-nonexistent"))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn envelope(data: Value) -> Value {
    json!({ "success": true, "message": "ok", "data": data, "timestamp": "2024-05-01T10:00:00" })
}

fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = staffdesk_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_views() {
    staffdesk_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("departments")
            .and(predicate::str::contains("staff"))
            .and(predicate::str::contains("dashboard"))
            .and(predicate::str::contains("routes")),
    );
}

#[test]
fn test_version_flag() {
    staffdesk_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("staffdesk"));
}

#[test]
fn test_completions_zsh() {
    staffdesk_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_subcommand() {
    let output = staffdesk_cmd().arg("payroll").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("payroll"));
}

#[test]
fn test_non_numeric_id_is_a_usage_error() {
    let output = staffdesk_cmd()
        .args(["departments", "get", "abc"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Routes ──────────────────────────────────────────────────────────

#[test]
fn test_routes_list_plain() {
    staffdesk_cmd()
        .args(["routes", "list", "--output", "plain"])
        .assert()
        .success()
        .stdout(
            "/\n/staff\n/staff/new\n/staff/:id\n/staff/:id/edit\n\
             /departments\n/departments/new\n/departments/:id/edit\n",
        );
}

#[test]
fn test_routes_resolve_json() {
    let output = staffdesk_cmd()
        .args(["routes", "resolve", "/staff/42/edit", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        json!({ "path": "/staff/42/edit", "name": "StaffEdit", "view": "StaffForm", "id": 42 })
    );
}

#[test]
fn test_routes_resolve_unknown_path() {
    let output = staffdesk_cmd()
        .args(["routes", "resolve", "/staff/abc"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("No route matches"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_missing_api_url_is_a_usage_error() {
    let output = staffdesk_cmd().args(["departments", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("No API URL configured"));
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();

    staffdesk_cmd_in(home.path())
        .args([
            "config",
            "init",
            "--name",
            "local",
            "--url",
            "http://localhost:8080/api",
            "--profile-strict",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Profile 'local' written"));

    staffdesk_cmd_in(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"local\"")
                .and(predicate::str::contains("[profiles.local]"))
                .and(predicate::str::contains("strict_envelope = true")),
        );
}

#[test]
fn test_config_init_rejects_bad_url() {
    let home = tempfile::tempdir().unwrap();
    let output = staffdesk_cmd_in(home.path())
        .args(["config", "init", "--url", "ftp://nowhere"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("unsupported scheme"));
}

#[test]
fn test_config_use_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    let output = staffdesk_cmd_in(home.path())
        .args(["config", "use", "prod"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Profile 'prod' not found"));
}

#[test]
fn test_unknown_profile_flag() {
    let output = staffdesk_cmd()
        .args(["--profile", "prod", "staff", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Against a mock backend ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_departments_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 1, "code": "HQ", "name": "Headquarters", "level": 1, "isActive": true },
            { "id": 2, "code": "ENG", "name": "Engineering", "parentId": 1, "level": 2, "isActive": true }
        ]))))
        .mount(&server)
        .await;

    staffdesk_cmd()
        .args(["--api-url", &api_url(&server), "departments", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Headquarters")
                .and(predicate::str::contains("ENG"))
                .and(predicate::str::contains("Code")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_staff_search_plain_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/staff/search"))
        .and(query_param("name", "li"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 5, "staffNo": "S-005", "name": "Li Wei", "isActive": true },
            { "id": 8, "staffNo": "S-008", "name": "Lin Mei", "isActive": true }
        ]))))
        .mount(&server)
        .await;

    staffdesk_cmd()
        .args(["-u", &api_url(&server), "-o", "plain", "staff", "search", "li"])
        .assert()
        .success()
        .stdout("5\n8\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_read_failure_prints_store_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/staff/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false, "message": "Staff not found", "data": null
        })))
        .mount(&server)
        .await;

    let output = staffdesk_cmd()
        .args(["-u", &api_url(&server), "staff", "get", "99"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(text.contains("Failed to fetch staff details"), "{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_department_create_posts_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/departments"))
        .and(body_json(json!({ "code": "ENG", "name": "Engineering", "isActive": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(
            { "id": 42, "code": "ENG", "name": "Engineering", "level": 1, "isActive": true }
        ))))
        .expect(1)
        .mount(&server)
        .await;

    staffdesk_cmd()
        .args([
            "-u",
            &api_url(&server),
            "-o",
            "plain",
            "departments",
            "create",
            "--code",
            "ENG",
            "--name",
            "Engineering",
        ])
        .assert()
        .success()
        .stdout("42\n")
        .stderr(predicate::str::contains("Department created"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_staff_update_prefills_from_current_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/staff/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 5, "staffNo": "S-005", "name": "Li Wei", "email": "li@example.com",
            "department": { "id": 3, "code": "OPS", "name": "Operations", "level": 1, "isActive": true },
            "isActive": true
        }))))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/staff/5"))
        .and(body_json(json!({
            "staffNo": "S-005", "name": "Li Wei", "email": "li@example.com",
            "position": "Lead", "departmentId": 3, "isActive": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 5, "staffNo": "S-005", "name": "Li Wei", "position": "Lead", "isActive": true
        }))))
        .expect(1)
        .mount(&server)
        .await;

    staffdesk_cmd()
        .args(["-u", &api_url(&server), "-q", "staff", "update", "5", "--position", "Lead"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_can_clear_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/departments/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 4, "code": "QA", "name": "Quality", "description": "Tests things",
            "level": 2, "isActive": true
        }))))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/departments/4"))
        .and(body_json(json!({
            "code": "QA", "name": "Quality", "level": 2, "isActive": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 4, "code": "QA", "name": "Quality", "level": 2, "isActive": true
        }))))
        .expect(1)
        .mount(&server)
        .await;

    staffdesk_cmd()
        .args(["-u", &api_url(&server), "-q", "departments", "update", "4", "--no-description"])
        .assert()
        .success();
}

#[test]
fn test_clear_rejects_unknown_field() {
    staffdesk_cmd()
        .args(["-u", "http://localhost:1/api", "staff", "update", "5", "--clear", "salary"])
        .assert()
        .code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_requires_yes_without_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/departments/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = staffdesk_cmd()
        .args(["-u", &api_url(&server), "departments", "delete", "7"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    staffdesk_cmd()
        .args(["-u", &api_url(&server), "--yes", "departments", "delete", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Department 7 deleted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_failure_exits_with_store_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/staff/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let output = staffdesk_cmd()
        .args(["-u", &api_url(&server), "-y", "staff", "delete", "3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Failed to delete staff"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dashboard_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 1, "code": "HQ", "name": "Headquarters", "level": 1, "isActive": true }
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/staff"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 1, "staffNo": "S-001", "name": "Ana", "isActive": true,
              "department": { "id": 1, "code": "HQ", "name": "Headquarters", "level": 1, "isActive": true } },
            { "id": 2, "staffNo": "S-002", "name": "Bo", "isActive": false }
        ]))))
        .mount(&server)
        .await;

    let output = staffdesk_cmd()
        .args(["-u", &api_url(&server), "-o", "json", "dashboard"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["departmentTotal"], json!(1));
    assert_eq!(value["staffTotal"], json!(2));
    assert_eq!(value["activeStaff"], json!(1));
    assert_eq!(value["unassignedStaff"], json!(1));
    assert_eq!(value["staffPerDepartment"], json!({ "Headquarters": 1 }));
}
