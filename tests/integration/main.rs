//! Integration tests for the ecoinspect CLI
//!
//! These tests run the binary against record exports written to a
//! temporary directory. Each command gets its own config home so a
//! developer's global config never leaks in.

mod workflow_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create an ecoinspect command isolated in `dir`
fn ecoinspect_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("ecoinspect"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("ECOINSPECT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a record export
fn write_records(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const MIXED: &str = r#"[
    {"response_text": "Yes", "establishment": "EST-1", "report": "R-1"},
    {"response_text": "No", "establishment": "EST-1", "report": "R-1", "notes": "Replace seal"},
    {"response_text": "N/A", "establishment": "EST-2", "report": "R-2"},
    {"response_text": "unclear", "establishment": "EST-2", "report": "R-2"}
]"#;

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecoinspect"));
}

#[test]
fn test_version_command() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("ecoinspect v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("authorize"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

// =============================================================================
// CLASSIFY
// =============================================================================

#[test]
fn test_classify_human() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["classify", "Yes", "broken", "Not applicable here", "maybe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Positive] Yes"))
        .stdout(predicate::str::contains("[Negative] broken"))
        .stdout(predicate::str::contains("[N/A] Not applicable here"))
        .stdout(predicate::str::contains("[Unknown] maybe"));
}

#[test]
fn test_classify_json() {
    let temp = TempDir::new().unwrap();
    let output = ecoinspect_in(temp.path())
        .args(["--json", "classify", "  OK  ", "n/a"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["results"][0]["classification"], "positive");
    assert_eq!(json["results"][1]["classification"], "not_applicable");
}

// =============================================================================
// SUMMARIZE / ANNOTATE
// =============================================================================

#[test]
fn test_summarize_json() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), "records.json", MIXED);

    let output = ecoinspect_in(temp.path())
        .args(["--json", "summarize", "records.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summary = &json["summary"];
    assert_eq!(summary["positive_count"], 1);
    assert_eq!(summary["negative_count"], 1);
    assert_eq!(summary["na_count"], 1);
    assert_eq!(summary["unknown_count"], 1);
    assert_eq!(summary["total_count"], 4);
    assert_eq!(summary["compliance_percent"], 50.0);
    assert_eq!(json["keyword_version"], "v1");
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_summarize_human() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), "records.json", MIXED);

    ecoinspect_in(temp.path())
        .args(["summarize", "records.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compliance: 50.0%"))
        .stdout(predicate::str::contains("matched no keyword"));
}

#[test]
fn test_summarize_grouped_by_establishment() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), "records.json", MIXED);

    let output = ecoinspect_in(temp.path())
        .args(["--json", "summarize", "records.json", "--by", "establishment"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["group_by"], "establishment");
    assert_eq!(json["groups"]["EST-1"]["compliance_percent"], 50.0);
    assert!(json["groups"]["EST-2"]["compliance_percent"].is_null());
}

#[test]
fn test_summarize_rejects_unknown_grouping() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), "records.json", MIXED);

    ecoinspect_in(temp.path())
        .args(["summarize", "records.json", "--by", "inspector"])
        .assert()
        .failure();
}

#[test]
fn test_summarize_only_not_applicable() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), "na.json", r#"[{"response_text": "N/A"}, {"response_text": null}]"#);

    ecoinspect_in(temp.path())
        .args(["summarize", "na.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compliance: N/A"));
}

#[test]
fn test_summarize_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["summarize", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input not found"));
}

#[test]
fn test_annotate_flags_expired() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), "records.json", MIXED);

    let output = ecoinspect_in(temp.path())
        .args(["--json", "annotate", "records.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["expired_count"], 1);
    assert_eq!(json["records"][1]["expired"], true);
    assert_eq!(json["records"][1]["classification"], "negative");
    assert_eq!(json["records"][0]["expired"], false);
}

// =============================================================================
// KEYWORDS / AUTHORIZE
// =============================================================================

#[test]
fn test_keywords_lists_builtin_sets() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive (v1"))
        .stdout(predicate::str::contains("malfunctioning"));
}

#[test]
fn test_authorize_allowed() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["authorize", "inspections", "--role", "staff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOWED"));
}

#[test]
fn test_authorize_denied() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["authorize", "reports", "--role", "user"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("DENIED"))
        .stderr(predicate::str::contains("may not access"));
}

#[test]
fn test_authorize_without_role() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path()).args(["authorize", "dashboard"]).assert().failure();
}

#[test]
fn test_authorize_invalid_role() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["authorize", "dashboard", "--role", "guest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid role"));
}

// =============================================================================
// SERVE
// =============================================================================

#[cfg(not(feature = "server"))]
#[test]
fn test_serve_requires_feature() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("server"));
}
