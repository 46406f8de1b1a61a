//! Configuration workflows: init, edit, then use the config

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::{ecoinspect_in, write_records};

#[test]
fn test_config_init_creates_project_file() {
    let temp = TempDir::new().unwrap();

    ecoinspect_in(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ecoinspect.toml"));
    assert!(temp.path().join("ecoinspect.toml").exists());

    ecoinspect_in(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    ecoinspect_in(temp.path())
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}

#[test]
fn test_project_config_extends_keywords() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("ecoinspect.toml"),
        "[keywords]\npositive = [\"adequate\"]\nnegative = [\"leaking\"]\n",
    )
    .unwrap();
    write_records(
        temp.path(),
        "records.json",
        r#"[{"response_text": "Adequate"}, {"response_text": "leaking"}, {"response_text": "yes"}]"#,
    );

    let output = ecoinspect_in(temp.path())
        .args(["--json", "summarize", "records.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["keyword_version"], "v1+local");
    assert_eq!(json["summary"]["positive_count"], 2);
    assert_eq!(json["summary"]["negative_count"], 1);
    assert_eq!(json["summary"]["unknown_count"], 0);
}

#[test]
fn test_explicit_config_overrides_routes() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[access.routes]\nreports = [\"admin\", \"staff\"]\n").unwrap();

    ecoinspect_in(temp.path())
        .args(["authorize", "reports", "--role", "staff"])
        .assert()
        .failure();

    ecoinspect_in(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["authorize", "reports", "--role", "staff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOWED"));
}

#[test]
fn test_conflicting_keywords_fail() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ecoinspect.toml"), "[keywords]\npositive = [\"broken\"]\n")
        .unwrap();

    ecoinspect_in(temp.path())
        .args(["classify", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the negative set"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["--config", "nowhere.toml", "keywords"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.toml"));
}

#[test]
fn test_config_show_reports_source() {
    let temp = TempDir::new().unwrap();
    ecoinspect_in(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: defaults"))
        .stdout(predicate::str::contains("port = 8080"));
}
