//! Tests for configuration loading and saving

use ecoinspect::config::{CONFIG_TEMPLATE, Config};
use ecoinspect::core::models::{AccessPolicy, Classification, Role};
use ecoinspect::core::services::KeywordError;
use ecoinspect::paths;
use tempfile::TempDir;

#[test]
fn test_load_from_records_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "[server]\nport = 9090\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.source.as_deref(), Some(path.as_path()));
}

#[test]
fn test_explicit_missing_path_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    let err = Config::load_in(Some(&missing), temp.path()).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}

#[test]
fn test_explicit_path_wins_over_project_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(paths::project_config(temp.path()), "[server]\nport = 1111\n").unwrap();
    let explicit = temp.path().join("explicit.toml");
    std::fs::write(&explicit, "[server]\nport = 2222\n").unwrap();

    let config = Config::load_in(Some(&explicit), temp.path()).unwrap();
    assert_eq!(config.server.port, 2222);
}

#[test]
fn test_malformed_explicit_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_save_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/ecoinspect.toml");

    let mut config = Config::default();
    config.keywords.positive.push("adequate".to_string());
    config
        .access
        .routes
        .insert("reports".to_string(), AccessPolicy::allow([Role::Admin, Role::Staff]));
    config.output.color = false;
    config.save(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.keywords.positive, vec!["adequate".to_string()]);
    assert!(!loaded.output.color);
    assert!(loaded.access.routes["reports"].permits(Role::Staff));
    assert!(!loaded.access.routes["reports"].permits(Role::User));
}

#[test]
fn test_template_round_trips_through_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ecoinspect.toml");
    Config::parse(CONFIG_TEMPLATE).unwrap().save(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.server.port, 8080);
}

#[test]
fn test_conflicting_keywords_surface_from_classifier() {
    let config = Config::parse("[keywords]\nnegative = [\"ok\"]\n").unwrap();
    let err = config.classifier().unwrap_err();
    assert!(matches!(err, KeywordError::Conflict { .. }));
}

#[test]
fn test_extended_keywords_keep_builtins() {
    let config = Config::parse("[keywords]\nnegative = [\"Missing\"]\n").unwrap();
    let classifier = config.classifier().unwrap();
    assert_eq!(classifier.classify(Some("missing")), Classification::Negative);
    assert_eq!(classifier.classify(Some("no")), Classification::Negative);
    assert_eq!(classifier.classify(Some("yes")), Classification::Positive);
    assert_eq!(classifier.negative().version, "v1+local");
}

#[test]
fn test_route_override_replaces_only_named_routes() {
    let config = Config::parse("[access.routes]\nusers = [\"admin\", \"staff\"]\n").unwrap();
    let table = config.route_table();
    assert!(table.authorize("users", Some(Role::Staff)).is_ok());
    assert!(table.authorize("reports", Some(Role::Staff)).is_err());
    assert!(table.authorize("dashboard", Some(Role::User)).is_ok());
}
