//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_classdock_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, classdock_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[layout]
header_height = 56.0
sidebar_open = true

[[apps]]
id = "mail"
url = "https://mail.example"
title = "Mail"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.layout.header_height - 56.0).abs() < f64::EPSILON);
    assert!(config.layout.sidebar_open);
    assert_eq!(config.apps.len(), 1);
    assert_eq!(config.apps[0].id, "mail");
    // Defaults preserved
    assert!((config.layout.sidebar_width - 280.0).abs() < f64::EPSILON);
    assert_eq!(config.timing.detach_settle_ms, 0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, classdock_common::ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[timing]\nattach_settle_ms = 99999\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.timing.attach_settle_ms, 150);
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    assert!(!path.exists());

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.apps.len(), 5);

    // A second load parses the freshly written template.
    let again = load_or_create(&path).unwrap();
    assert_eq!(again.apps.len(), 5);
}

#[test]
fn template_parses_to_defaults() {
    let parsed: crate::ClassdockConfig =
        toml::from_str(&template::default_config_toml()).unwrap();
    assert_eq!(parsed.apps.len(), 5);
    assert!(crate::validation::validate(&parsed).is_ok());
}

#[test]
fn default_path_ends_with_classdock_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("classdock/config.toml"));
    }
}
