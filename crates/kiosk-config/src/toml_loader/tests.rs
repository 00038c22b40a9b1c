//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_kiosk_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, kiosk_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[web]
home_url = "https://app.example.net"
allowed_domains = ["example.net"]

[window]
width = 1440
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.web.home_url, "https://app.example.net");
    assert_eq!(config.web.allowed_domains, vec!["example.net"]);
    assert_eq!(config.window.width, 1440);
    // Defaults preserved
    assert_eq!(config.window.height, 800);
    assert_eq!(config.app.name, "Kiosk");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, kiosk_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[web]
home_url = "not a url"
"#,
    )
    .unwrap();

    // Validation failures are logged, not fatal, at the loader level.
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.web.home_url, "not a url");
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kiosk").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.web.home_url, "https://example.com");
    assert_eq!(config.web.allowed_domains, vec!["example.com"]);
}

#[test]
fn default_config_path_ends_with_kiosk_config() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("kiosk/config.toml"));
}
