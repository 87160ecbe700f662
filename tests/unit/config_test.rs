//! Tests for configuration loading and merging

use std::fs;

use tempfile::TempDir;
use trello2md::config::{Config, DEFAULT_LIST_FILTER, ShowConfig, ShowOverrides};
use trello2md::core::models::ExportOptions;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_missing_file_is_default() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
key = "k"
token = "t"
api_url = "http://localhost:9999/1"
board_ids = ["b1", "b2"]
list_filter = "Shipped"

[show]
description = true
comments = true
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.key.as_deref(), Some("k"));
    assert_eq!(config.token.as_deref(), Some("t"));
    assert_eq!(config.api_url.as_deref(), Some("http://localhost:9999/1"));
    assert_eq!(config.board_ids, ["b1", "b2"]);
    assert_eq!(config.list_filter.as_deref(), Some("Shipped"));
    assert_eq!(
        config.show,
        ShowConfig {
            description: true,
            comments: true,
            ..ShowConfig::default()
        }
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "board_ids = \"not a list\"").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config file"));
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("typo.toml");

    let err = Config::load_or_default(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
    assert!(err.to_string().contains("typo.toml"));
}

#[test]
fn test_load_or_default_prefers_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "list_filter = \"Released\"").unwrap();

    let config = Config::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.list_filter.as_deref(), Some("Released"));
}

// =============================================================================
// CREDENTIALS
// =============================================================================

#[test]
fn test_credentials_flags_win() {
    let config = Config {
        key: Some("file-key".to_string()),
        token: Some("file-token".to_string()),
        ..Config::default()
    };

    let creds = config
        .credentials(Some("flag-key".to_string()), None)
        .unwrap();
    assert_eq!(creds.key, "flag-key");
    assert_eq!(creds.token, "file-token");
}

#[test]
fn test_credentials_missing_token() {
    let err = Config::default()
        .credentials(Some("k".to_string()), Some("  ".to_string()))
        .unwrap_err();
    assert!(err.to_string().contains("token"));
}

#[test]
fn test_credentials_debug_hides_token() {
    let creds = Config::default()
        .credentials(Some("k".to_string()), Some("super-secret".to_string()))
        .unwrap();
    assert!(!format!("{creds:?}").contains("super-secret"));
}

// =============================================================================
// EXPORT REQUEST
// =============================================================================

#[test]
fn test_export_request_defaults() {
    let request = Config::default()
        .export_request(vec!["b1".to_string()], None, ShowOverrides::default())
        .unwrap();

    assert_eq!(request.board_ids, ["b1"]);
    assert_eq!(request.list_filter, DEFAULT_LIST_FILTER);
    assert_eq!(request.options, ExportOptions::default());
}

#[test]
fn test_export_request_falls_back_to_config() {
    let config = Config {
        board_ids: vec!["cfg".to_string()],
        list_filter: Some("Shipped".to_string()),
        show: ShowConfig {
            checklists: true,
            ..ShowConfig::default()
        },
        ..Config::default()
    };

    let flags = ShowOverrides {
        comments: Some(true),
        ..ShowOverrides::default()
    };
    let request = config.export_request(vec![String::new()], None, flags).unwrap();

    assert_eq!(request.board_ids, ["cfg"]);
    assert_eq!(request.list_filter, "Shipped");
    assert!(request.options.show_checklists);
    assert!(request.options.show_comments);
    assert!(!request.options.show_description);
}

#[test]
fn test_export_request_explicit_false_beats_config() {
    let config = Config {
        show: ShowConfig {
            checklists: true,
            description: true,
            ..ShowConfig::default()
        },
        ..Config::default()
    };

    let flags = ShowOverrides {
        checklists: Some(false),
        ..ShowOverrides::default()
    };
    let request = config.export_request(vec!["b1".to_string()], None, flags).unwrap();

    assert!(!request.options.show_checklists);
    assert!(request.options.show_description);
}

#[test]
fn test_export_request_flags_replace_config_boards() {
    let config = Config {
        board_ids: vec!["cfg".to_string()],
        ..Config::default()
    };

    let request = config
        .export_request(
            vec!["b1".to_string(), " b2 ".to_string()],
            Some("Done".to_string()),
            ShowOverrides::default(),
        )
        .unwrap();
    assert_eq!(request.board_ids, ["b1", "b2"]);
}

#[test]
fn test_export_request_needs_boards() {
    let err = Config::default()
        .export_request(vec![], None, ShowOverrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("no boards"));
}

#[test]
fn test_export_request_rejects_empty_filter() {
    let err = Config::default()
        .export_request(vec!["b1".to_string()], Some(String::new()), ShowOverrides::default())
        .unwrap_err();
    assert!(err.to_string().contains("list filter"));
}
