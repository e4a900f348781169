//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, and reset behavior.

use mybrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use mybrowser::types::errors::SettingsError;
use mybrowser::types::settings::BrowserSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(dir.path().join("settings.json"))
}

/// When no config file exists on disk, `load()` must return the built-in
/// default `BrowserSettings` so the browser can start with sensible values.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        BrowserSettings::default(),
        "Loading without a config file must return default settings"
    );
}

/// After calling `set_value`, the change must be persisted to disk so that a
/// completely new SettingsEngine instance reading the same file sees the update.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("general.home_url", serde_json::json!("https://example.com/"))
            .unwrap();
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(
            loaded.general.home_url, "https://example.com/",
            "set_value must persist the change so a new engine instance reads it back"
        );
    }
}

#[test]
fn test_set_value_numeric_field() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine.set_value("tabs.title_limit", serde_json::json!(32)).unwrap();

    assert_eq!(engine.get_settings().tabs.title_limit, 32);
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("general.nope", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("nope.home_url", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

/// A wrongly typed value must be rejected and leave the settings untouched.
#[test]
fn test_wrong_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("window.width", serde_json::json!("wide"));

    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().window.width, 1280);
    assert!(!engine.get_config_path().exists());
}

/// After modifying settings and calling `reset()`, all values must revert to
/// factory defaults and the defaults must be persisted to disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("privacy.record_history", serde_json::json!(false))
        .unwrap();
    engine
        .set_value("window.title", serde_json::json!("Other"))
        .unwrap();

    engine.reset().unwrap();

    assert_eq!(*engine.get_settings(), BrowserSettings::default());
    let mut fresh = engine_in_temp(&dir);
    assert_eq!(fresh.load().unwrap(), BrowserSettings::default());
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{oops").unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

/// Files written before `record_history` existed still load.
#[test]
fn test_missing_record_history_defaults_to_true() {
    let dir = TempDir::new().unwrap();
    let mut defaults = serde_json::to_value(BrowserSettings::default()).unwrap();
    defaults["privacy"]
        .as_object_mut()
        .unwrap()
        .remove("record_history");
    std::fs::write(dir.path().join("settings.json"), defaults.to_string()).unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(engine.load().unwrap().privacy.record_history);
}
