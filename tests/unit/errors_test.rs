use std::error::Error;
use std::path::PathBuf;

use mybrowser::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_directory_creation_display() {
    let err = StorageError::DirectoryCreation {
        path: PathBuf::from("/data"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to create directory /data: denied");
    assert!(err.source().is_some());
}

#[test]
fn storage_error_io_display() {
    let err = StorageError::Io {
        path: PathBuf::from("/data/bookmarks.json"),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    };
    assert_eq!(
        err.to_string(),
        "Storage I/O error on /data/bookmarks.json: disk full"
    );
}

#[test]
fn storage_error_serialization_display() {
    let err = StorageError::Serialization("trailing comma".to_string());
    assert_eq!(err.to_string(), "Storage serialization error: trailing comma");
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("read failed".to_string()).to_string(),
        "Settings I/O error: read failed"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("foo.bar".to_string()).to_string(),
        "Invalid settings key: foo.bar"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected number".to_string()).to_string(),
        "Invalid settings value: expected number"
    );
}

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

#[test]
fn tab_error_invalid_index_display() {
    let err = TabError::InvalidIndex(99);
    assert_eq!(err.to_string(), "Invalid tab index: 99");
}

// === EngineError Tests ===

#[test]
fn engine_error_display_variants() {
    assert_eq!(
        EngineError::Creation("no display".to_string()).to_string(),
        "Engine widget creation failed: no display"
    );
    assert_eq!(
        EngineError::Operation("script failed".to_string()).to_string(),
        "Engine operation failed: script failed"
    );
}

// === BrowserError Tests ===

#[test]
fn browser_error_is_transparent() {
    let err: BrowserError = TabError::InvalidIndex(3).into();
    assert_eq!(err.to_string(), "Invalid tab index: 3");
    assert!(matches!(err, BrowserError::Tab(TabError::InvalidIndex(3))));

    let err: BrowserError = StorageError::Serialization("x".to_string()).into();
    assert!(matches!(err, BrowserError::Storage(_)));

    let err: BrowserError = EngineError::Operation("y".to_string()).into();
    assert_eq!(err.to_string(), "Engine operation failed: y");
}

#[test]
fn browser_error_boxes_as_dyn_error() {
    let err: Box<dyn Error> = Box::new(BrowserError::from(SettingsError::InvalidKey(
        "k".to_string(),
    )));
    assert_eq!(err.to_string(), "Invalid settings key: k");
}
