use std::path::PathBuf;

use thiserror::Error;

// === StorageError ===

/// Errors raised by the on-disk stores (bookmarks, history, offline index)
/// and by the storage path resolver.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A data directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading or writing a store file failed.
    #[error("Storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A store file could not be serialized or parsed.
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// The provided tab index is out of bounds.
    #[error("Invalid tab index: {0}")]
    InvalidIndex(usize),
}

// === EngineError ===

/// Errors reported by an engine widget.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine widget could not be created.
    #[error("Engine widget creation failed: {0}")]
    Creation(String),
    /// The engine rejected an operation (load, script evaluation, layout).
    #[error("Engine operation failed: {0}")]
    Operation(String),
}

// === BrowserError ===

/// Errors surfaced by the browser window controller.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tab(#[from] TabError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
