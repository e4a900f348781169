//! Storage path resolution for MyBrowser.
//!
//! [`StoragePaths`] names the data root explicitly; every file and directory
//! the browser touches is derived from it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::StorageError;

/// Resolved locations of every file and directory under the data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    /// Uses `root` as the data root.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the data root beneath a home directory (`<home>/.mybrowser/data`).
    pub fn for_home(home: &Path) -> Self {
        Self::new(platform::data_root_for(home))
    }

    /// Resolves the data root for the current user and makes sure it exists.
    ///
    /// Falls back to the working directory when no home directory is known.
    pub fn resolve_for_current_user() -> Result<Self, StorageError> {
        let home = platform::get_home_dir().unwrap_or_else(|| {
            log::warn!("No home directory found, using the working directory");
            PathBuf::from(".")
        });
        let paths = Self::for_home(&home);
        paths.ensure()?;
        Ok(paths)
    }

    /// Creates the data root and all subdirectories.
    ///
    /// Succeeds without changes when they already exist.
    pub fn ensure(&self) -> Result<(), StorageError> {
        for dir in [
            self.root.clone(),
            self.offline_dir(),
            self.storage_dir(),
            self.cache_dir(),
            self.downloads_dir(),
        ] {
            fs::create_dir_all(&dir).map_err(|source| StorageError::DirectoryCreation {
                path: dir.clone(),
                source,
            })?;
        }
        log::debug!("Data directories ready under {}", self.root.display());
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bookmarks_file(&self) -> PathBuf {
        self.root.join("bookmarks.json")
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join("history.enc")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    /// Directory holding saved page snapshots and their metadata log.
    pub fn offline_dir(&self) -> PathBuf {
        self.root.join("offline")
    }

    pub fn offline_metadata_file(&self) -> PathBuf {
        self.offline_dir().join("metadata.json")
    }

    /// Persistent storage handed to the engine (local storage, IndexedDB).
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join("storage")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join("cache")
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.root.join("downloads")
    }
}
