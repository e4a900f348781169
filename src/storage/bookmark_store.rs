//! Bookmark Store for MyBrowser.
//!
//! The whole bookmark list lives in one pretty-printed JSON array and is
//! rewritten on every save. Writes are not atomic: a crash mid-write can
//! leave a truncated file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::paths::StoragePaths;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;

/// JSON-file backed bookmark list.
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            path: paths.bookmarks_file(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the bookmark file with `bookmarks`, preserving order.
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(bookmarks).map_err(|e| {
            StorageError::Serialization(format!("Failed to serialize bookmarks: {}", e))
        })?;
        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Saved {} bookmarks", bookmarks.len());
        Ok(())
    }

    /// Reads the bookmark list. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Bookmark>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse bookmarks file: {}", e))
        })
    }

    /// Appends a bookmark and rewrites the file. Returns the updated list.
    pub fn add(&self, url: &str, title: &str) -> Result<Vec<Bookmark>, StorageError> {
        let mut bookmarks = self.load()?;
        bookmarks.push(Bookmark::new(url, title));
        self.save(&bookmarks)?;
        Ok(bookmarks)
    }
}
