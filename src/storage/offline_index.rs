//! Offline Page Index for MyBrowser.
//!
//! Every "save page offline" action appends one JSON line to the metadata log.
//! The log is never rewritten, so saving the same URL twice leaves two
//! records. Snapshots live next to the log, named after a SHA-256 of the URL.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use ring::digest;

use super::paths::StoragePaths;
use crate::types::errors::StorageError;
use crate::types::offline::OfflinePageRecord;

/// Append-only metadata log plus snapshot files for offline pages.
pub struct OfflinePageIndex {
    dir: PathBuf,
    metadata_path: PathBuf,
}

impl OfflinePageIndex {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            dir: paths.offline_dir(),
            metadata_path: paths.offline_metadata_file(),
        }
    }

    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    /// Records a save event for `url` stamped with the current time.
    pub fn add(&self, url: &str, title: &str) -> Result<OfflinePageRecord, StorageError> {
        let record = OfflinePageRecord {
            url: url.to_string(),
            title: title.to_string(),
            saved_at: Utc::now(),
        };
        let line = serde_json::to_string(&record).map_err(|e| {
            StorageError::Serialization(format!("Failed to serialize offline record: {}", e))
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.metadata_path)
            .map_err(|source| self.io_error(source))?;
        writeln!(file, "{}", line).map_err(|source| self.io_error(source))?;

        log::info!("Recorded offline save of {}", url);
        Ok(record)
    }

    /// Reads every record from the metadata log, in the order they were added.
    pub fn records(&self) -> Result<Vec<OfflinePageRecord>, StorageError> {
        let content = match fs::read_to_string(&self.metadata_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| {
                    StorageError::Serialization(format!("Failed to parse offline record: {}", e))
                })
            })
            .collect()
    }

    /// Where the snapshot of `url` is stored: `<offline-dir>/<sha256-hex>.html`.
    pub fn snapshot_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.html", url_hash(url)))
    }

    /// Writes (or replaces) the snapshot of `url`.
    pub fn write_snapshot(&self, url: &str, markup: &str) -> Result<PathBuf, StorageError> {
        let path = self.snapshot_path(url);
        fs::write(&path, markup).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote offline snapshot {}", path.display());
        Ok(path)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.metadata_path.clone(),
            source,
        }
    }
}

/// Lowercase hex SHA-256 of the URL.
fn url_hash(url: &str) -> String {
    digest::digest(&digest::SHA256, url.as_bytes())
        .as_ref()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
