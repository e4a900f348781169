//! Privacy Engine for MyBrowser.
//!
//! Builds the browser profile shared by every engine widget and enforces the
//! parts of it the engine cannot: the engine keeps cookies in its persistent
//! storage directory, so the session-only cookie policy is applied by deleting
//! any cookie store left behind by a previous run before the first widget is
//! created.

use std::fs;
use std::path::Path;

use crate::storage::StoragePaths;
use crate::types::errors::StorageError;
use crate::types::profile::{BrowserProfile, CacheMode, CookiePolicy};
use crate::types::settings::BrowserSettings;

/// Trait defining privacy engine operations.
pub trait PrivacyEngineTrait {
    fn profile(&self) -> &BrowserProfile;
    /// Applies the cookie policy to the on-disk engine storage.
    /// Returns the number of cookie files removed.
    fn enforce_cookie_policy(&self) -> Result<usize, StorageError>;
}

/// Privacy engine implementation.
pub struct PrivacyEngine {
    profile: BrowserProfile,
}

impl PrivacyEngine {
    /// Builds the standard profile: disk cache, session-only cookies and the
    /// configured user agent, with all directories under the data root.
    pub fn new(paths: &StoragePaths, settings: &BrowserSettings) -> Self {
        Self {
            profile: BrowserProfile {
                storage_dir: paths.storage_dir(),
                cache_dir: paths.cache_dir(),
                downloads_dir: paths.downloads_dir(),
                cache_mode: CacheMode::Disk,
                cookie_policy: CookiePolicy::SessionOnly,
                user_agent: settings.privacy.user_agent.clone(),
            },
        }
    }

    pub fn with_profile(profile: BrowserProfile) -> Self {
        Self { profile }
    }
}

impl PrivacyEngineTrait for PrivacyEngine {
    fn profile(&self) -> &BrowserProfile {
        &self.profile
    }

    fn enforce_cookie_policy(&self) -> Result<usize, StorageError> {
        match self.profile.cookie_policy {
            CookiePolicy::Persistent => Ok(0),
            CookiePolicy::SessionOnly => {
                let removed = purge_cookie_stores(&self.profile.storage_dir)?;
                if removed > 0 {
                    log::info!("Removed {} persisted cookie file(s)", removed);
                }
                Ok(removed)
            }
        }
    }
}

/// Recursively deletes engine cookie databases (`Cookies`, `cookies.sqlite`
/// and their journals) under `dir`. A missing directory removes nothing.
/// Symbolic links are never followed: a link named like a cookie store is
/// removed itself, never its target.
pub fn purge_cookie_stores(dir: &Path) -> Result<usize, StorageError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(source) => {
            return Err(StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry.map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        if file_type.is_dir() {
            removed += purge_cookie_stores(&path)?;
        } else if is_cookie_store(&path) {
            fs::remove_file(&path).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }
    }
    Ok(removed)
}

fn is_cookie_store(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().starts_with("cookies"))
        .unwrap_or(false)
}
