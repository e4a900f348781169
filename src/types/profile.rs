use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the engine caches HTTP responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CacheMode {
    /// Responses are cached under the profile's cache directory.
    Disk,
    /// Nothing survives the process.
    Memory,
}

/// Whether cookies outlive the browsing session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CookiePolicy {
    /// Cookies are dropped when the browser exits.
    SessionOnly,
    /// Cookies are kept in the persistent storage directory.
    Persistent,
}

/// Configuration shared by every engine widget the browser window creates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserProfile {
    pub storage_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub downloads_dir: PathBuf,
    pub cache_mode: CacheMode,
    pub cookie_policy: CookiePolicy,
    pub user_agent: String,
}
