//! MyBrowser storage layer.
//!
//! Flat files under a single data root: a JSON bookmark list, an obfuscated
//! history file and the offline page index. Every store is handed its paths
//! through [`StoragePaths`] and never consults the environment itself.
//!
//! # Usage
//!
//! ```no_run
//! use mybrowser::storage::{BookmarkStore, StoragePaths};
//!
//! let paths = StoragePaths::new("/tmp/mybrowser-data");
//! paths.ensure().expect("failed to create data directories");
//!
//! let store = BookmarkStore::new(&paths);
//! let bookmarks = store.load().expect("failed to load bookmarks");
//! ```

pub mod bookmark_store;
pub mod history_store;
pub mod offline_index;
pub mod paths;

pub use bookmark_store::BookmarkStore;
pub use history_store::HistoryStore;
pub use offline_index::OfflinePageIndex;
pub use paths::StoragePaths;
