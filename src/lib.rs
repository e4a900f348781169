//! MyBrowser: a small tabbed web browser around an embedded engine widget,
//! with local bookmarks, obfuscated history and offline page saving.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
pub mod ui;
