//! MyBrowser UI layer.
//!
//! [`browser_window::BrowserWindow`] holds the window state and talks to page
//! engines through the traits in [`engine`], so it builds and is tested without
//! a display. The `gui` feature adds the `wry` implementation:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The chrome itself is an HTML page in its own webview. Communication between
//! it and the Rust side uses wry IPC.

pub mod browser_window;
pub mod commands;
pub mod engine;

#[cfg(feature = "gui")]
pub mod webview_app;
#[cfg(feature = "gui")]
pub mod webview_engine;
