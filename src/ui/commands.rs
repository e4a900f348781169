//! Messages posted by the toolbar page through `window.ipc.postMessage`.

use serde::Deserialize;

/// A user action on the browser chrome, as sent by the toolbar page.
///
/// Messages are JSON objects tagged by `cmd`, for example
/// `{"cmd":"navigate","url":"example.com"}` or `{"cmd":"close_tab","index":2}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ToolbarCommand {
    /// The toolbar page finished loading and wants the current state.
    UiReady,
    Navigate { url: String },
    NewTab,
    CloseTab { index: usize },
    SwitchTab { index: usize },
    Back,
    Forward,
    Reload,
    Home,
    Bookmark,
    SaveOffline,
}

impl ToolbarCommand {
    /// Parses one IPC message body. Unknown or malformed messages yield `None`.
    pub fn parse(message: &str) -> Option<Self> {
        match serde_json::from_str(message) {
            Ok(command) => Some(command),
            Err(e) => {
                log::warn!("Ignoring toolbar message {:?}: {}", message, e);
                None
            }
        }
    }
}
