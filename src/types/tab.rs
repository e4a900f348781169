use serde::{Deserialize, Serialize};

/// Represents a browser tab with its current page state.
///
/// `label` is what the tab strip shows; it is derived from the page title and
/// truncated by the tab manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub label: String,
    pub loading: bool,
}
