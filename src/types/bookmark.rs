use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Bookmarks carry no identity of their own: the same URL may be saved any
/// number of times and the list order is the order the user added them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}
