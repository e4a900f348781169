use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Marker appended to tab labels that were cut short.
pub const ELLIPSIS: &str = "...";

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: &str, title: &str, active: bool) -> String;
    fn close_tab_at(&mut self, index: usize) -> Result<bool, TabError>;
    fn switch_tab_at(&mut self, index: usize) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_tab_at(&self, index: usize) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_index(&self) -> Option<usize>;
    fn index_of(&self, tab_id: &str) -> Option<usize>;
    fn tab_count(&self) -> usize;
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
    fn set_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError>;
}

/// In-memory tab collection for the browser window.
///
/// Tabs are kept in strip order. Closing never drops the collection below one
/// tab once a tab exists.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    title_limit: usize,
}

impl TabManager {
    pub fn new(title_limit: usize) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            title_limit,
        }
    }

    pub fn title_limit(&self) -> usize {
        self.title_limit
    }

    fn tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    /// Drops a tab that never got an engine, ignoring the one-tab floor, and
    /// hands the active slot back to `restore_active`.
    pub fn discard(&mut self, tab_id: &str, restore_active: Option<&str>) {
        self.tabs.retain(|t| t.id != tab_id);
        self.active_tab_id = restore_active
            .filter(|id| self.tabs.iter().any(|t| t.id == *id))
            .map(str::to_string)
            .or_else(|| self.tabs.last().map(|t| t.id.clone()));
    }

    fn label_for(&self, title: &str, url: &str) -> String {
        if title.is_empty() {
            truncate_label(url, self.title_limit)
        } else {
            truncate_label(title, self.title_limit)
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(crate::types::settings::TabSettings::default().title_limit)
    }
}

/// Shortens `title` to `limit` characters followed by [`ELLIPSIS`] when it is
/// longer than `limit`; otherwise returns it unchanged.
pub fn truncate_label(title: &str, limit: usize) -> String {
    if title.chars().count() > limit {
        let mut label: String = title.chars().take(limit).collect();
        label.push_str(ELLIPSIS);
        label
    } else {
        title.to_string()
    }
}

impl TabManagerTrait for TabManager {
    /// Create a new tab at the end of the strip. The first tab always becomes
    /// active. Returns the new tab's ID.
    fn create_tab(&mut self, url: &str, title: &str, active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let tab = Tab {
            id: id.clone(),
            url: url.to_string(),
            title: title.to_string(),
            label: self.label_for(title, url),
            loading: false,
        };
        self.tabs.push(tab);
        if active || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id.clone());
        }
        id
    }

    /// Close the tab at `index`. Returns `Ok(false)` without closing anything
    /// when it is the only tab left. When it was active, the tab that slides
    /// into its slot (or the new last tab) becomes active.
    fn close_tab_at(&mut self, index: usize) -> Result<bool, TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.tabs.len() == 1 {
            return Ok(false);
        }

        let removed = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(removed.id.as_str()) {
            let next = index.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[next].id.clone());
        }
        Ok(true)
    }

    fn switch_tab_at(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self.tabs.get(index).ok_or(TabError::InvalidIndex(index))?;
        self.active_tab_id = Some(tab.id.clone());
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_tab_at(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn active_index(&self) -> Option<usize> {
        self.active_tab_id.as_ref().and_then(|id| self.index_of(id))
    }

    fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Record the page URL. Untitled tabs are labelled with the URL.
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let limit = self.title_limit;
        let tab = self.tab_mut(tab_id)?;
        tab.url = url.to_string();
        if tab.title.is_empty() {
            tab.label = truncate_label(url, limit);
        }
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        let label = self.label_for(title, &tab.url);
        let tab = self.tab_mut(tab_id)?;
        tab.title = title.to_string();
        tab.label = label;
        Ok(())
    }

    fn set_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.loading = loading;
        Ok(())
    }
}
