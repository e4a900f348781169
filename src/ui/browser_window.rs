//! Browser window controller.
//!
//! [`BrowserWindow`] owns the tab collection, the address bar text, the shared
//! browser profile and the stores. User actions come in as method calls (or
//! [`ToolbarCommand`]s); engine notifications come in through
//! [`BrowserWindow::handle_event`]. It never touches a real window, so the
//! same code drives the `wry` runtime and the tests.

use std::collections::HashMap;

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::privacy_engine::{PrivacyEngine, PrivacyEngineTrait};
use crate::storage::{BookmarkStore, HistoryStore, OfflinePageIndex, StoragePaths};
use crate::types::bookmark::Bookmark;
use crate::types::errors::{BrowserError, TabError};
use crate::types::history::HistoryEntry;
use crate::types::offline::OfflinePageRecord;
use crate::types::profile::BrowserProfile;
use crate::types::settings::BrowserSettings;

use super::commands::ToolbarCommand;
use super::engine::{EngineEvent, EngineFactory, EngineWidget};

/// Scheme prepended to addresses typed without one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Title shown for a tab before its page reports one.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Schemes that are complete without `//`.
const OPAQUE_SCHEMES: &[&str] = &["about:", "data:", "file:", "javascript:", "mailto:"];

/// Turns address-bar input into a loadable address.
///
/// Input that already names a scheme is returned trimmed; anything else gets
/// [`DEFAULT_SCHEME`] prepended. No other validation happens here: malformed
/// addresses are left for the engine to reject. Blank input yields `None`.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if trimmed.contains("://") || OPAQUE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return Some(trimmed.to_string());
    }
    Some(format!("{}{}", DEFAULT_SCHEME, trimmed))
}

/// The browser window's state and the glue between chrome, engines and stores.
pub struct BrowserWindow<F: EngineFactory> {
    factory: F,
    privacy: PrivacyEngine,
    settings: BrowserSettings,
    tabs: TabManager,
    engines: HashMap<String, F::Widget>,
    /// Last URL recorded in history per tab during the current load.
    visited: HashMap<String, String>,
    address_bar: String,
    bookmarks: BookmarkStore,
    history: HistoryStore,
    offline: OfflinePageIndex,
}

impl<F: EngineFactory> BrowserWindow<F> {
    /// Builds the window state and applies the profile. No tab is opened yet.
    ///
    /// The session-only cookie policy is enforced here, before any engine
    /// widget exists.
    pub fn new(
        factory: F,
        paths: &StoragePaths,
        settings: BrowserSettings,
    ) -> Result<Self, BrowserError> {
        let privacy = PrivacyEngine::new(paths, &settings);
        privacy.enforce_cookie_policy()?;

        Ok(Self {
            factory,
            tabs: TabManager::new(settings.tabs.title_limit),
            privacy,
            settings,
            engines: HashMap::new(),
            visited: HashMap::new(),
            address_bar: String::new(),
            bookmarks: BookmarkStore::new(paths),
            history: HistoryStore::new(paths),
            offline: OfflinePageIndex::new(paths),
        })
    }

    pub fn profile(&self) -> &BrowserProfile {
        self.privacy.profile()
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn engine(&self, tab_id: &str) -> Option<&F::Widget> {
        self.engines.get(tab_id)
    }

    pub fn engines_mut(&mut self) -> impl Iterator<Item = &mut F::Widget> {
        self.engines.values_mut()
    }

    /// Opens a tab with a fresh engine widget, makes it active and starts
    /// loading `url`. Returns the new tab's ID.
    pub fn add_tab(&mut self, url: &str, title: &str) -> Result<String, BrowserError> {
        let previous = self.tabs.get_active_tab().map(|t| t.id.clone());
        let tab_id = self.tabs.create_tab(url, title, true);
        let engine = match self.factory.create(&tab_id, self.privacy.profile()) {
            Ok(engine) => engine,
            Err(e) => {
                self.tabs.discard(&tab_id, previous.as_deref());
                return Err(e.into());
            }
        };

        self.engines.insert(tab_id.clone(), engine);
        self.show_active()?;
        log::info!("Opened tab {} ({} total)", tab_id, self.tabs.tab_count());

        if let Some(address) = normalize_url(url) {
            self.load_in(&tab_id, &address)?;
        }
        Ok(tab_id)
    }

    /// Opens a tab on the home page.
    pub fn new_tab(&mut self) -> Result<String, BrowserError> {
        let home = self.settings.general.home_url.clone();
        self.add_tab(&home, NEW_TAB_TITLE)
    }

    /// Closes the tab at `index` unless it is the last one.
    /// Returns whether a tab was closed.
    pub fn close_tab(&mut self, index: usize) -> Result<bool, BrowserError> {
        let tab_id = self
            .tabs
            .get_tab_at(index)
            .map(|t| t.id.clone())
            .ok_or(TabError::InvalidIndex(index))?;

        if !self.tabs.close_tab_at(index)? {
            log::debug!("Refusing to close the last tab");
            return Ok(false);
        }
        self.engines.remove(&tab_id);
        self.visited.remove(&tab_id);
        self.show_active()?;
        Ok(true)
    }

    pub fn switch_tab(&mut self, index: usize) -> Result<(), BrowserError> {
        self.tabs.switch_tab_at(index)?;
        self.show_active()
    }

    /// Loads the address typed in the address bar into the active tab.
    /// Returns the address actually requested, or `None` for blank input.
    pub fn navigate(&mut self, text: &str) -> Result<Option<String>, BrowserError> {
        let Some(address) = normalize_url(text) else {
            return Ok(None);
        };
        let tab_id = self.active_tab_id()?;
        self.load_in(&tab_id, &address)?;
        Ok(Some(address))
    }

    pub fn go_home(&mut self) -> Result<(), BrowserError> {
        let home = self.settings.general.home_url.clone();
        self.navigate(&home).map(|_| ())
    }

    pub fn back(&mut self) -> Result<(), BrowserError> {
        Ok(self.active_engine()?.go_back()?)
    }

    pub fn forward(&mut self) -> Result<(), BrowserError> {
        Ok(self.active_engine()?.go_forward()?)
    }

    pub fn reload(&mut self) -> Result<(), BrowserError> {
        Ok(self.active_engine()?.reload()?)
    }

    /// Saves the active page as a bookmark.
    pub fn bookmark_current(&mut self) -> Result<Bookmark, BrowserError> {
        let (url, title) = self.active_page()?;
        self.bookmarks.add(&url, &title)?;
        log::info!("Bookmarked {}", url);
        Ok(Bookmark::new(url, title))
    }

    pub fn bookmarks(&self) -> Result<Vec<Bookmark>, BrowserError> {
        Ok(self.bookmarks.load()?)
    }

    /// Stored history entries, decoded.
    pub fn history(&self) -> Result<Vec<String>, BrowserError> {
        Ok(self.history.load()?)
    }

    /// Asks the engine for a snapshot of the active page and records the save
    /// in the offline index.
    ///
    /// The record is written whether or not the snapshot request succeeds; the
    /// snapshot file itself appears when [`EngineEvent::SnapshotReady`] arrives.
    pub fn save_page_offline(&mut self) -> Result<OfflinePageRecord, BrowserError> {
        let (url, title) = self.active_page()?;
        if let Err(e) = self.active_engine()?.request_snapshot(&url) {
            log::warn!("Snapshot request for {} failed: {}", url, e);
        }
        Ok(self.offline.add(&url, &title)?)
    }

    /// Applies one toolbar action.
    pub fn execute(&mut self, command: ToolbarCommand) -> Result<(), BrowserError> {
        match command {
            ToolbarCommand::UiReady => Ok(()),
            ToolbarCommand::Navigate { url } => self.navigate(&url).map(|_| ()),
            ToolbarCommand::NewTab => self.new_tab().map(|_| ()),
            ToolbarCommand::CloseTab { index } => self.close_tab(index).map(|_| ()),
            ToolbarCommand::SwitchTab { index } => self.switch_tab(index),
            ToolbarCommand::Back => self.back(),
            ToolbarCommand::Forward => self.forward(),
            ToolbarCommand::Reload => self.reload(),
            ToolbarCommand::Home => self.go_home(),
            ToolbarCommand::Bookmark => self.bookmark_current().map(|_| ()),
            ToolbarCommand::SaveOffline => self.save_page_offline().map(|_| ()),
        }
    }

    /// Applies an engine notification. Events for tabs that have since been
    /// closed are ignored.
    ///
    /// A URL is recorded in history once per load: repeated `UrlChanged`
    /// events for the same address between two `LoadStarted`s add nothing.
    pub fn handle_event(&mut self, event: EngineEvent) -> Result<(), BrowserError> {
        match event {
            EngineEvent::UrlChanged { tab_id, url } => {
                if self.tabs.get_tab(&tab_id).is_none() {
                    return Ok(());
                }
                self.tabs.update_tab_url(&tab_id, &url)?;
                if self.is_active(&tab_id) {
                    self.address_bar = url.clone();
                }
                if self.visited.get(&tab_id) != Some(&url) {
                    self.record_visit(&url);
                    self.visited.insert(tab_id, url);
                }
            }
            EngineEvent::TitleChanged { tab_id, title } => {
                if self.tabs.get_tab(&tab_id).is_some() {
                    self.tabs.update_tab_title(&tab_id, &title)?;
                }
            }
            EngineEvent::LoadStarted { tab_id } => {
                if self.tabs.get_tab(&tab_id).is_some() {
                    self.visited.remove(&tab_id);
                    self.tabs.set_loading(&tab_id, true)?;
                }
            }
            EngineEvent::LoadFinished { tab_id } => {
                if self.tabs.get_tab(&tab_id).is_some() {
                    self.tabs.set_loading(&tab_id, false)?;
                }
            }
            EngineEvent::SnapshotReady { url, markup, .. } => {
                self.offline.write_snapshot(&url, &markup)?;
            }
        }
        Ok(())
    }

    /// Serializable view of the chrome: tab labels, active index, address bar.
    pub fn toolbar_state(&self) -> serde_json::Value {
        let tabs: Vec<serde_json::Value> = self
            .tabs
            .get_all_tabs()
            .iter()
            .map(|t| serde_json::json!({"label": t.label, "url": t.url, "loading": t.loading}))
            .collect();
        serde_json::json!({
            "tabs": tabs,
            "active": self.tabs.active_index(),
            "address": self.address_bar,
        })
    }

    fn record_visit(&self, url: &str) {
        if !self.settings.privacy.record_history {
            return;
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return;
        }
        let entry = HistoryEntry::now(url).to_string();
        if let Err(e) = self.history.append(&entry) {
            log::warn!("Failed to record history for {}: {}", url, e);
        }
    }

    fn load_in(&mut self, tab_id: &str, address: &str) -> Result<(), BrowserError> {
        self.tabs.update_tab_url(tab_id, address)?;
        self.tabs.set_loading(tab_id, true)?;
        if self.is_active(tab_id) {
            self.address_bar = address.to_string();
        }
        let engine = self
            .engines
            .get_mut(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        log::debug!("Loading {} in tab {}", address, tab_id);
        Ok(engine.load_url(address)?)
    }

    /// Shows the active tab's engine, hides the rest and syncs the address bar.
    fn show_active(&mut self) -> Result<(), BrowserError> {
        let active = self.tabs.get_active_tab().map(|t| (t.id.clone(), t.url.clone()));
        for (id, engine) in self.engines.iter_mut() {
            let visible = active.as_ref().map(|(a, _)| a == id).unwrap_or(false);
            engine.set_visible(visible)?;
        }
        self.address_bar = active.map(|(_, url)| url).unwrap_or_default();
        Ok(())
    }

    fn is_active(&self, tab_id: &str) -> bool {
        self.tabs
            .get_active_tab()
            .map(|t| t.id == tab_id)
            .unwrap_or(false)
    }

    fn active_tab_id(&self) -> Result<String, BrowserError> {
        self.tabs
            .get_active_tab()
            .map(|t| t.id.clone())
            .ok_or_else(|| TabError::NotFound("active tab".to_string()).into())
    }

    fn active_page(&self) -> Result<(String, String), BrowserError> {
        let tab = self
            .tabs
            .get_active_tab()
            .ok_or_else(|| TabError::NotFound("active tab".to_string()))?;
        Ok((tab.url.clone(), tab.title.clone()))
    }

    fn active_engine(&mut self) -> Result<&mut F::Widget, BrowserError> {
        let tab_id = self.active_tab_id()?;
        self.engines
            .get_mut(&tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id).into())
    }
}
