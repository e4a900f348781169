//! The seam between the browser window and the embedded engine widget.
//!
//! The window controller only talks to engines through [`EngineWidget`] and
//! creates them through an [`EngineFactory`]. Engine notifications come back
//! as [`EngineEvent`] values; in the GUI build they travel through the event
//! loop proxy, so every controller mutation happens on the UI thread.

use crate::types::errors::EngineError;
use crate::types::profile::BrowserProfile;

/// Operations the window controller needs from one engine widget.
pub trait EngineWidget {
    /// Starts loading `url`. Completion is reported through [`EngineEvent`]s.
    fn load_url(&mut self, url: &str) -> Result<(), EngineError>;
    fn reload(&mut self) -> Result<(), EngineError>;
    fn go_back(&mut self) -> Result<(), EngineError>;
    fn go_forward(&mut self) -> Result<(), EngineError>;
    /// Asks the engine to serialize the current page. The markup arrives later
    /// as [`EngineEvent::SnapshotReady`] carrying `url`.
    fn request_snapshot(&mut self, url: &str) -> Result<(), EngineError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError>;
}

/// Creates engine widgets bound to the shared profile.
///
/// Implementations register the URL-change, title-change and load handlers
/// for the new widget so that its notifications are tagged with `tab_id`.
pub trait EngineFactory {
    type Widget: EngineWidget;

    fn create(
        &mut self,
        tab_id: &str,
        profile: &BrowserProfile,
    ) -> Result<Self::Widget, EngineError>;
}

/// Notifications raised asynchronously by engine widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UrlChanged { tab_id: String, url: String },
    TitleChanged { tab_id: String, title: String },
    LoadStarted { tab_id: String },
    LoadFinished { tab_id: String },
    SnapshotReady {
        tab_id: String,
        url: String,
        markup: String,
    },
}
