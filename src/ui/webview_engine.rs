//! `wry` implementation of the engine seam.
//!
//! Every tab gets its own child webview of the main window. All of them share
//! one [`WebContext`] rooted at the profile's storage directory, so cookies,
//! local storage and the HTTP cache are common to the whole window.

use std::path::PathBuf;
use std::rc::Rc;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebContext, WebView, WebViewBuilder};

use crate::types::errors::EngineError;
use crate::types::profile::{BrowserProfile, CacheMode};

use super::engine::{EngineEvent, EngineFactory, EngineWidget};
use super::webview_app::UserEvent;

/// Height of the toolbar strip above the page area, in logical pixels.
pub const TOOLBAR_HEIGHT: f64 = 76.0;

const SNAPSHOT_JS: &str = r#""<!DOCTYPE html>\n" + document.documentElement.outerHTML"#;

/// Page area below the toolbar for a window of the given logical size.
pub fn page_bounds(width: f64, height: f64) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, TOOLBAR_HEIGHT).into(),
        size: LogicalSize::new(width, (height - TOOLBAR_HEIGHT).max(0.0)).into(),
    }
}

/// One tab's page view.
pub struct WebViewEngine {
    webview: WebView,
    tab_id: String,
    proxy: EventLoopProxy<UserEvent>,
}

impl WebViewEngine {
    pub fn set_bounds(&self, bounds: Rect) -> Result<(), EngineError> {
        self.webview.set_bounds(bounds).map_err(op_error)
    }

    fn run(&self, script: &str) -> Result<(), EngineError> {
        self.webview.evaluate_script(script).map_err(op_error)
    }
}

impl EngineWidget for WebViewEngine {
    fn load_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.webview.load_url(url).map_err(op_error)
    }

    fn reload(&mut self) -> Result<(), EngineError> {
        self.webview.reload().map_err(op_error)
    }

    fn go_back(&mut self) -> Result<(), EngineError> {
        self.run("history.back()")
    }

    fn go_forward(&mut self) -> Result<(), EngineError> {
        self.run("history.forward()")
    }

    fn request_snapshot(&mut self, url: &str) -> Result<(), EngineError> {
        let proxy = self.proxy.clone();
        let tab_id = self.tab_id.clone();
        let url = url.to_string();
        self.webview
            .evaluate_script_with_callback(SNAPSHOT_JS, move |result| {
                // The callback receives the script's value as JSON.
                let markup = match serde_json::from_str::<String>(&result) {
                    Ok(markup) => markup,
                    Err(e) => {
                        log::warn!("Unreadable snapshot for {}: {}", url, e);
                        return;
                    }
                };
                let _ = proxy.send_event(UserEvent::Engine(EngineEvent::SnapshotReady {
                    tab_id: tab_id.clone(),
                    url: url.clone(),
                    markup,
                }));
            })
            .map_err(op_error)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.webview.set_visible(visible).map_err(op_error)
    }
}

/// Builds page webviews as children of the main window.
///
/// The shared [`WebContext`] is opened with the first widget, after the
/// controller has applied the cookie policy to the storage directory.
pub struct WebViewFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    context: Option<WebContext>,
}

impl WebViewFactory {
    pub fn new(window: Rc<Window>, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            window,
            proxy,
            context: None,
        }
    }

    /// Current page area in logical pixels.
    pub fn bounds(&self) -> Rect {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        page_bounds(size.width, size.height)
    }
}

impl EngineFactory for WebViewFactory {
    type Widget = WebViewEngine;

    fn create(&mut self, tab_id: &str, profile: &BrowserProfile) -> Result<WebViewEngine, EngineError> {
        let bounds = self.bounds();

        let load_proxy = self.proxy.clone();
        let load_tab = tab_id.to_string();
        let title_proxy = self.proxy.clone();
        let title_tab = tab_id.to_string();
        let downloads_dir = profile.downloads_dir.clone();

        let context = self
            .context
            .get_or_insert_with(|| WebContext::new(Some(profile.storage_dir.clone())));

        let webview = WebViewBuilder::new_with_web_context(context)
            .with_user_agent(&profile.user_agent)
            .with_incognito(profile.cache_mode == CacheMode::Memory)
            .with_bounds(bounds)
            .with_visible(false)
            .with_on_page_load_handler(move |event, url| {
                // The URL goes out on both edges so a redirect's target reaches
                // the address bar; the controller records one visit per address.
                let tab_id = load_tab.clone();
                let events = match event {
                    PageLoadEvent::Started => vec![
                        EngineEvent::LoadStarted { tab_id: tab_id.clone() },
                        EngineEvent::UrlChanged { tab_id, url },
                    ],
                    PageLoadEvent::Finished => vec![
                        EngineEvent::UrlChanged { tab_id: tab_id.clone(), url },
                        EngineEvent::LoadFinished { tab_id },
                    ],
                };
                for event in events {
                    let _ = load_proxy.send_event(UserEvent::Engine(event));
                }
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::Engine(EngineEvent::TitleChanged {
                    tab_id: title_tab.clone(),
                    title,
                }));
            })
            .with_download_started_handler(move |url, destination: &mut PathBuf| {
                let name = destination
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| download_name(&url));
                *destination = downloads_dir.join(name);
                log::info!("Downloading {} to {}", url, destination.display());
                true
            })
            .with_devtools(cfg!(debug_assertions))
            .build_as_child(&*self.window)
            .map_err(|e| EngineError::Creation(e.to_string()))?;

        Ok(WebViewEngine {
            webview,
            tab_id: tab_id.to_string(),
            proxy: self.proxy.clone(),
        })
    }
}

/// Last path segment of `url`, or `download` when it has none.
fn download_name(url: &str) -> String {
    url.split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("download")
        .to_string()
}

fn op_error(e: wry::Error) -> EngineError {
    EngineError::Operation(e.to_string())
}
