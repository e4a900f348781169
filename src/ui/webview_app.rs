//! WebView-based browser application using `wry` + `tao`.
//!
//! Architecture:
//! - The toolbar (tab strip, navigation buttons, address bar) is a child
//!   webview across the top of the window, rendered from
//!   `resources/ui/toolbar.html`.
//! - Each tab is another child webview filling the area below it; only the
//!   active tab's view is visible.
//! - IPC from the toolbar via `window.ipc.postMessage()`, state back to it via
//!   `evaluate_script("window.__mb_update(...)")`.
//! - Engine callbacks and toolbar messages both arrive as [`UserEvent`]s, so
//!   the controller is only ever touched from the event loop.

use std::error::Error;
use std::rc::Rc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{Rect, WebView, WebViewBuilder};

use crate::app::App;

use super::browser_window::BrowserWindow;
use super::commands::ToolbarCommand;
use super::engine::EngineEvent;
use super::webview_engine::{page_bounds, WebViewFactory, TOOLBAR_HEIGHT};

#[derive(Debug)]
pub enum UserEvent {
    /// Raw IPC message body from the toolbar page.
    Toolbar(String),
    Engine(EngineEvent),
}

const TOOLBAR_HTML: &str = include_str!("../../resources/ui/toolbar.html");

fn toolbar_bounds(width: f64) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width, TOOLBAR_HEIGHT).into(),
    }
}

fn push_state(toolbar: &WebView, browser: &BrowserWindow<WebViewFactory>) {
    let js = format!(
        "if(window.__mb_update)window.__mb_update({})",
        browser.toolbar_state()
    );
    if let Err(e) = toolbar.evaluate_script(&js) {
        log::warn!("Toolbar update failed: {}", e);
    }
}

fn handle_user_event(browser: &mut BrowserWindow<WebViewFactory>, event: UserEvent) {
    match event {
        UserEvent::Toolbar(message) => {
            let Some(command) = ToolbarCommand::parse(&message) else {
                return;
            };
            log::debug!("Toolbar command {:?}", command);
            if let Err(e) = browser.execute(command) {
                log::warn!("Toolbar command failed: {}", e);
            }
        }
        UserEvent::Engine(event) => {
            if let Err(e) = browser.handle_event(event) {
                log::warn!("Engine event failed: {}", e);
            }
        }
    }
}

/// Runs the tabbed browser until its window is closed.
///
/// Returns only on a startup failure; once the event loop starts, the process
/// exits from inside it.
pub fn run() -> Result<(), Box<dyn Error>> {
    let mut app = App::for_current_user()?;
    let settings = app.startup()?;
    log::info!("Data root: {}", app.paths.root().display());

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = Rc::new(
        WindowBuilder::new()
            .with_title(&settings.window.title)
            .with_inner_size(tao::dpi::LogicalSize::new(
                settings.window.width as f64,
                settings.window.height as f64,
            ))
            .build(&event_loop)?,
    );

    let ipc_proxy = proxy.clone();
    let toolbar = WebViewBuilder::new()
        .with_html(TOOLBAR_HTML)
        .with_bounds(toolbar_bounds(settings.window.width as f64))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = ipc_proxy.send_event(UserEvent::Toolbar(msg.body().clone()));
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(&*window)?;

    let factory = WebViewFactory::new(window.clone(), proxy);
    let mut browser = app.open_window(factory)?;
    push_state(&toolbar, &browser);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                log::info!("Window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                let size = size.to_logical::<f64>(window.scale_factor());
                if let Err(e) = toolbar.set_bounds(toolbar_bounds(size.width)) {
                    log::warn!("Toolbar layout failed: {}", e);
                }
                for engine in browser.engines_mut() {
                    if let Err(e) = engine.set_bounds(page_bounds(size.width, size.height)) {
                        log::warn!("Page layout failed: {}", e);
                    }
                }
            }

            Event::UserEvent(user_event) => {
                handle_user_event(&mut browser, user_event);
                push_state(&toolbar, &browser);
            }

            _ => {}
        }
    });
}
