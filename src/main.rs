//! MyBrowser: a small tabbed web browser.
//!
//! Entry point: opens the browser window on the embedded engine.
//! When built without the `gui` feature, runs a console demo of the
//! controller and the local stores against a scripted engine.

#[cfg(feature = "gui")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = mybrowser::ui::webview_app::run() {
        log::error!("MyBrowser failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                MyBrowser v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let root = std::env::temp_dir().join(format!("mybrowser-demo-{}", std::process::id()));
    let result = demo::run(&root);
    let _ = std::fs::remove_dir_all(&root);

    match result {
        Ok(()) => {
            println!("═══════════════════════════════════════════════════════════════");
            println!("  ✅ All components demonstrated successfully!");
            println!("═══════════════════════════════════════════════════════════════");
        }
        Err(e) => {
            eprintln!("Demo failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "gui"))]
mod demo {
    use std::error::Error;
    use std::path::Path;

    use mybrowser::app::App;
    use mybrowser::managers::tab_manager::TabManagerTrait;
    use mybrowser::services::history_obfuscator;
    use mybrowser::services::settings_engine::SettingsEngineTrait;
    use mybrowser::storage::StoragePaths;
    use mybrowser::types::errors::EngineError;
    use mybrowser::types::profile::BrowserProfile;
    use mybrowser::ui::browser_window::BrowserWindow;
    use mybrowser::ui::commands::ToolbarCommand;
    use mybrowser::ui::engine::{EngineEvent, EngineFactory, EngineWidget};

    /// Engine that only prints what it is asked to do.
    struct ConsoleEngine {
        tab_id: String,
    }

    impl ConsoleEngine {
        fn say(&self, what: &str) -> Result<(), EngineError> {
            println!("    [engine {}] {}", &self.tab_id[..8], what);
            Ok(())
        }
    }

    impl EngineWidget for ConsoleEngine {
        fn load_url(&mut self, url: &str) -> Result<(), EngineError> {
            self.say(&format!("load {}", url))
        }
        fn reload(&mut self) -> Result<(), EngineError> {
            self.say("reload")
        }
        fn go_back(&mut self) -> Result<(), EngineError> {
            self.say("back")
        }
        fn go_forward(&mut self) -> Result<(), EngineError> {
            self.say("forward")
        }
        fn request_snapshot(&mut self, url: &str) -> Result<(), EngineError> {
            self.say(&format!("snapshot {}", url))
        }
        fn set_visible(&mut self, _visible: bool) -> Result<(), EngineError> {
            Ok(())
        }
    }

    struct ConsoleFactory;

    impl EngineFactory for ConsoleFactory {
        type Widget = ConsoleEngine;

        fn create(&mut self, tab_id: &str, profile: &BrowserProfile) -> Result<ConsoleEngine, EngineError> {
            println!("    [factory] new widget, UA {:?}", profile.user_agent);
            Ok(ConsoleEngine {
                tab_id: tab_id.to_string(),
            })
        }
    }

    fn section(name: &str) {
        println!("───────────────────────────────────────────────────────────────");
        println!("  📦 {}", name);
        println!("───────────────────────────────────────────────────────────────");
    }

    pub fn run(root: &Path) -> Result<(), Box<dyn Error>> {
        let mut app = App::new(StoragePaths::new(root));
        let settings = app.startup()?;

        section("Settings");
        println!("  Data root: {}", app.paths.root().display());
        println!("  Home page: {}", settings.general.home_url);
        app.settings_engine
            .set_value("tabs.title_limit", serde_json::json!(12))?;
        println!("  Title limit set to {}", app.settings().tabs.title_limit);
        println!();

        section("Tabs & navigation");
        let mut browser = app.open_window(ConsoleFactory)?;
        browser.navigate("example.com")?;
        simulate_load(&mut browser, "https://example.com/", "Example Domain, a very long title")?;
        browser.new_tab()?;
        browser.navigate("http://neverssl.com")?;
        simulate_load(&mut browser, "http://neverssl.com/", "NeverSSL")?;
        for tab in browser.tabs().get_all_tabs() {
            println!("  tab {:<20} {}", tab.label, tab.url);
        }
        browser.execute(ToolbarCommand::CloseTab { index: 1 })?;
        let refused = !browser.close_tab(0)?;
        println!("  Closing the last tab refused: {}", refused);
        println!("  Address bar: {}", browser.address_bar());
        println!();

        section("Bookmarks");
        let bookmark = browser.bookmark_current()?;
        println!("  Bookmarked {} ({})", bookmark.url, bookmark.title);
        println!("  {} bookmark(s) stored", browser.bookmarks()?.len());
        println!();

        section("History");
        for entry in browser.history()? {
            println!("  {}", entry);
        }
        println!(
            "  \"history\" obfuscates to {:?}",
            history_obfuscator::encode("history")
        );
        println!();

        section("Offline pages");
        let record = browser.save_page_offline()?;
        let tab_id = browser
            .tabs()
            .get_active_tab()
            .map(|t| t.id.clone())
            .unwrap_or_default();
        browser.handle_event(EngineEvent::SnapshotReady {
            tab_id,
            url: record.url.clone(),
            markup: "<!DOCTYPE html>\n<html><body>Example</body></html>".to_string(),
        })?;
        println!("  Saved {} at {}", record.url, record.saved_at.to_rfc3339());
        println!();
        Ok(())
    }

    fn simulate_load(
        browser: &mut BrowserWindow<ConsoleFactory>,
        url: &str,
        title: &str,
    ) -> Result<(), Box<dyn Error>> {
        let tab_id = browser
            .tabs()
            .get_active_tab()
            .map(|t| t.id.clone())
            .ok_or("no active tab")?;
        browser.handle_event(EngineEvent::UrlChanged {
            tab_id: tab_id.clone(),
            url: url.to_string(),
        })?;
        browser.handle_event(EngineEvent::TitleChanged {
            tab_id: tab_id.clone(),
            title: title.to_string(),
        })?;
        browser.handle_event(EngineEvent::LoadFinished { tab_id })?;
        Ok(())
    }
}
