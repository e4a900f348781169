use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::StoragePaths;
use crate::types::errors::{BrowserError, StorageError};
use crate::types::settings::BrowserSettings;
use crate::ui::browser_window::BrowserWindow;
use crate::ui::engine::EngineFactory;

/// Central application struct: where the data lives and how it is configured.
///
/// The stores and the browser profile are built per window by
/// [`BrowserWindow::new`]; `App` only owns what outlives a window.
pub struct App {
    pub paths: StoragePaths,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates an App over an existing data root. Nothing is read yet.
    pub fn new(paths: StoragePaths) -> Self {
        let settings_engine = SettingsEngine::for_paths(&paths);
        Self {
            paths,
            settings_engine,
        }
    }

    /// Resolves `<home>/.mybrowser/data`, creating it if needed.
    pub fn for_current_user() -> Result<Self, StorageError> {
        Ok(Self::new(StoragePaths::resolve_for_current_user()?))
    }

    /// Startup sequence: make sure the data directories exist and load settings.
    ///
    /// A malformed settings file is not fatal; the defaults are used and the
    /// file is left alone.
    pub fn startup(&mut self) -> Result<BrowserSettings, StorageError> {
        self.paths.ensure()?;
        match self.settings_engine.load() {
            Ok(settings) => Ok(settings),
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Ok(BrowserSettings::default())
            }
        }
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.settings_engine.get_settings()
    }

    /// Builds the browser window controller and opens the first tab on the
    /// home page.
    pub fn open_window<F: EngineFactory>(&self, factory: F) -> Result<BrowserWindow<F>, BrowserError> {
        let mut window = BrowserWindow::new(factory, &self.paths, self.settings().clone())?;
        window.new_tab()?;
        Ok(window)
    }
}
