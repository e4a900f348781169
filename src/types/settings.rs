use serde::{Deserialize, Serialize};

/// Default user agent handed to every engine widget instead of the engine's
/// own string. A common desktop Firefox signature keeps the browser from
/// standing out; it is not a privacy guarantee.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub tabs: TabSettings,
    pub privacy: PrivacySettings,
}

/// General browser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Where the home button and new tabs go.
    pub home_url: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com/".to_string(),
        }
    }
}

/// Main window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "MyBrowser".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

/// Tab strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSettings {
    /// Maximum number of title characters shown on a tab before truncation.
    pub title_limit: usize,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self { title_limit: 20 }
    }
}

/// Privacy-related settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivacySettings {
    pub user_agent: String,
    #[serde(default = "default_true")]
    pub record_history: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            record_history: true,
        }
    }
}
