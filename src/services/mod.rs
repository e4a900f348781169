// MyBrowser services
// Services provide core functionality: settings, profile and cookie policy, history obfuscation.

pub mod history_obfuscator;
pub mod privacy_engine;
pub mod settings_engine;
