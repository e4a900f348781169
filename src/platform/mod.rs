// MyBrowser platform abstraction
// Locates the current user's home directory and the application data root
// beneath it.
//
// Uses `cfg` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::{Path, PathBuf};

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

/// Name of the per-user application directory created under the home directory.
pub const APP_DIR_NAME: &str = ".mybrowser";

/// Returns the current user's home directory.
///
/// - **Linux / macOS**: `$HOME`
/// - **Windows**: `%USERPROFILE%`, falling back to `%HOMEDRIVE%%HOMEPATH%`
pub fn get_home_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        unix::get_home_dir()
    }
    #[cfg(windows)]
    {
        windows::get_home_dir()
    }
}

/// Returns the application data root for the given home directory:
/// `<home>/.mybrowser/data`.
pub fn data_root_for(home: &Path) -> PathBuf {
    home.join(APP_DIR_NAME).join("data")
}
