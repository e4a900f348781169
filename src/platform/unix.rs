// MyBrowser home directory lookup for Linux and macOS.

use std::env;
use std::path::PathBuf;

/// Returns `$HOME`, or `None` when it is unset or empty.
pub fn get_home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
