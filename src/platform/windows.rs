// MyBrowser home directory lookup for Windows.

use std::env;
use std::path::PathBuf;

/// Returns `%USERPROFILE%`, falling back to `%HOMEDRIVE%%HOMEPATH%`.
pub fn get_home_dir() -> Option<PathBuf> {
    if let Some(profile) = env::var_os("USERPROFILE").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(profile));
    }
    let drive = env::var_os("HOMEDRIVE")?;
    let path = env::var_os("HOMEPATH")?;
    let mut home = PathBuf::from(drive);
    home.push(path);
    Some(home)
}
