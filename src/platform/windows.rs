// GitBrowser widget paths for Windows
// Config:           %APPDATA%/GitBrowser
// Shared container: %LOCALAPPDATA%/<group>

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for GitBrowser on Windows.
/// `%APPDATA%/GitBrowser`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("GitBrowser")
}

/// Returns the shared container for `app_group` on Windows.
/// `%LOCALAPPDATA%/<group>`
pub fn get_shared_container_dir(app_group: &str) -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join(app_group)
}
