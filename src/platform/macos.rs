// GitBrowser widget paths for macOS
// Config:           ~/Library/Application Support/GitBrowser
// Shared container: ~/Library/Group Containers/<group>

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for GitBrowser on macOS.
/// `~/Library/Application Support/GitBrowser`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("GitBrowser")
}

/// Returns the app group container on macOS.
/// `~/Library/Group Containers/<group>`
pub fn get_shared_container_dir(app_group: &str) -> PathBuf {
    home_dir()
        .join("Library")
        .join("Group Containers")
        .join(app_group)
}
