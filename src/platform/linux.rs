// GitBrowser widget paths for Linux
// Config:           ~/.config/gitbrowser
// Shared container: ~/.local/share/<group>

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for GitBrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/gitbrowser` if set, otherwise `~/.config/gitbrowser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("gitbrowser")
    } else {
        home_dir().join(".config").join("gitbrowser")
    }
}

/// Returns the shared container for `app_group` on Linux.
/// Uses `$XDG_DATA_HOME/<group>` if set, otherwise `~/.local/share/<group>`.
pub fn get_shared_container_dir(app_group: &str) -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join(app_group)
    } else {
        home_dir().join(".local").join("share").join(app_group)
    }
}
