// GitBrowser widget platform abstraction
// Resolves where the app and its widgets share data on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for GitBrowser.
///
/// - **Linux**: `~/.config/gitbrowser` (or `$XDG_CONFIG_HOME/gitbrowser`)
/// - **macOS**: `~/Library/Application Support/GitBrowser`
/// - **Windows**: `%APPDATA%/GitBrowser`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the container directory shared by the app and its widgets.
///
/// - **Linux**: `$XDG_DATA_HOME/<group>` (or `~/.local/share/<group>`)
/// - **macOS**: `~/Library/Group Containers/<group>`
/// - **Windows**: `%LOCALAPPDATA%/<group>`
///
/// Returns `None` when the group identifier is empty or cannot name a directory.
pub fn get_shared_container_dir(app_group: &str) -> Option<PathBuf> {
    if app_group.is_empty() || app_group.contains(['/', '\\']) || app_group == ".." {
        return None;
    }
    #[cfg(target_os = "linux")]
    {
        Some(linux::get_shared_container_dir(app_group))
    }
    #[cfg(target_os = "macos")]
    {
        Some(macos::get_shared_container_dir(app_group))
    }
    #[cfg(target_os = "windows")]
    {
        Some(windows::get_shared_container_dir(app_group))
    }
}
