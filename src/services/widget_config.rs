// GitBrowser Widget Config
// Resolves where the widgets find the data the app shares with them.
// Values come from defaults, an optional JSON file, then environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::ConfigError;

pub const DEFAULT_APP_GROUP: &str = "group.com.gitbrowser.widgets";
pub const DEFAULT_FAVORITES_FILE: &str = "widget_data/favs.json";

pub const APP_GROUP_ENV: &str = "GITBROWSER_APP_GROUP";
pub const SHARED_CONTAINER_ENV: &str = "GITBROWSER_SHARED_CONTAINER";

/// Configuration shared by every widget in the extension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetConfig {
    #[serde(default = "default_app_group")]
    pub app_group: String,
    /// Explicit container directory; bypasses platform lookup when set.
    #[serde(default)]
    pub shared_container: Option<PathBuf>,
    /// Path of the favorites snapshot, relative to the container.
    #[serde(default = "default_favorites_file")]
    pub favorites_file: PathBuf,
}

fn default_app_group() -> String {
    DEFAULT_APP_GROUP.to_string()
}

fn default_favorites_file() -> PathBuf {
    PathBuf::from(DEFAULT_FAVORITES_FILE)
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            app_group: default_app_group(),
            shared_container: None,
            favorites_file: default_favorites_file(),
        }
    }
}

impl WidgetConfig {
    /// Config rooted at an explicit container directory.
    pub fn with_container(container: impl Into<PathBuf>) -> Self {
        Self {
            shared_container: Some(container.into()),
            ..Self::default()
        }
    }

    /// Default location of the optional config file.
    pub fn default_path() -> PathBuf {
        platform::get_config_dir().join("widgets.json")
    }

    /// Loads config from `path`.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse config file: {}", e)))
    }

    /// Applies `GITBROWSER_APP_GROUP` and `GITBROWSER_SHARED_CONTAINER` when set.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(group) = env::var(APP_GROUP_ENV) {
            if !group.is_empty() {
                self.app_group = group;
            }
        }
        if let Ok(dir) = env::var(SHARED_CONTAINER_ENV) {
            if !dir.is_empty() {
                self.shared_container = Some(PathBuf::from(dir));
            }
        }
        self
    }

    /// The container directory, or `None` when it cannot be located.
    pub fn container_dir(&self) -> Option<PathBuf> {
        match &self.shared_container {
            Some(dir) => Some(dir.clone()),
            None => platform::get_shared_container_dir(&self.app_group),
        }
    }
}
