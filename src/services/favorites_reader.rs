//! Favorites snapshot reader.
//!
//! Reads the favorites the app writes into the shared container. Every failure
//! collapses into an empty list so a bad file never takes the widget down.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::services::widget_config::WidgetConfig;
use crate::types::errors::SnapshotError;
use crate::types::favorite::FavoriteRecord;

/// Callback told about every snapshot failure that `load` swallows.
pub type DiagnosticHook = Box<dyn Fn(&SnapshotError) + Send + Sync>;

/// Anything that can hand the Favorites provider its records.
pub trait FavoritesSource {
    /// Returns the favorites in display order; empty on any failure.
    fn load_favorites(&self) -> Vec<FavoriteRecord>;
}

/// Reads `favs.json` from the shared container.
pub struct FavoritesReader {
    config: WidgetConfig,
    diagnostic: Option<DiagnosticHook>,
}

impl FavoritesReader {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            diagnostic: None,
        }
    }

    /// Installs a hook that observes failures without changing the result.
    pub fn with_diagnostic_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&SnapshotError) + Send + Sync + 'static,
    {
        self.diagnostic = Some(Box::new(hook));
        self
    }

    /// Full path of the snapshot file, if the container can be located.
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.config
            .container_dir()
            .map(|dir| dir.join(&self.config.favorites_file))
    }

    /// Reads and decodes the snapshot, reporting why it failed.
    pub fn try_load(&self) -> Result<Vec<FavoriteRecord>, SnapshotError> {
        let container = self
            .config
            .container_dir()
            .filter(|dir| dir.is_dir())
            .ok_or_else(|| SnapshotError::ContainerUnavailable(self.config.app_group.clone()))?;

        let path = container.join(&self.config.favorites_file);
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SnapshotError::FileMissing(path.display().to_string()),
            _ => SnapshotError::Io(format!("{}: {}", path.display(), e)),
        })?;

        decode_favorites(&bytes)
    }

    /// Reads the snapshot, returning an empty list on any failure.
    pub fn load(&self) -> Vec<FavoriteRecord> {
        match self.try_load() {
            Ok(favorites) => favorites,
            Err(err) => {
                tracing::debug!(error = %err, "favorites snapshot unavailable");
                if let Some(hook) = &self.diagnostic {
                    hook(&err);
                }
                Vec::new()
            }
        }
    }
}

impl FavoritesSource for FavoritesReader {
    fn load_favorites(&self) -> Vec<FavoriteRecord> {
        self.load()
    }
}

impl FavoritesSource for Vec<FavoriteRecord> {
    fn load_favorites(&self) -> Vec<FavoriteRecord> {
        self.clone()
    }
}

/// Decodes the JSON array of favorites, keeping file order.
pub fn decode_favorites(bytes: &[u8]) -> Result<Vec<FavoriteRecord>, SnapshotError> {
    serde_json::from_slice(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
}
