//! Widget host core.
//!
//! Holds the configuration and both providers the host harness serves.

use std::sync::Arc;

use crate::providers::favorites_provider::FavoritesProvider;
use crate::providers::stats_provider::StatsProvider;
use crate::services::favorites_reader::FavoritesReader;
use crate::services::stats_registry::LiveShieldStats;
use crate::services::widget_config::WidgetConfig;
use crate::types::errors::ConfigError;

/// Central struct wiring the widget providers to their data sources.
pub struct WidgetApp {
    pub config: WidgetConfig,
    pub live_stats: Arc<LiveShieldStats>,
    pub favorites: FavoritesProvider<FavoritesReader>,
    pub stats: StatsProvider<Arc<LiveShieldStats>>,
}

impl WidgetApp {
    /// Creates the app from an explicit config and a shared stats registry.
    pub fn new(config: WidgetConfig, live_stats: Arc<LiveShieldStats>) -> Self {
        let reader = FavoritesReader::new(config.clone());
        Self {
            favorites: FavoritesProvider::new(reader),
            stats: StatsProvider::new(Arc::clone(&live_stats)),
            live_stats,
            config,
        }
    }

    /// Loads config from the default file, then applies environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = WidgetConfig::load(&WidgetConfig::default_path())?.apply_env_overrides();
        Ok(Self::new(config, Arc::new(LiveShieldStats::new())))
    }
}
