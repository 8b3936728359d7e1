//! Layout Engine — per-surface grid metrics and favorites placement.

use serde::Serialize;

use crate::types::favorite::FavoriteRecord;
use crate::types::timeline::SurfaceSize;

/// Number of columns in every favorites grid.
pub const GRID_COLUMNS: usize = 4;

/// Grid shape for one surface size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    pub rows: usize,
    pub columns: usize,
    pub spacing: f32,
    pub corner_radius: f32,
}

impl LayoutMetrics {
    /// Layout for surfaces the Favorites widget does not support: nothing to draw.
    pub const ZERO: LayoutMetrics = LayoutMetrics {
        rows: 0,
        columns: 0,
        spacing: 0.0,
        corner_radius: 0.0,
    };

    const MEDIUM: LayoutMetrics = LayoutMetrics {
        rows: 2,
        columns: GRID_COLUMNS,
        spacing: 8.0,
        corner_radius: 12.0,
    };

    const LARGE: LayoutMetrics = LayoutMetrics {
        rows: 4,
        columns: GRID_COLUMNS,
        spacing: 16.0,
        corner_radius: 16.0,
    };

    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_zero(&self) -> bool {
        self.capacity() == 0
    }
}

/// Looks up the favorites grid metrics for `surface`.
///
/// Small and extra-large surfaces are not offered for the Favorites widget;
/// if a host asks anyway it gets [`LayoutMetrics::ZERO`].
pub fn favorites_metrics(surface: SurfaceSize) -> LayoutMetrics {
    match surface {
        SurfaceSize::Medium => LayoutMetrics::MEDIUM,
        SurfaceSize::Large => LayoutMetrics::LARGE,
        SurfaceSize::Small | SurfaceSize::ExtraLarge => {
            tracing::warn!(?surface, "favorites widget does not support this surface");
            LayoutMetrics::ZERO
        }
    }
}

/// Assigns favorites to grid cells in row-major order.
///
/// The result always has `metrics.capacity()` slots: the first
/// `min(len, capacity)` hold favorites in file order, the rest are `None`.
pub fn place_favorites<'a>(
    favorites: &'a [FavoriteRecord],
    metrics: &LayoutMetrics,
) -> Vec<Option<&'a FavoriteRecord>> {
    let capacity = metrics.capacity();
    let mut slots: Vec<Option<&FavoriteRecord>> =
        favorites.iter().take(capacity).map(Some).collect();
    slots.resize(capacity, None);
    slots
}
