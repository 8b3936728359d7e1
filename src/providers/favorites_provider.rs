//! Favorites Timeline Provider.

use crate::providers::TimelineProvider;
use crate::services::favorites_reader::{FavoritesReader, FavoritesSource};
use crate::types::favorite::FavoriteRecord;
use crate::types::timeline::{Entry, TimelineContext};

pub type FavoritesEntry = Entry<Vec<FavoriteRecord>>;

/// Serves the Favorites widget from a [`FavoritesSource`].
pub struct FavoritesProvider<S = FavoritesReader> {
    source: S,
}

impl<S: FavoritesSource> FavoritesProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: FavoritesSource> TimelineProvider for FavoritesProvider<S> {
    type Configuration = ();
    type Payload = Vec<FavoriteRecord>;

    fn placeholder(&self, _context: &TimelineContext) -> FavoritesEntry {
        Entry::now(Vec::new())
    }

    fn snapshot_entry(&self, _configuration: &(), _context: &TimelineContext) -> FavoritesEntry {
        Entry::now(self.source.load_favorites())
    }
}
