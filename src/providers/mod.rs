// GitBrowser widget timeline providers
// Providers answer the host's placeholder, snapshot, and timeline requests for one widget each.

pub mod favorites_provider;
pub mod stats_provider;

use crate::types::timeline::{Entry, Timeline, TimelineContext};

/// The contract a widget implements for the host.
///
/// Each call is independent: nothing is cached between calls and every
/// snapshot or timeline is built from freshly read data. Completions are
/// invoked synchronously, exactly once, before the method returns.
pub trait TimelineProvider {
    /// User-chosen configuration; `()` for widgets without one.
    type Configuration;
    type Payload;

    /// A synthetic entry for the host's loading skeleton. Performs no I/O.
    fn placeholder(&self, context: &TimelineContext) -> Entry<Self::Payload>;

    /// Builds an entry from the current data.
    fn snapshot_entry(
        &self,
        configuration: &Self::Configuration,
        context: &TimelineContext,
    ) -> Entry<Self::Payload>;

    /// Entry for preview surfaces such as the widget gallery.
    fn get_snapshot<F>(
        &self,
        configuration: &Self::Configuration,
        context: &TimelineContext,
        completion: F,
    ) where
        F: FnOnce(Entry<Self::Payload>),
    {
        completion(self.snapshot_entry(configuration, context));
    }

    /// A single current entry that is never refreshed automatically; the app
    /// asks the host to reload after it rewrites the shared data.
    fn get_timeline<F>(
        &self,
        configuration: &Self::Configuration,
        context: &TimelineContext,
        completion: F,
    ) where
        F: FnOnce(Timeline<Self::Payload>),
    {
        completion(Timeline::single(self.snapshot_entry(configuration, context)));
    }
}
