//! Shields Stat Timeline Provider.

use crate::providers::TimelineProvider;
use crate::services::stats_registry::ShieldStatsSource;
use crate::types::stats::{StatConfiguration, StatSnapshot};
use crate::types::timeline::{Entry, TimelineContext};

pub type StatEntry = Entry<StatSnapshot>;

/// Value shown while the host draws the loading skeleton.
pub const PLACEHOLDER_VALUE: &str = "-";

/// Serves the Stats widget from an injected [`ShieldStatsSource`].
pub struct StatsProvider<S> {
    stats: S,
}

impl<S: ShieldStatsSource> StatsProvider<S> {
    pub fn new(stats: S) -> Self {
        Self { stats }
    }
}

impl<S: ShieldStatsSource> TimelineProvider for StatsProvider<S> {
    type Configuration = StatConfiguration;
    type Payload = StatSnapshot;

    fn placeholder(&self, _context: &TimelineContext) -> StatEntry {
        Entry::now(StatSnapshot::new(
            StatConfiguration::default().kind,
            PLACEHOLDER_VALUE,
        ))
    }

    fn snapshot_entry(
        &self,
        configuration: &StatConfiguration,
        _context: &TimelineContext,
    ) -> StatEntry {
        let kind = configuration.kind;
        Entry::now(StatSnapshot::new(kind, self.stats.formatted_value(kind)))
    }
}
