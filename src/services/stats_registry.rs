//! Shields statistics registry.
//!
//! The Stats widget reads live counters through [`ShieldStatsSource`] so the
//! provider can be handed any registry, including a fixed value in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::types::stats::{ShieldStats, StatKind};

/// Estimated page-load time saved per blocked ad or tracker.
pub const MILLISECONDS_SAVED_PER_BLOCK: u64 = 50;

/// Read-only access to the current shields counters.
pub trait ShieldStatsSource {
    fn current_stats(&self) -> ShieldStats;

    /// The display string for `kind`, formatted for the widget.
    fn formatted_value(&self, kind: StatKind) -> String {
        let stats = self.current_stats();
        match kind {
            StatKind::AdsBlocked => {
                format_count(stats.ads_blocked.saturating_add(stats.trackers_blocked))
            }
            StatKind::HttpsUpgrades => format_count(stats.https_upgrades),
            StatKind::TimeSaved => format_time_saved(estimated_seconds_saved(&stats)),
            StatKind::Unknown => String::new(),
        }
    }
}

impl ShieldStatsSource for ShieldStats {
    fn current_stats(&self) -> ShieldStats {
        *self
    }
}

impl<T: ShieldStatsSource + ?Sized> ShieldStatsSource for Arc<T> {
    fn current_stats(&self) -> ShieldStats {
        (**self).current_stats()
    }
}

/// Process-wide counters the browser bumps while it blocks requests.
#[derive(Debug, Default)]
pub struct LiveShieldStats {
    trackers_blocked: AtomicU64,
    ads_blocked: AtomicU64,
    https_upgrades: AtomicU64,
}

impl LiveShieldStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the counters from previously persisted totals.
    pub fn from_stats(stats: ShieldStats) -> Self {
        Self {
            trackers_blocked: AtomicU64::new(stats.trackers_blocked),
            ads_blocked: AtomicU64::new(stats.ads_blocked),
            https_upgrades: AtomicU64::new(stats.https_upgrades),
        }
    }

    /// Overwrites all counters, e.g. after the app reloads persisted totals.
    pub fn replace(&self, stats: ShieldStats) {
        self.trackers_blocked
            .store(stats.trackers_blocked, Ordering::Relaxed);
        self.ads_blocked.store(stats.ads_blocked, Ordering::Relaxed);
        self.https_upgrades
            .store(stats.https_upgrades, Ordering::Relaxed);
    }

    pub fn record_tracker_blocked(&self) {
        self.trackers_blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ad_blocked(&self) {
        self.ads_blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_https_upgrade(&self) {
        self.https_upgrades.fetch_add(1, Ordering::Relaxed);
    }
}

impl ShieldStatsSource for LiveShieldStats {
    fn current_stats(&self) -> ShieldStats {
        ShieldStats {
            trackers_blocked: self.trackers_blocked.load(Ordering::Relaxed),
            ads_blocked: self.ads_blocked.load(Ordering::Relaxed),
            https_upgrades: self.https_upgrades.load(Ordering::Relaxed),
        }
    }
}

/// Seconds saved, estimated from the number of blocked ads and trackers.
pub fn estimated_seconds_saved(stats: &ShieldStats) -> u64 {
    let blocked = stats.ads_blocked.saturating_add(stats.trackers_blocked);
    blocked.saturating_mul(MILLISECONDS_SAVED_PER_BLOCK) / 1000
}

/// Abbreviates large counts: `999`, `1K`, `1.5K`, `2.3M`, `4B`.
pub fn format_count(count: u64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];

    if count < 1000 {
        return count.to_string();
    }

    let mut index = match count {
        c if c >= 1_000_000_000 => 2,
        c if c >= 1_000_000 => 1,
        _ => 0,
    };
    let mut rounded = (count as f64 / UNITS[index].0 * 10.0).round() / 10.0;
    // 999_950 rounds to 1000.0K; show it as 1M instead.
    if rounded >= 1000.0 && index + 1 < UNITS.len() {
        index += 1;
        rounded = (count as f64 / UNITS[index].0 * 10.0).round() / 10.0;
    }

    let text = format!("{:.1}", rounded);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, UNITS[index].1)
}

/// Renders a duration in its largest whole unit: `45s`, `12min`, `3h`, `2d`.
pub fn format_time_saved(seconds: u64) -> String {
    match seconds {
        s if s < 60 => format!("{}s", s),
        s if s < 3_600 => format!("{}min", s / 60),
        s if s < 86_400 => format!("{}h", s / 3_600),
        s => format!("{}d", s / 86_400),
    }
}
