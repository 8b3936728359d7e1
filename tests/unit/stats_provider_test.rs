//! Unit tests for the Shields stat timeline provider.

use std::sync::Arc;

use gitbrowser_widgets::providers::stats_provider::StatsProvider;
use gitbrowser_widgets::providers::TimelineProvider;
use gitbrowser_widgets::services::stats_registry::LiveShieldStats;
use gitbrowser_widgets::types::color::Rgb;
use gitbrowser_widgets::types::stats::{ShieldStats, StatConfiguration, StatKind};
use gitbrowser_widgets::types::timeline::{ReloadPolicy, SurfaceSize, TimelineContext};
use rstest::rstest;

fn small() -> TimelineContext {
    TimelineContext::new(SurfaceSize::Small)
}

fn config(kind: StatKind) -> StatConfiguration {
    StatConfiguration { kind }
}

#[rstest]
#[case(StatKind::AdsBlocked, "Ads & Trackers Blocked", 0xFB542B)]
#[case(StatKind::HttpsUpgrades, "HTTPS Upgrades", 0x20CB66)]
#[case(StatKind::TimeSaved, "Est. Time Saved", 0xFFFFFF)]
fn test_name_and_color_are_fixed(
    #[case] kind: StatKind,
    #[case] name: &str,
    #[case] color: u32,
    #[values(0, 7, 123_456_789)] count: u64,
) {
    let provider = StatsProvider::new(ShieldStats {
        trackers_blocked: count,
        ads_blocked: count,
        https_upgrades: count,
    });

    let entry = provider.snapshot_entry(&config(kind), &small());
    assert_eq!(entry.payload.kind, kind);
    assert_eq!(entry.payload.display_name, name);
    assert_eq!(entry.payload.color, Rgb::new(color));
}

#[test]
fn test_ads_blocked_counts_trackers_too() {
    let provider = StatsProvider::new(ShieldStats {
        trackers_blocked: 600,
        ads_blocked: 900,
        https_upgrades: 3,
    });
    let entry = provider.snapshot_entry(&config(StatKind::AdsBlocked), &small());
    assert_eq!(entry.payload.display_value, "1.5K");
}

#[test]
fn test_time_saved_value() {
    // 2400 blocks * 50ms = 120s
    let provider = StatsProvider::new(ShieldStats {
        trackers_blocked: 1200,
        ads_blocked: 1200,
        https_upgrades: 0,
    });
    let entry = provider.snapshot_entry(&config(StatKind::TimeSaved), &small());
    assert_eq!(entry.payload.display_value, "2min");
}

#[test]
fn test_reads_live_registry_each_call() {
    let live = Arc::new(LiveShieldStats::new());
    let provider = StatsProvider::new(Arc::clone(&live));
    let kind = config(StatKind::HttpsUpgrades);

    let mut before = None;
    provider.get_timeline(&kind, &small(), |timeline| before = Some(timeline));

    live.record_https_upgrade();
    live.record_https_upgrade();

    let mut after = None;
    provider.get_timeline(&kind, &small(), |timeline| after = Some(timeline));

    let before = before.unwrap();
    let after = after.unwrap();
    assert_eq!(before.entries.len(), 1);
    assert_eq!(after.entries.len(), 1);
    assert_eq!(before.policy, ReloadPolicy::Never);
    assert_eq!(after.policy, ReloadPolicy::Never);
    assert_eq!(before.entries[0].payload.display_value, "0");
    assert_eq!(after.entries[0].payload.display_value, "2");
}

#[test]
fn test_placeholder_does_not_read_registry() {
    let live = Arc::new(LiveShieldStats::from_stats(ShieldStats {
        trackers_blocked: 10,
        ads_blocked: 10,
        https_upgrades: 10,
    }));
    let entry = StatsProvider::new(live).placeholder(&small());
    assert_eq!(entry.payload.display_value, "-");
}
