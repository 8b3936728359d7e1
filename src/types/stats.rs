use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Which shields statistic a Stats widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    AdsBlocked,
    HttpsUpgrades,
    TimeSaved,
    #[serde(other)]
    Unknown,
}

impl StatKind {
    /// Kinds a user can pick in the widget configuration.
    pub const CONFIGURABLE: [StatKind; 3] = [
        StatKind::AdsBlocked,
        StatKind::HttpsUpgrades,
        StatKind::TimeSaved,
    ];

    /// Fixed label shown under the value.
    pub fn display_name(self) -> &'static str {
        match self {
            StatKind::AdsBlocked => "Ads & Trackers Blocked",
            StatKind::HttpsUpgrades => "HTTPS Upgrades",
            StatKind::TimeSaved => "Est. Time Saved",
            StatKind::Unknown => "",
        }
    }

    /// Fixed accent color for the value text.
    pub fn color(self) -> Rgb {
        match self {
            StatKind::AdsBlocked => Rgb::new(0xFB542B),
            StatKind::HttpsUpgrades => Rgb::new(0x20CB66),
            StatKind::TimeSaved => Rgb::WHITE,
            StatKind::Unknown => Rgb::new(0x808080),
        }
    }
}

/// One shields-statistic value ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub kind: StatKind,
    pub display_name: String,
    pub display_value: String,
    pub color: Rgb,
}

impl StatSnapshot {
    /// Pairs a live value with the static name/color of `kind`.
    pub fn new(kind: StatKind, display_value: impl Into<String>) -> Self {
        Self {
            kind,
            display_name: kind.display_name().to_string(),
            display_value: display_value.into(),
            color: kind.color(),
        }
    }
}

/// Aggregated shields protection counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShieldStats {
    pub trackers_blocked: u64,
    pub ads_blocked: u64,
    pub https_upgrades: u64,
}

/// The user's choice for a Stats widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfiguration {
    pub kind: StatKind,
}

impl Default for StatConfiguration {
    fn default() -> Self {
        Self {
            kind: StatKind::AdsBlocked,
        }
    }
}
