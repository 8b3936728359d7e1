use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Host-defined widget display size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// What the host passes along with every provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineContext {
    pub surface: SurfaceSize,
}

impl TimelineContext {
    pub fn new(surface: SurfaceSize) -> Self {
        Self { surface }
    }
}

/// One time-stamped data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    /// UNIX timestamp in seconds.
    pub date: i64,
    pub payload: T,
}

impl<T> Entry<T> {
    pub fn new(date: i64, payload: T) -> Self {
        Self { date, payload }
    }

    /// An entry stamped with the current time.
    pub fn now(payload: T) -> Self {
        Self::new(now(), payload)
    }
}

/// When the host should ask for a new timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReloadPolicy {
    /// Only reload when the app explicitly asks the host to.
    Never,
}

/// Entries plus the refresh policy handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline<T> {
    pub entries: Vec<Entry<T>>,
    pub policy: ReloadPolicy,
}

impl<T> Timeline<T> {
    /// A one-entry timeline that never refreshes on its own.
    pub fn single(entry: Entry<T>) -> Self {
        Self {
            entries: vec![entry],
            policy: ReloadPolicy::Never,
        }
    }
}

/// Returns the current UNIX timestamp in seconds.
pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
