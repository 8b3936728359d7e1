//! RPC method handler for the widget host protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a request to the matching provider and returns
//! the produced entries together with their rendered views.

use serde_json::{json, Value};

use crate::app::WidgetApp;
use crate::providers::favorites_provider::FavoritesEntry;
use crate::providers::stats_provider::StatEntry;
use crate::providers::TimelineProvider;
use crate::services::stats_registry::ShieldStatsSource;
use crate::services::view_renderer::{render_favorites, render_stat};
use crate::types::favorite::FavoriteRecord;
use crate::types::stats::{ShieldStats, StatConfiguration, StatKind, StatSnapshot};
use crate::types::timeline::{SurfaceSize, Timeline, TimelineContext};
use crate::widgets;

/// Reads the required `surface` param.
fn parse_context(params: &Value) -> Result<TimelineContext, String> {
    let surface = params.get("surface").ok_or("missing surface")?;
    let surface: SurfaceSize =
        serde_json::from_value(surface.clone()).map_err(|e| format!("invalid surface: {}", e))?;
    Ok(TimelineContext::new(surface))
}

/// Reads the `kind` param, rejecting kinds a user cannot configure.
fn parse_stat_configuration(params: &Value) -> Result<StatConfiguration, String> {
    let kind = match params.get("kind") {
        Some(kind) => serde_json::from_value::<StatKind>(kind.clone())
            .map_err(|e| format!("invalid kind: {}", e))?,
        None => return Ok(StatConfiguration::default()),
    };
    if !StatKind::CONFIGURABLE.contains(&kind) {
        return Err("invalid kind: must be adsBlocked, httpsUpgrades, or timeSaved".to_string());
    }
    Ok(StatConfiguration { kind })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

fn favorites_entry_json(entry: &FavoritesEntry, surface: SurfaceSize) -> Result<Value, String> {
    Ok(json!({"entry": to_json(entry)?, "view": to_json(&render_favorites(entry, surface))?}))
}

fn favorites_timeline_json(
    timeline: &Timeline<Vec<FavoriteRecord>>,
    surface: SurfaceSize,
) -> Result<Value, String> {
    let views = timeline
        .entries
        .iter()
        .map(|entry| to_json(&render_favorites(entry, surface)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({"timeline": to_json(timeline)?, "views": views}))
}

fn stat_entry_json(entry: &StatEntry) -> Result<Value, String> {
    Ok(json!({"entry": to_json(entry)?, "view": to_json(&render_stat(entry))?}))
}

fn stat_timeline_json(timeline: &Timeline<StatSnapshot>) -> Result<Value, String> {
    let views = timeline
        .entries
        .iter()
        .map(|entry| to_json(&render_stat(entry)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({"timeline": to_json(timeline)?, "views": views}))
}

/// Dispatch a widget host method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &WidgetApp, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Registration ───
        "widgets.list" => to_json(&widgets::all()),

        // ─── Favorites ───
        "favorites.placeholder" => {
            let ctx = parse_context(params)?;
            favorites_entry_json(&app.favorites.placeholder(&ctx), ctx.surface)
        }
        "favorites.snapshot" => {
            let ctx = parse_context(params)?;
            let mut result = Err("snapshot not produced".to_string());
            app.favorites.get_snapshot(&(), &ctx, |entry| {
                result = favorites_entry_json(&entry, ctx.surface);
            });
            result
        }
        "favorites.timeline" => {
            let ctx = parse_context(params)?;
            let mut result = Err("timeline not produced".to_string());
            app.favorites.get_timeline(&(), &ctx, |timeline| {
                result = favorites_timeline_json(&timeline, ctx.surface);
            });
            result
        }

        // ─── Shields stats ───
        "stats.placeholder" => {
            let ctx = parse_context(params)?;
            stat_entry_json(&app.stats.placeholder(&ctx))
        }
        "stats.snapshot" => {
            let ctx = parse_context(params)?;
            let config = parse_stat_configuration(params)?;
            let mut result = Err("snapshot not produced".to_string());
            app.stats.get_snapshot(&config, &ctx, |entry| {
                result = stat_entry_json(&entry);
            });
            result
        }
        "stats.timeline" => {
            let ctx = parse_context(params)?;
            let config = parse_stat_configuration(params)?;
            let mut result = Err("timeline not produced".to_string());
            app.stats.get_timeline(&config, &ctx, |timeline| {
                result = stat_timeline_json(&timeline);
            });
            result
        }
        "stats.update" => {
            let stats: ShieldStats = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid stats: {}", e))?;
            app.live_stats.replace(stats);
            to_json(&app.live_stats.current_stats())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
