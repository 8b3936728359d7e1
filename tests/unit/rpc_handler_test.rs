//! Unit tests for the widget host RPC handler.
//!
//! Exercises `handle_method` directly with an app rooted in a temp container.

use std::fs;
use std::sync::Arc;

use gitbrowser_widgets::app::WidgetApp;
use gitbrowser_widgets::rpc_handler::handle_method;
use gitbrowser_widgets::services::stats_registry::LiveShieldStats;
use gitbrowser_widgets::services::widget_config::WidgetConfig;
use serde_json::json;
use tempfile::TempDir;

fn app_with_favorites(content: Option<&str>) -> (TempDir, WidgetApp) {
    let container = TempDir::new().unwrap();
    if let Some(content) = content {
        let dir = container.path().join("widget_data");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("favs.json"), content).unwrap();
    }
    let app = WidgetApp::new(
        WidgetConfig::with_container(container.path()),
        Arc::new(LiveShieldStats::new()),
    );
    (container, app)
}

// ─── Registration ───

#[test]
fn test_widgets_list() {
    let (_dir, app) = app_with_favorites(None);
    let result = handle_method(&app, "widgets.list", &json!({})).unwrap();
    let list = result.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["kind"], "FavoritesWidget");
    assert_eq!(list[0]["supported_sizes"], json!(["medium", "large"]));
    assert_eq!(list[1]["kind"], "ShieldsStatWidget");
    assert_eq!(list[1]["supported_sizes"], json!(["small"]));
}

// ─── Favorites ───

#[test]
fn test_favorites_timeline() {
    let (_dir, app) = app_with_favorites(Some(r#"[{"url":"https://brave.com"}]"#));
    let result = handle_method(&app, "favorites.timeline", &json!({"surface": "medium"})).unwrap();

    assert_eq!(result["timeline"]["policy"], "never");
    assert_eq!(result["timeline"]["entries"].as_array().unwrap().len(), 1);
    assert_eq!(
        result["timeline"]["entries"][0]["payload"][0]["url"],
        "https://brave.com/"
    );
    assert_eq!(result["views"][0]["cells"].as_array().unwrap().len(), 8);
    assert_eq!(result["views"][0]["cells"][0]["letter"], "B");
}

#[test]
fn test_favorites_snapshot_with_bad_file_is_empty() {
    let (_dir, app) = app_with_favorites(Some("{{{"));
    let result = handle_method(&app, "favorites.snapshot", &json!({"surface": "large"})).unwrap();
    assert_eq!(result["entry"]["payload"], json!([]));
    assert_eq!(result["view"]["cells"].as_array().unwrap().len(), 16);
}

#[test]
fn test_favorites_placeholder() {
    let (_dir, app) = app_with_favorites(Some(r#"[{"url":"https://brave.com"}]"#));
    let result =
        handle_method(&app, "favorites.placeholder", &json!({"surface": "medium"})).unwrap();
    assert_eq!(result["entry"]["payload"], json!([]));
}

#[test]
fn test_favorites_requires_surface() {
    let (_dir, app) = app_with_favorites(None);
    let err = handle_method(&app, "favorites.timeline", &json!({})).unwrap_err();
    assert_eq!(err, "missing surface");
    let err = handle_method(&app, "favorites.timeline", &json!({"surface": "huge"})).unwrap_err();
    assert!(err.starts_with("invalid surface"));
}

// ─── Shields stats ───

#[test]
fn test_stats_update_then_snapshot() {
    let (_dir, app) = app_with_favorites(None);
    handle_method(
        &app,
        "stats.update",
        &json!({"ads_blocked": 1200, "trackers_blocked": 300}),
    )
    .unwrap();

    let result = handle_method(
        &app,
        "stats.snapshot",
        &json!({"surface": "small", "kind": "adsBlocked"}),
    )
    .unwrap();
    assert_eq!(result["entry"]["payload"]["display_value"], "1.5K");
    assert_eq!(result["view"]["type"], "stat");
    assert_eq!(result["view"]["name"], "Ads & Trackers Blocked");
    assert_eq!(result["view"]["color"], 0xFB542B);
}

#[test]
fn test_stats_timeline_defaults_to_ads_blocked() {
    let (_dir, app) = app_with_favorites(None);
    let result = handle_method(&app, "stats.timeline", &json!({"surface": "small"})).unwrap();
    assert_eq!(result["timeline"]["policy"], "never");
    assert_eq!(result["timeline"]["entries"][0]["payload"]["kind"], "adsBlocked");
    assert_eq!(result["views"][0]["value"], "0");
}

#[test]
fn test_stats_rejects_unknown_kind() {
    let (_dir, app) = app_with_favorites(None);
    let err = handle_method(
        &app,
        "stats.snapshot",
        &json!({"surface": "small", "kind": "cookiesEaten"}),
    )
    .unwrap_err();
    assert!(err.starts_with("invalid kind"));
}

#[test]
fn test_unknown_method() {
    let (_dir, app) = app_with_favorites(None);
    let err = handle_method(&app, "tabs.open", &json!({})).unwrap_err();
    assert_eq!(err, "unknown method: tabs.open");
}
