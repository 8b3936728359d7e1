//! Unit tests for the favorites grid and stat views.

use gitbrowser_widgets::services::layout_engine::LayoutMetrics;
use gitbrowser_widgets::services::view_renderer::{
    render_favorites, render_stat, FavoriteCell, StatView, ViewNode,
};
use gitbrowser_widgets::types::color::Rgb;
use gitbrowser_widgets::types::favorite::{ContentMode, FaviconAttributes, FavoriteRecord};
use gitbrowser_widgets::types::stats::{StatKind, StatSnapshot};
use gitbrowser_widgets::types::timeline::{Entry, SurfaceSize};
use rstest::rstest;
use url::Url;

fn cells(node: ViewNode) -> (LayoutMetrics, Vec<FavoriteCell>) {
    match node {
        ViewNode::FavoritesGrid { metrics, cells } => (metrics, cells),
        other => panic!("expected a favorites grid, got {:?}", other),
    }
}

fn brave_only() -> Entry<Vec<FavoriteRecord>> {
    let favorites: Vec<FavoriteRecord> =
        serde_json::from_str(r#"[{"url":"https://brave.com"}]"#).unwrap();
    Entry::now(favorites)
}

#[rstest]
#[case(SurfaceSize::Medium, 7)]
#[case(SurfaceSize::Large, 15)]
fn test_single_favorite_renders_glyph_and_blanks(
    #[case] surface: SurfaceSize,
    #[case] blanks: usize,
) {
    let (_, cells) = cells(render_favorites(&brave_only(), surface));

    assert_eq!(cells.len(), blanks + 1);
    match &cells[0] {
        FavoriteCell::Glyph { letter, destination } => {
            assert_eq!(letter, "B");
            assert_eq!(destination.as_str(), "https://brave.com/");
        }
        other => panic!("expected glyph, got {:?}", other),
    }
    assert_eq!(cells.iter().filter(|c| c.is_blank()).count(), blanks);
}

#[test]
fn test_favicon_cell_keeps_attributes() {
    let favorite = FavoriteRecord::with_favicon(
        Url::parse("https://github.com").unwrap(),
        FaviconAttributes {
            image: Some(vec![1, 2, 3]),
            background_color: Some(Rgb::new(0x24292F)),
            content_mode: ContentMode::Fill,
            include_padding: true,
        },
    );
    let (_, cells) = cells(render_favorites(&Entry::now(vec![favorite]), SurfaceSize::Medium));

    assert_eq!(
        cells[0],
        FavoriteCell::Favicon {
            destination: Url::parse("https://github.com").unwrap(),
            image: vec![1, 2, 3],
            content_mode: ContentMode::Fill,
            include_padding: true,
            background_color: Some(Rgb::new(0x24292F)),
        }
    );
}

#[test]
fn test_favicon_without_image_falls_back_to_glyph() {
    let favorite = FavoriteRecord::with_favicon(
        Url::parse("https://www.wikipedia.org").unwrap(),
        FaviconAttributes {
            background_color: Some(Rgb::WHITE),
            ..FaviconAttributes::default()
        },
    );
    let (_, cells) = cells(render_favorites(&Entry::now(vec![favorite]), SurfaceSize::Large));
    assert!(matches!(&cells[0], FavoriteCell::Glyph { letter, .. } if letter == "W"));
}

#[rstest]
#[case(SurfaceSize::Small)]
#[case(SurfaceSize::ExtraLarge)]
fn test_unsupported_surface_renders_zero_layout(#[case] surface: SurfaceSize) {
    let (metrics, cells) = cells(render_favorites(&brave_only(), surface));
    assert_eq!(metrics, LayoutMetrics::ZERO);
    assert!(cells.is_empty());
}

#[test]
fn test_empty_entry_is_all_blank() {
    let (metrics, cells) = cells(render_favorites(&Entry::now(Vec::new()), SurfaceSize::Medium));
    assert_eq!(metrics.rows, 2);
    assert_eq!(cells.len(), 8);
    assert!(cells.iter().all(FavoriteCell::is_blank));
}

#[test]
fn test_render_stat() {
    let entry = Entry::now(StatSnapshot::new(StatKind::HttpsUpgrades, "12K"));
    assert_eq!(
        render_stat(&entry),
        ViewNode::Stat(StatView {
            value: "12K".to_string(),
            name: "HTTPS Upgrades".to_string(),
            color: Rgb::new(0x20CB66),
        })
    );
}

#[test]
fn test_view_serializes_with_type_tags() {
    let json = serde_json::to_value(render_favorites(&brave_only(), SurfaceSize::Medium)).unwrap();
    assert_eq!(json["type"], "favoritesGrid");
    assert_eq!(json["cells"][0]["type"], "glyph");
    assert_eq!(json["cells"][0]["letter"], "B");
    assert_eq!(json["cells"][1]["type"], "blank");
}
