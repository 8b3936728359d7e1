//! View Renderer — turns timeline entries into a visual tree.
//!
//! Pure functions only: no I/O and no error path. Whatever the entry holds is
//! drawn; missing data shows up as blank tiles or empty text.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Serialize, Serializer};
use url::{Host, Url};

use crate::services::layout_engine::{favorites_metrics, place_favorites, LayoutMetrics};
use crate::types::color::Rgb;
use crate::types::favorite::{ContentMode, FavoriteRecord};
use crate::types::stats::StatSnapshot;
use crate::types::timeline::{Entry, SurfaceSize};

/// Two-letter TLDs whose registrable domains sit one level deeper (`bbc.co.uk`).
const SECOND_LEVEL_LABELS: &[&str] = &["ac", "co", "com", "edu", "gov", "net", "org"];

/// Root of a rendered widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewNode {
    FavoritesGrid {
        metrics: LayoutMetrics,
        cells: Vec<FavoriteCell>,
    },
    Stat(StatView),
}

/// One tile of the favorites grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FavoriteCell {
    Favicon {
        destination: Url,
        #[serde(serialize_with = "serialize_base64")]
        image: Vec<u8>,
        content_mode: ContentMode,
        include_padding: bool,
        background_color: Option<Rgb>,
    },
    Glyph {
        destination: Url,
        letter: String,
    },
    Blank,
}

impl FavoriteCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, FavoriteCell::Blank)
    }
}

/// Value-over-label block of the Stats widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatView {
    pub value: String,
    pub name: String,
    pub color: Rgb,
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64.encode(bytes))
}

/// Renders a favorites entry for `surface`.
pub fn render_favorites(entry: &Entry<Vec<FavoriteRecord>>, surface: SurfaceSize) -> ViewNode {
    let metrics = favorites_metrics(surface);
    let cells = place_favorites(&entry.payload, &metrics)
        .into_iter()
        .map(|slot| slot.map_or(FavoriteCell::Blank, render_favorite))
        .collect();
    ViewNode::FavoritesGrid { metrics, cells }
}

fn render_favorite(favorite: &FavoriteRecord) -> FavoriteCell {
    match (&favorite.favicon, favorite.image()) {
        (Some(attributes), Some(image)) => FavoriteCell::Favicon {
            destination: favorite.url.clone(),
            image: image.to_vec(),
            content_mode: attributes.content_mode,
            include_padding: attributes.include_padding,
            background_color: attributes.background_color,
        },
        _ => FavoriteCell::Glyph {
            destination: favorite.url.clone(),
            letter: fallback_glyph(&favorite.url),
        },
    }
}

/// Renders a stats entry.
pub fn render_stat(entry: &Entry<StatSnapshot>) -> ViewNode {
    let snapshot = &entry.payload;
    ViewNode::Stat(StatView {
        value: snapshot.display_value.clone(),
        name: snapshot.display_name.clone(),
        color: snapshot.color,
    })
}

/// Uppercased first letter or digit of the URL's base domain.
///
/// Returns `""` when the URL has no host or the host has nothing alphanumeric.
pub fn fallback_glyph(url: &Url) -> String {
    base_domain(url)
        .and_then(|domain| domain.chars().find(|c| c.is_alphanumeric()))
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}

/// The registrable part of the URL's host: `www.news.bbc.co.uk` → `bbc.co.uk`.
///
/// Punycode labels come back in Unicode, so `xn--bcher-kva.de` → `bücher.de`.
pub fn base_domain(url: &Url) -> Option<String> {
    let domain = match url.host()? {
        Host::Domain(domain) => domain.trim_end_matches('.'),
        Host::Ipv4(addr) => return Some(addr.to_string()),
        Host::Ipv6(addr) => return Some(addr.to_string()),
    };

    let labels: Vec<&str> = domain.split('.').filter(|l| !l.is_empty()).collect();
    if labels.is_empty() {
        return None;
    }

    let n = labels.len();
    let keep = if n >= 3
        && labels[n - 1].len() == 2
        && SECOND_LEVEL_LABELS.contains(&labels[n - 2])
    {
        3
    } else {
        2
    };
    let base: Vec<String> = labels[n.saturating_sub(keep)..]
        .iter()
        .map(|label| label_to_unicode(label))
        .collect();
    Some(base.join("."))
}

fn label_to_unicode(label: &str) -> String {
    label
        .strip_prefix("xn--")
        .and_then(idna::punycode::decode_to_string)
        .unwrap_or_else(|| label.to_string())
}
