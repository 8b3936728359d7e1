use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use super::color::Rgb;

/// How a favicon image is fitted into its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Stretch to fill the tile, ignoring aspect ratio.
    Fill,
    /// Scale to fit inside the tile, preserving aspect ratio.
    #[default]
    AspectFit,
    /// Scale to cover the tile, preserving aspect ratio.
    AspectFill,
    /// Any other host content mode, kept as its raw wire value.
    Other(i64),
}

impl ContentMode {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => ContentMode::Fill,
            1 => ContentMode::AspectFit,
            2 => ContentMode::AspectFill,
            other => ContentMode::Other(other),
        }
    }

    pub fn raw_value(self) -> i64 {
        match self {
            ContentMode::Fill => 0,
            ContentMode::AspectFit => 1,
            ContentMode::AspectFill => 2,
            ContentMode::Other(raw) => raw,
        }
    }
}

impl Serialize for ContentMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw_value())
    }
}

/// Rendering hints captured for a site's icon.
///
/// Serialized through [`crate::services::favicon_codec`]; the background color
/// is stored as packed RGB so any alpha the source color had is lost.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "crate::services::favicon_codec::FaviconWire",
    into = "crate::services::favicon_codec::FaviconWire"
)]
pub struct FaviconAttributes {
    pub image: Option<Vec<u8>>,
    pub background_color: Option<Rgb>,
    pub content_mode: ContentMode,
    pub include_padding: bool,
}

/// One favorited site shown in the Favorites grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<FaviconAttributes>,
}

impl FavoriteRecord {
    pub fn new(url: Url) -> Self {
        Self { url, favicon: None }
    }

    pub fn with_favicon(url: Url, favicon: FaviconAttributes) -> Self {
        Self {
            url,
            favicon: Some(favicon),
        }
    }

    /// Returns the favicon image bytes, if the record has any.
    pub fn image(&self) -> Option<&[u8]> {
        self.favicon.as_ref()?.image.as_deref()
    }
}
