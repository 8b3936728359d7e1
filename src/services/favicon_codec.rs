//! Favicon attribute codec.
//!
//! Persists [`FaviconAttributes`] in the compact form the app writes into the
//! shared container: image bytes as base64, the background color packed into a
//! 24-bit integer and the content mode as its raw integer value.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::types::color::{Color, Rgb};
use crate::types::errors::CodecError;
use crate::types::favorite::{ContentMode, FaviconAttributes};

/// Packs a normalized color into `0xRRGGBB`. Alpha is dropped.
pub fn pack_color(color: &Color) -> Rgb {
    Rgb::from_channels(
        channel_to_byte(color.red),
        channel_to_byte(color.green),
        channel_to_byte(color.blue),
    )
}

/// Expands a packed color back into normalized channels, fully opaque.
pub fn unpack_color(rgb: Rgb) -> Color {
    Color::opaque(
        f64::from(rgb.red()) / 255.0,
        f64::from(rgb.green()) / 255.0,
        f64::from(rgb.blue()) / 255.0,
    )
}

fn channel_to_byte(value: f64) -> u8 {
    // NaN saturates to 0 on the cast.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// On-disk shape of the `favicon` object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_mode: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_padding: Option<bool>,
}

/// Encodes attributes into their wire form.
pub fn encode_favicon_attributes(attributes: &FaviconAttributes) -> FaviconWire {
    FaviconWire {
        image: attributes.image.as_ref().map(|bytes| BASE64.encode(bytes)),
        background_color: attributes
            .background_color
            .map(|rgb| i64::from(rgb.packed())),
        content_mode: Some(attributes.content_mode.raw_value()),
        include_padding: Some(attributes.include_padding),
    }
}

/// Decodes attributes from their wire form.
///
/// Missing fields fall back to no image, no background, `AspectFit` and no
/// padding. Bits above the low 24 of `backgroundColor` are ignored.
pub fn decode_favicon_attributes(wire: FaviconWire) -> Result<FaviconAttributes, CodecError> {
    let image = match wire.image {
        Some(encoded) => Some(
            BASE64
                .decode(encoded.as_bytes())
                .map_err(|e| CodecError::InvalidImage(e.to_string()))?,
        ),
        None => None,
    };

    Ok(FaviconAttributes {
        image,
        background_color: wire
            .background_color
            .map(|raw| Rgb::new((raw & 0x00FF_FFFF) as u32)),
        content_mode: wire
            .content_mode
            .map(ContentMode::from_raw)
            .unwrap_or_default(),
        include_padding: wire.include_padding.unwrap_or(false),
    })
}

impl From<FaviconAttributes> for FaviconWire {
    fn from(attributes: FaviconAttributes) -> Self {
        encode_favicon_attributes(&attributes)
    }
}

impl TryFrom<FaviconWire> for FaviconAttributes {
    type Error = CodecError;

    fn try_from(wire: FaviconWire) -> Result<Self, Self::Error> {
        decode_favicon_attributes(wire)
    }
}
