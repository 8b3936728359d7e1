use serde::{Deserialize, Serialize};

/// A 24-bit packed RGB color (`0xRRGGBB`). Carries no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    /// Builds a packed color, masking off anything above the low 24 bits.
    pub const fn new(packed: u32) -> Self {
        Rgb(packed & 0x00FF_FFFF)
    }

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// A color with normalized `[0, 1]` channels, as produced by the host's color pickers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    pub fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }
}
