//! RGB color tokens and hex parsing helpers.
//!
//! Palette constants are authored as `#RRGGBB` values; this module keeps the
//! parsing, formatting, and contrast math in one place so the derivation
//! table stays a plain lookup.

use crossterm::style::Color;
use std::fmt;

/// An opaque RGB color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    pub fn from_hex(input: &str) -> Result<Self, String> {
        let normalized = input.trim().to_ascii_lowercase();
        let Some(hex) = normalized.strip_prefix('#') else {
            return Err(format!("invalid hex color `{input}` (expected #RRGGBB)"));
        };
        if hex.len() != 6 {
            return Err(format!("invalid hex color `{input}` (expected #RRGGBB)"));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| format!("invalid hex color `{input}`"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| format!("invalid hex color `{input}`"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| format!("invalid hex color `{input}`"))?;
        Ok(Self { r, g, b })
    }

    /// `#RRGGBB` representation, matching the authored constant style.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceived luminance in `0.0..=1.0` (standard Rec. 601 weights).
    pub fn luminance(&self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)) / 255.0
    }

    /// Readable text color for this color as a background: black on light
    /// backgrounds, white on dark ones.
    ///
    /// Render-time helper only. Theme derivation never calls this; every
    /// palette contrast choice is authored in the mode tables.
    pub fn contrast_text(&self) -> Rgb {
        if self.luminance() > 0.5 {
            BLACK
        } else {
            WHITE
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb {
            r: value.r,
            g: value.g,
            b: value.b,
        }
    }
}
