//! RGBA color values.
//!
//! The pipeline deals in three color forms: config files carry hex
//! strings, drawing carries `Color` (f32 channels), and frame buffers
//! carry `[u8; 4]`. This module is the conversion point between them.

use serde::{Deserialize, Serialize};

/// An RGBA color with f32 channels in the [0.0, 1.0] range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color (alpha = 1.0).
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color from 8-bit RGBA channels.
    pub fn from_rgba8(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels.map(|c| c as f32 / 255.0);
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RRGGBB` or `#RRGGBBAA`, leading `#`
    /// optional. Alpha defaults to opaque when absent.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(invalid());
        }
        let mut channels = [255u8; 4];
        for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
            channels[i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }
        Ok(Self::from_rgba8(channels))
    }

    /// Quantize to 8-bit RGBA channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color string '{0}'")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex("#FF8800").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 255]);
    }

    #[test]
    fn test_from_hex_rgba() {
        let c = Color::from_hex("#FF880080").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 128]);
    }

    #[test]
    fn test_from_hex_without_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::GREEN);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        for bad in ["", "#12345", "#GG0000", "not-a-color", "#ffçç00"] {
            let err = Color::from_hex(bad).unwrap_err();
            assert!(err.to_string().contains(bad), "error should name {bad:?}");
        }
    }

    #[test]
    fn test_rgba8_roundtrip() {
        let channels = [12, 199, 0, 128];
        assert_eq!(Color::from_rgba8(channels).to_rgba8(), channels);
    }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default().to_rgba8(), [0, 0, 0, 255]);
    }
}
