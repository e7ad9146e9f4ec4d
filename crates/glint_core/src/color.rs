//! Color primitives shared by every glint crate.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a hex color literal cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The literal had the wrong length (expected 6 or 8 hex digits).
    #[error("invalid color literal `{0}`: expected `#RRGGBB` or `#RRGGBBAA`")]
    InvalidLength(String),
    /// The literal contained a non-hexadecimal character.
    #[error("invalid hex digit in color literal `{0}`")]
    InvalidDigit(String),
}

/// RGBA color with `f32` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` integer.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` literal (the `#` is optional).
    pub fn from_hex_str(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let value = u64::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?;
        match digits.len() {
            6 => Ok(Self::from_hex(value as u32)),
            8 => {
                let rgb = Self::from_hex((value >> 8) as u32);
                Ok(rgb.with_alpha((value & 0xFF) as f32 / 255.0))
            }
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format as a lowercase `#rrggbb` literal, `#rrggbbaa` when translucent.
    pub fn to_hex_string(&self) -> String {
        let channel = |c: f32| (c * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Color::from_hex_str(&literal).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_splits_channels() {
        let color = Color::from_hex(0x2196F3);
        assert_eq!((color.r * 255.0).round(), 33.0);
        assert_eq!((color.g * 255.0).round(), 150.0);
        assert_eq!((color.b * 255.0).round(), 243.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_hex_string_round_trip() {
        for hex in ["#2196f3", "#ff9800", "#212121", "#e0e0e0", "#ffffff"] {
            let color = Color::from_hex_str(hex).unwrap();
            assert_eq!(color.to_hex_string(), hex);
        }
    }

    #[test]
    fn test_from_hex_str_accepts_alpha_and_bare_digits() {
        let translucent = Color::from_hex_str("#2196F380").unwrap();
        assert_eq!(translucent.to_hex_string(), "#2196f380");

        let bare = Color::from_hex_str("ff9800").unwrap();
        assert_eq!(bare, Color::from_hex(0xFF9800));
    }

    #[test]
    fn test_from_hex_str_rejects_malformed_literals() {
        assert_eq!(
            Color::from_hex_str("#123"),
            Err(ColorParseError::InvalidLength("#123".to_string()))
        );
        assert_eq!(
            Color::from_hex_str("#21z6f3"),
            Err(ColorParseError::InvalidDigit("#21z6f3".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_hex_literals() {
        let json = serde_json::to_string(&Color::from_hex(0x2196F3)).unwrap();
        assert_eq!(json, "\"#2196f3\"");

        let parsed: Color = serde_json::from_str("\"#757575\"").unwrap();
        assert_eq!(parsed, Color::from_hex(0x757575));
    }
}
