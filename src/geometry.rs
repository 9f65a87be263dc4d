//! Shared geometric and color primitives used by the skin generators and the UI layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned block stamped onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && u64::from(x) < u64::from(self.x) + u64::from(self.width)
            && u64::from(y) < u64::from(self.y) + u64::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 3, 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channel quadruple with the alpha forced to fully opaque.
    pub const fn opaque_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    pub fn parse_hex(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(value.to_string()));
        };
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))
        };
        let short = |index: usize| channel(index..index + 1).map(|nibble| nibble * 0x11);

        match digits.len() {
            3 => Ok(Self::new(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::with_alpha(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength(value.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(value)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_short_long_and_alpha_forms() {
        assert_eq!(Color::parse_hex("#8b4b62"), Ok(Color::new(0x8b, 0x4b, 0x62)));
        assert_eq!(Color::parse_hex("#fff"), Ok(Color::new(255, 255, 255)));
        assert_eq!(
            Color::parse_hex("#ffffff99"),
            Ok(Color::with_alpha(255, 255, 255, 0x99))
        );
        assert_eq!(Color::parse_hex("  #F9D5E5 "), Ok(Color::new(0xf9, 0xd5, 0xe5)));
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert!(matches!(
            Color::parse_hex("8b4b62"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse_hex("#8b4b6"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#zz4b62"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#ééé"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn to_hex_omits_opaque_alpha() {
        assert_eq!(Color::new(0x8b, 0x4b, 0x62).to_hex(), "#8b4b62");
        assert_eq!(Color::with_alpha(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(0xf9, 0xd5, 0xe5)).unwrap();
        assert_eq!(json, "\"#f9d5e5\"");
        let parsed: Color = serde_json::from_str("\"#8b4b62\"").unwrap();
        assert_eq!(parsed, Color::new(0x8b, 0x4b, 0x62));
        assert!(serde_json::from_str::<Color>("\"pink\"").is_err());
    }

    #[test]
    fn pixel_rect_contains_is_half_open() {
        let rect = PixelRect::new(2, 0, 20, 4);
        assert!(rect.contains(2, 0));
        assert!(rect.contains(21, 3));
        assert!(!rect.contains(22, 0));
        assert!(!rect.contains(2, 4));
        assert!(!rect.contains(1, 0));
        assert!(PixelRect::new(0, 0, 0, 5).is_empty());
    }
}
