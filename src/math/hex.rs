use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};

/// A 24-bit sRGB color. Channels are 0-255 by construction.
/// Serializes as its `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from real-valued channels (0-255 scale).
    /// Each channel is rounded to the nearest integer, then clamped.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional, case-insensitive).
    /// Shorthand doubles each digit: `#abc` -> `#aabbcc`.
    pub fn decode(hex: &str) -> ColorResult<Self> {
        let raw = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || ColorError::InvalidColorFormat(hex.to_string());

        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&raw[i..i + 1], 16).map_err(|_| invalid());
        let byte = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).map_err(|_| invalid());

        match raw.len() {
            3 => Ok(Self::new(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn encode(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::decode(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.encode()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(hex: String) -> ColorResult<Self> {
        Self::decode(&hex)
    }
}

fn to_byte(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    channel.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_6digit_hex() {
        assert_eq!(Color::decode("#ff0000"), Ok(Color::new(255, 0, 0)));
        assert_eq!(Color::decode("#00ff00"), Ok(Color::new(0, 255, 0)));
        assert_eq!(Color::decode("#1e293b"), Ok(Color::new(30, 41, 59)));
    }

    #[test]
    fn decode_without_hash_and_uppercase() {
        assert_eq!(Color::decode("1E293B"), Ok(Color::new(30, 41, 59)));
    }

    #[test]
    fn decode_3digit_doubles_each_nibble() {
        assert_eq!(Color::decode("#ABC"), Color::decode("#AABBCC"));
        assert_eq!(Color::decode("#f00"), Ok(Color::new(255, 0, 0)));
    }

    #[test]
    fn decode_rejects_bad_lengths() {
        for input in ["#12", "#1234", "#12345", "#1234567", "#ff000080", "", "#"] {
            assert_eq!(
                Color::decode(input),
                Err(ColorError::InvalidColorFormat(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn decode_rejects_non_hex() {
        assert!(Color::decode("#zzzzzz").is_err());
        assert!(Color::decode("#xyz").is_err());
        assert!(Color::decode("not-a-color").is_err());
        assert!(Color::decode("+12345").is_err());
        // multi-byte input must not panic on slicing
        assert!(Color::decode("#éé").is_err());
    }

    #[test]
    fn encode_pads_and_lowercases() {
        assert_eq!(Color::new(0, 10, 255).encode(), "#000aff");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn decode_encode_round_trip() {
        for c in [Color::BLACK, Color::WHITE, Color::new(1, 128, 254), Color::new(30, 41, 59)] {
            assert_eq!(Color::decode(&c.encode()), Ok(c));
        }
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::new(255, 0, 128)).unwrap();
        assert_eq!(json, "\"#ff0080\"");
        let back: Color = serde_json::from_str("\"#F08\"").unwrap();
        assert_eq!(back, Color::new(255, 0, 136));
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
    }

    #[test]
    fn from_channels_rounds_and_clamps() {
        assert_eq!(Color::from_channels(144.585, 142.29, -3.0), Color::new(145, 142, 0));
        assert_eq!(Color::from_channels(255.4, 300.0, f64::NAN), Color::new(255, 255, 0));
    }
}
