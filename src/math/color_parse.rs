use crate::error::{ColorError, ColorResult};

use super::hex::Color;

/// Read any opaque CSS color value into a [`Color`].
/// Handles: hex (3/6 digit), named colors, rgb(), hsl().
/// Rejects: transparent, inherit, currentColor, translucent colors, unrecognized.
pub fn parse_css(value: &str) -> ColorResult<Color> {
    let trimmed = value.trim();
    let invalid = || ColorError::InvalidColorFormat(value.to_string());

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return Err(invalid()),
        _ => {}
    }

    // Hex, with or without `#`, keeps the strict 3/6 digit contract
    let bare_hex = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_hexdigit());
    if trimmed.starts_with('#') || bare_hex {
        return Color::decode(trimmed).map_err(|_| invalid());
    }

    match trimmed.parse::<csscolorparser::Color>() {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            if a < 255 {
                Err(invalid())
            } else {
                Ok(Color::new(r, g, b))
            }
        }
        Err(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_passthrough() {
        assert_eq!(parse_css("#ff0000"), Ok(Color::new(255, 0, 0)));
        assert_eq!(parse_css("  #1e293b "), Ok(Color::new(30, 41, 59)));
    }

    #[test]
    fn hex_3digit_expansion() {
        assert_eq!(parse_css("#f00"), Ok(Color::new(255, 0, 0)));
    }

    #[test]
    fn hex_with_alpha_rejected() {
        assert!(parse_css("#ff000080").is_err());
    }

    #[test]
    fn bare_hex_follows_decode() {
        assert_eq!(parse_css("ff0000"), Ok(Color::new(255, 0, 0)));
        assert_eq!(parse_css("abc"), Color::decode("abc"));
        for v in ["ffff", "ff000080", "12345"] {
            assert!(parse_css(v).is_err(), "{v}");
            assert!(Color::decode(v).is_err(), "{v}");
        }
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(parse_css("rgb(255, 0, 128)"), Ok(Color::new(255, 0, 128)));
    }

    #[test]
    fn hsl_red() {
        assert_eq!(parse_css("hsl(0, 100%, 50%)"), Ok(Color::new(255, 0, 0)));
    }

    #[test]
    fn named_color() {
        assert_eq!(parse_css("white"), Ok(Color::WHITE));
    }

    #[test]
    fn translucent_rejected() {
        assert!(parse_css("rgba(255, 0, 0, 0.5)").is_err());
    }

    #[test]
    fn special_values_rejected() {
        for v in ["transparent", "inherit", "currentColor", "unset"] {
            assert!(parse_css(v).is_err(), "{v}");
        }
    }

    #[test]
    fn garbage_rejected() {
        assert_eq!(
            parse_css("nope"),
            Err(ColorError::InvalidColorFormat("nope".to_string()))
        );
    }
}
