//! Hex-string entry points over the typed color core.
//!
//! Every function here accepts `#RGB` / `#RRGGBB` (leading `#` optional) and
//! returns lowercase `#rrggbb`. Invalid input is an
//! [`InvalidColorFormat`](crate::error::ColorError::InvalidColorFormat)
//! everywhere, except the two lenient helpers, which substitute a fixed
//! fallback value through [`lenient`].

use tracing::debug;

use crate::error::ColorResult;
use crate::math::checker::{check_pair as check_colors, PairCheck};
use crate::math::color_parse::parse_css;
use crate::math::hex::Color;
use crate::math::{cvd, palette, wcag};

pub fn decode(hex: &str) -> ColorResult<Color> {
    Color::decode(hex)
}

pub fn encode(color: Color) -> String {
    color.encode()
}

/// Canonicalize a hex color: `#ABC` -> `#aabbcc`.
pub fn normalize_hex(hex: &str) -> ColorResult<String> {
    decode(hex).map(encode)
}

/// The single place an unreadable color is swallowed: `fallback` is returned
/// instead of an error.
fn lenient<T>(hex: &str, fallback: T, f: impl FnOnce(Color) -> T) -> T {
    match Color::decode(hex) {
        Ok(color) => f(color),
        Err(err) => {
            debug!(%err, "using fallback for unreadable color");
            fallback
        }
    }
}

pub fn relative_luminance(hex: &str) -> ColorResult<f64> {
    decode(hex).map(wcag::relative_luminance)
}

/// Luminance where invalid input counts as black (0).
pub fn luminance_lenient(hex: &str) -> f64 {
    lenient(hex, 0.0, wcag::relative_luminance)
}

pub fn contrast_ratio(a: &str, b: &str) -> ColorResult<f64> {
    Ok(wcag::contrast_ratio(decode(a)?, decode(b)?))
}

pub fn grade(ratio: f64) -> wcag::Grade {
    wcag::grade(ratio)
}

/// Black or white text for `bg`. Lenient: unreadable input gets black text.
pub fn contrasting_text_color(bg: &str) -> String {
    lenient(bg, Color::BLACK, wcag::contrasting_text_color).encode()
}

pub fn lighten(hex: &str, percent: f64) -> ColorResult<String> {
    Ok(palette::lighten(decode(hex)?, percent).encode())
}

pub fn darken(hex: &str, percent: f64) -> ColorResult<String> {
    Ok(palette::darken(decode(hex)?, percent).encode())
}

pub fn complementary_color(hex: &str) -> ColorResult<String> {
    Ok(palette::complementary(decode(hex)?).encode())
}

pub fn simulate_red_green_deficiency(hex: &str) -> ColorResult<String> {
    Ok(cvd::simulate_red_green(decode(hex)?).encode())
}

/// Pair analysis for free-form inputs; accepts any opaque CSS color.
pub fn check_pair(background: &str, text: &str) -> ColorResult<PairCheck> {
    Ok(check_colors(parse_css(background)?, parse_css(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn normalize_expands_and_lowercases() {
        assert_eq!(normalize_hex("#ABC").unwrap(), "#aabbcc");
        assert_eq!(normalize_hex("FF0000").unwrap(), "#ff0000");
        assert!(normalize_hex("#12").is_err());
    }

    #[test]
    fn strict_functions_reject_invalid() {
        let bad = "#zzzzzz";
        let expected = Err(ColorError::InvalidColorFormat(bad.to_string()));
        assert_eq!(relative_luminance(bad), expected);
        assert_eq!(contrast_ratio("#ffffff", bad), expected);
        assert_eq!(contrast_ratio(bad, "#ffffff"), expected);
        assert!(lighten(bad, 20.0).is_err());
        assert!(darken(bad, 20.0).is_err());
        assert!(complementary_color(bad).is_err());
        assert!(simulate_red_green_deficiency(bad).is_err());
    }

    #[test]
    fn lenient_luminance_of_invalid_is_zero() {
        assert_eq!(luminance_lenient("#12"), 0.0);
        assert_eq!(luminance_lenient(""), 0.0);
    }

    #[test]
    fn lenient_text_color() {
        assert_eq!(contrasting_text_color("#FFFFFF"), "#000000");
        assert_eq!(contrasting_text_color("#000000"), "#ffffff");
        assert_eq!(contrasting_text_color("#fff"), "#000000");
        assert_eq!(contrasting_text_color("bogus"), "#000000");
        assert_eq!(contrasting_text_color("#1"), "#000000");
    }

    #[test]
    fn white_black_ratio() {
        let ratio = contrast_ratio("#FFFFFF", "#000000").unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn palette_strings() {
        assert_eq!(lighten("#808080", 20.0).unwrap(), "#b3b3b3");
        assert_eq!(darken("#808080", 20.0).unwrap(), "#4d4d4d");
        assert_eq!(complementary_color("#FF0000").unwrap(), "#00ffff");
        assert_eq!(simulate_red_green_deficiency("#FF0000").unwrap(), "#918e00");
    }

    #[test]
    fn check_pair_accepts_css() {
        let result = check_pair("white", "rgb(0, 0, 0)").unwrap();
        assert!(result.pass_aaa);
        assert!(check_pair("transparent", "#000").is_err());
    }

    #[test]
    fn check_pair_and_decode_share_hex_rules() {
        assert!(decode("ffff").is_err());
        assert!(check_pair("ffff", "#000").is_err());
        assert!(check_pair("#fff", "000").is_ok());
    }
}
