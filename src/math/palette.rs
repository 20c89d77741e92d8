use super::hex::Color;
use super::hsl::{hsl_to_rgb, rgb_to_hsl};

/// Channel offset for a percentage: `2.55 * percent`, halves rounded up
/// (toward +inf), so `-25.5` becomes `-25`.
fn shift_amount(percent: f64) -> f64 {
    (2.55 * percent + 0.5).floor()
}

/// Add `amount` to every channel, clamping each to 0-255.
fn offset(color: Color, amount: f64) -> Color {
    Color::from_channels(
        color.r as f64 + amount,
        color.g as f64 + amount,
        color.b as f64 + amount,
    )
}

/// Negative or >100 percentages are accepted and simply saturate.
pub fn lighten(color: Color, percent: f64) -> Color {
    offset(color, shift_amount(percent))
}

pub fn darken(color: Color, percent: f64) -> Color {
    offset(color, -shift_amount(percent))
}

/// Rotate hue by 180 degrees in HSL. Grays map to themselves.
pub fn complementary(color: Color) -> Color {
    hsl_to_rgb(rgb_to_hsl(color).rotate(0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(hex: &str) -> Color {
        Color::decode(hex).unwrap()
    }

    fn within_one(a: Color, b: Color) -> bool {
        a.channels()
            .iter()
            .zip(b.channels())
            .all(|(x, y)| (*x as i32 - y as i32).abs() <= 1)
    }

    #[test]
    fn lighten_gray_by_20() {
        assert_eq!(lighten(c("#808080"), 20.0), c("#b3b3b3"));
    }

    #[test]
    fn darken_gray_by_20() {
        assert_eq!(darken(c("#808080"), 20.0), c("#4d4d4d"));
    }

    #[test]
    fn shifts_clamp_per_channel() {
        assert_eq!(lighten(c("#f0f0f0"), 20.0), Color::WHITE);
        assert_eq!(darken(c("#102030"), 20.0), Color::BLACK);
        assert_eq!(lighten(c("#e01000"), 20.0), Color::new(255, 67, 51));
    }

    #[test]
    fn out_of_range_percent_saturates() {
        assert_eq!(lighten(c("#123456"), 250.0), Color::WHITE);
        assert_eq!(darken(c("#123456"), 1000.0), Color::BLACK);
        // negative lighten darkens
        assert_eq!(lighten(c("#808080"), -20.0), c("#4d4d4d"));
    }

    #[test]
    fn negative_half_steps_round_up() {
        // 2.55 * -10 = -25.5 rounds to -25, not -26
        assert_eq!(lighten(c("#808080"), -10.0), c("#676767"));
        assert_eq!(darken(c("#808080"), -10.0), c("#999999"));
        // -76.5 -> -76
        assert_eq!(darken(Color::BLACK, -30.0), c("#4c4c4c"));
        assert_eq!(lighten(Color::WHITE, -30.0), c("#b3b3b3"));
    }

    #[test]
    fn zero_percent_is_identity() {
        assert_eq!(lighten(c("#3366cc"), 0.0), c("#3366cc"));
        assert_eq!(darken(c("#3366cc"), 0.0), c("#3366cc"));
    }

    #[test]
    fn complement_of_red_is_cyan() {
        assert_eq!(complementary(c("#ff0000")), c("#00ffff"));
    }

    #[test]
    fn complement_of_blue_is_yellow() {
        assert!(within_one(complementary(c("#0000ff")), c("#ffff00")));
    }

    #[test]
    fn complement_of_gray_is_itself() {
        for hex in ["#000000", "#ffffff", "#808080"] {
            assert_eq!(complementary(c(hex)), c(hex));
        }
    }

    #[test]
    fn complement_twice_returns_original() {
        for hex in ["#3366cc", "#ff8800", "#123456", "#fa8072", "#2e7d32", "#d32f2f"] {
            let original = c(hex);
            let back = complementary(complementary(original));
            assert!(within_one(original, back), "{original} -> {back}");
        }
    }
}
