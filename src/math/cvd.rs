use super::hex::Color;

/// Approximate how a color looks to a viewer with red-green color-vision
/// deficiency.
///
/// Fixed channel-mixing matrix over raw (gamma-encoded) sRGB values:
///   R' = 0.567 R + 0.433 G
///   G' = 0.558 R + 0.442 G
///   B' = 0.242 G + 0.758 B
///
/// Not parameterized by deficiency type or severity.
pub fn simulate_red_green(color: Color) -> Color {
    let r = color.r as f64;
    let g = color.g as f64;
    let b = color.b as f64;

    Color::from_channels(
        0.567 * r + 0.433 * g,
        0.558 * r + 0.442 * g,
        0.242 * g + 0.758 * b,
    )
}
