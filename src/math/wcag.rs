use serde::{Deserialize, Serialize};

use super::hex::Color;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Calculate WCAG contrast ratio between two colors, in [1, 21].
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

pub const AA_THRESHOLD: f64 = 4.5;
pub const AAA_THRESHOLD: f64 = 7.0;

/// Body-text conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Fail => "FAIL",
            Grade::Aa => "AA",
            Grade::Aaa => "AAA",
        }
    }

    pub fn passes(&self) -> bool {
        *self != Grade::Fail
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade a ratio against the WCAG 2.x body-text cutoffs (4.5 and 7.0).
pub fn grade(ratio: f64) -> Grade {
    if ratio >= AAA_THRESHOLD {
        Grade::Aaa
    } else if ratio >= AA_THRESHOLD {
        Grade::Aa
    } else {
        Grade::Fail
    }
}

/// Determine pass/fail for all WCAG thresholds.
pub fn thresholds(ratio: f64, is_large_text: bool) -> WcagResult {
    if is_large_text {
        WcagResult {
            pass_aa: ratio >= 3.0,
            pass_aa_large: ratio >= 3.0,
            pass_aaa: ratio >= 4.5,
            pass_aaa_large: ratio >= 4.5,
        }
    } else {
        WcagResult {
            pass_aa: ratio >= AA_THRESHOLD,
            pass_aa_large: ratio >= 3.0,
            pass_aaa: ratio >= AAA_THRESHOLD,
            pass_aaa_large: ratio >= 4.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

/// Render a ratio the way reports show it: `4.54:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

/// Pick black or white text for a background.
///
/// Uses the quick perceived-brightness weighting (0.299/0.587/0.114 on raw
/// channels), not relative luminance. Keep the two separate.
pub fn contrasting_text_color(bg: Color) -> Color {
    let brightness = (0.299 * bg.r as f64 + 0.587 * bg.g as f64 + 0.114 * bg.b as f64) / 255.0;
    if brightness > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
