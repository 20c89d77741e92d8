use serde::Serialize;

use super::cvd::simulate_red_green;
use super::hex::Color;
use super::wcag::{contrast_ratio, grade, thresholds, Grade, AA_THRESHOLD};

/// Contrast of a text/background pair, as seen normally and under red-green CVD.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairCheck {
    pub background: Color,
    pub text: Color,
    pub ratio: f64,
    pub grade: Grade,
    pub pass_aa: bool,
    pub pass_aaa: bool,
    pub simulated_background: Color,
    pub simulated_text: Color,
    pub simulated_ratio: f64,
    pub simulated_grade: Grade,
    /// Simulated contrast is below AA: color alone will not separate the pair,
    /// so icons, weight or other non-color cues are needed.
    pub needs_non_color_cues: bool,
}

/// Check a single pair. Ratios are kept unrounded; round at display time.
pub fn check_pair(background: Color, text: Color) -> PairCheck {
    let ratio = contrast_ratio(background, text);
    let wcag = thresholds(ratio, false);

    let simulated_background = simulate_red_green(background);
    let simulated_text = simulate_red_green(text);
    let simulated_ratio = contrast_ratio(simulated_background, simulated_text);

    PairCheck {
        background,
        text,
        ratio,
        grade: grade(ratio),
        pass_aa: wcag.pass_aa,
        pass_aaa: wcag.pass_aaa,
        simulated_background,
        simulated_text,
        simulated_ratio,
        simulated_grade: grade(simulated_ratio),
        needs_non_color_cues: simulated_ratio < AA_THRESHOLD,
    }
}
