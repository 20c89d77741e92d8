//! Flat records handed across the Node boundary.
//!
//! Colors travel as `#rrggbb` strings and grades as `"FAIL" | "AA" | "AAA"`.

#[cfg(feature = "node")]
use napi_derive::napi;

use crate::math::checker::PairCheck;
use crate::units::FontUnits;

/// JS view of [`PairCheck`]
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq)]
pub struct PairCheckJs {
    pub background: String,
    pub text: String,
    /// Unrounded WCAG ratio
    pub ratio: f64,
    /// e.g. "4.54:1"
    pub ratio_label: String,
    pub grade: String,
    pub pass_aa: bool,
    pub pass_aaa: bool,
    pub simulated_background: String,
    pub simulated_text: String,
    pub simulated_ratio: f64,
    pub simulated_ratio_label: String,
    pub simulated_grade: String,
    pub needs_non_color_cues: bool,
}

impl From<PairCheck> for PairCheckJs {
    fn from(check: PairCheck) -> Self {
        Self {
            background: check.background.encode(),
            text: check.text.encode(),
            ratio: check.ratio,
            ratio_label: crate::math::wcag::format_ratio(check.ratio),
            grade: check.grade.to_string(),
            pass_aa: check.pass_aa,
            pass_aaa: check.pass_aaa,
            simulated_background: check.simulated_background.encode(),
            simulated_text: check.simulated_text.encode(),
            simulated_ratio: check.simulated_ratio,
            simulated_ratio_label: crate::math::wcag::format_ratio(check.simulated_ratio),
            simulated_grade: check.simulated_grade.to_string(),
            needs_non_color_cues: check.needs_non_color_cues,
        }
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontUnitsJs {
    pub px: f64,
    pub pt: f64,
    pub rem: f64,
    pub sp: f64,
}

impl From<FontUnits> for FontUnitsJs {
    fn from(units: FontUnits) -> Self {
        Self {
            px: units.px,
            pt: units.pt,
            rem: units.rem,
            sp: units.sp,
        }
    }
}
