use serde::Serialize;

pub const DEFAULT_FONT_PX: f64 = 16.0;

/// A font size expressed in the units each platform guideline uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontUnits {
    pub px: f64,
    pub pt: f64,
    pub rem: f64,
    pub sp: f64,
}

impl FontUnits {
    /// `pt = px * 0.75`, `rem = px / 16`, `sp = px`.
    /// Missing, zero or non-finite sizes fall back to 16px.
    pub fn from_px(px: Option<f64>) -> Self {
        let px = match px {
            Some(v) if v.is_finite() && v != 0.0 => v,
            _ => DEFAULT_FONT_PX,
        };
        Self {
            px,
            pt: px * 0.75,
            rem: px / DEFAULT_FONT_PX,
            sp: px,
        }
    }
}
