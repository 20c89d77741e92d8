//! `#[napi]` exports. Built only with the `node` feature.

use napi::{Error, Result};
use napi_derive::napi;

use crate::engine;
use crate::guide::{self, GuideContext, KnowledgeBase};
use crate::types::{FontUnitsJs, PairCheckJs};
use crate::units::FontUnits;

fn reason(err: impl std::fmt::Display) -> Error {
    Error::from_reason(err.to_string())
}

#[napi]
pub fn health_check() -> String {
    "colorguide-native ok".to_string()
}

#[napi]
pub fn normalize_hex(hex: String) -> Result<String> {
    engine::normalize_hex(&hex).map_err(reason)
}

#[napi]
pub fn relative_luminance(hex: String) -> Result<f64> {
    engine::relative_luminance(&hex).map_err(reason)
}

#[napi]
pub fn contrast_ratio(a: String, b: String) -> Result<f64> {
    engine::contrast_ratio(&a, &b).map_err(reason)
}

#[napi]
pub fn grade(ratio: f64) -> String {
    engine::grade(ratio).to_string()
}

#[napi]
pub fn contrasting_text_color(bg: String) -> String {
    engine::contrasting_text_color(&bg)
}

#[napi]
pub fn lighten(hex: String, percent: f64) -> Result<String> {
    engine::lighten(&hex, percent).map_err(reason)
}

#[napi]
pub fn darken(hex: String, percent: f64) -> Result<String> {
    engine::darken(&hex, percent).map_err(reason)
}

#[napi]
pub fn complementary_color(hex: String) -> Result<String> {
    engine::complementary_color(&hex).map_err(reason)
}

#[napi]
pub fn simulate_red_green_deficiency(hex: String) -> Result<String> {
    engine::simulate_red_green_deficiency(&hex).map_err(reason)
}

#[napi]
pub fn check_pair(background: String, text: String) -> Result<PairCheckJs> {
    engine::check_pair(&background, &text)
        .map(PairCheckJs::from)
        .map_err(reason)
}

#[napi]
pub fn font_units(px: Option<f64>) -> FontUnitsJs {
    FontUnits::from_px(px).into()
}

/// Local fallback guide. `context` and `knowledge_base` are plain JS objects.
#[napi]
pub fn generate_local_guide(
    context: serde_json::Value,
    knowledge_base: serde_json::Value,
) -> Result<serde_json::Value> {
    let ctx: GuideContext = serde_json::from_value(context).map_err(reason)?;
    let kb: KnowledgeBase = serde_json::from_value(knowledge_base).map_err(reason)?;
    let report = guide::local_report(&ctx, &kb).map_err(reason)?;
    serde_json::to_value(report).map_err(reason)
}
