//! Design-guide report assembly.
//!
//! A guide is normally produced by a remote service. When that call fails for
//! any reason the caller still gets a report: [`generate_guide`] falls back to
//! [`local_report`], which derives everything from the primary color and the
//! platform guideline.

mod knowledge;

pub use knowledge::{
    GuideContext, IriGroup, KnowledgeBase, Mood, MoodGroup, PlatformGuide, TypeScale,
    DEFAULT_PLATFORM,
};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GuideError;
use crate::math::hex::Color;
use crate::math::palette::{complementary, darken, lighten};
use crate::math::wcag::{contrast_ratio, contrasting_text_color, format_ratio, grade, Grade};

/// Percentage used for the light and dark shades of each palette color.
pub const SHADE_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shades {
    pub main: String,
    pub light: String,
    pub dark: String,
}

impl Shades {
    pub fn of(color: Color) -> Self {
        Self {
            main: color.encode(),
            light: lighten(color, SHADE_PERCENT).encode(),
            dark: darken(color, SHADE_PERCENT).encode(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSystem {
    pub primary: Shades,
    pub secondary: Shades,
}

impl ColorSystem {
    /// Primary shades plus the shades of its complement.
    pub fn from_primary(primary: Color) -> Self {
        Self {
            primary: Shades::of(primary),
            secondary: Shades::of(complementary(primary)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub body_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityNote {
    pub text_color_on_primary: String,
    /// Display form, e.g. `5.25:1`.
    pub contrast_ratio: String,
}

/// A complete design guide, whether remote or locally generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideReport {
    pub color_system: ColorSystem,
    pub typography: Typography,
    pub accessibility: AccessibilityNote,
    /// Citation for the guideline the report is based on, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Ratio and grade of a color pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessibilitySummary {
    pub ratio: f64,
    pub grade: Grade,
}

pub fn accessibility_summary(a: Color, b: Color) -> AccessibilitySummary {
    let ratio = contrast_ratio(a, b);
    AccessibilitySummary {
        ratio,
        grade: grade(ratio),
    }
}

/// Build the guide without any remote help.
pub fn local_report(ctx: &GuideContext, kb: &KnowledgeBase) -> Result<GuideReport, GuideError> {
    let primary = Color::decode(&ctx.primary_color)?;
    let guide = kb.platform_guide(&ctx.platform)?;

    let text = contrasting_text_color(primary);

    Ok(GuideReport {
        color_system: ColorSystem::from_primary(primary),
        typography: Typography {
            body_size: guide.type_scale.body.clone(),
            headline_size: guide.type_scale.headline_size().map(str::to_string),
            line_height: guide.line_height,
        },
        accessibility: AccessibilityNote {
            text_color_on_primary: text.encode(),
            contrast_ratio: format_ratio(contrast_ratio(primary, text)),
        },
        source: None,
    })
}

/// Request body sent to a remote guide source.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRequest<'a> {
    pub context: &'a GuideContext,
    pub knowledge_base: &'a KnowledgeBase,
}

/// Something that can produce a guide remotely. Transport is the
/// implementor's business; any error triggers the local fallback.
pub trait GuideSource {
    fn fetch(&self, request: &GuideRequest<'_>) -> Result<GuideReport, GuideError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideOutcome {
    pub report: GuideReport,
    pub fallback_used: bool,
}

/// Ask `source` for a guide, falling back to [`local_report`] on any failure.
pub fn generate_guide<S: GuideSource + ?Sized>(
    source: &S,
    ctx: &GuideContext,
    kb: &KnowledgeBase,
) -> Result<GuideOutcome, GuideError> {
    let request = GuideRequest {
        context: ctx,
        knowledge_base: kb,
    };

    match source.fetch(&request) {
        Ok(report) => Ok(GuideOutcome {
            report,
            fallback_used: false,
        }),
        Err(err) => {
            warn!(%err, "guide source failed, generating local report");
            Ok(GuideOutcome {
                report: local_report(ctx, kb)?,
                fallback_used: true,
            })
        }
    }
}
