use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GuideError;

/// Platform used when the requested one has no guideline entry.
pub const DEFAULT_PLATFORM: &str = "web";

/// Static guideline data (`knowledge_base.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    /// Keyed by lowercase platform name.
    #[serde(default)]
    pub guidelines: HashMap<String, PlatformGuide>,
    #[serde(default, rename = "iri_colors")]
    pub iri_colors: HashMap<String, IriGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformGuide {
    pub type_scale: TypeScale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScale {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

impl TypeScale {
    /// Largest heading size the platform defines.
    pub fn headline_size(&self) -> Option<&str> {
        self.large_title.as_deref().or(self.headline.as_deref())
    }
}

/// Keywords and key colors of one image-scale mood group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IriGroup {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_colors: Vec<String>,
}

impl KnowledgeBase {
    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Guideline for `platform` (case-insensitive), else the web default.
    pub fn platform_guide(&self, platform: &str) -> Result<&PlatformGuide, GuideError> {
        let key = platform.to_lowercase();
        if let Some(guide) = self.guidelines.get(&key) {
            return Ok(guide);
        }
        debug!(platform, "no guideline for platform, using {DEFAULT_PLATFORM}");
        self.guidelines
            .get(DEFAULT_PLATFORM)
            .ok_or_else(|| GuideError::MissingGuideline(platform.to_string()))
    }

    pub fn group(&self, group: MoodGroup) -> Result<&IriGroup, GuideError> {
        self.iri_colors
            .get(group.key())
            .ok_or_else(|| GuideError::UnknownGroup(group.key().to_string()))
    }
}

/// Position of the two mood sliders, each 0-100 with 50 as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    /// Soft (0) to hard (100).
    pub soft: u8,
    /// Static (0) to dynamic (100).
    #[serde(rename = "static")]
    pub static_: u8,
}

impl Default for Mood {
    fn default() -> Self {
        Self { soft: 50, static_: 50 }
    }
}

impl Mood {
    /// A slider has moved more than 10 away from neutral.
    pub fn is_decided(&self) -> bool {
        (self.soft as i32 - 50).abs() > 10 || (self.static_ as i32 - 50).abs() > 10
    }

    pub fn group(&self) -> MoodGroup {
        MoodGroup::from_sliders(self.soft, self.static_)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodGroup {
    Group1,
    Group2,
    Group3,
    Group4,
    Group5,
}

impl MoodGroup {
    pub fn from_sliders(soft: u8, static_: u8) -> Self {
        match (soft, static_) {
            (s, t) if s < 40 && t >= 60 => MoodGroup::Group1,
            (s, t) if s < 40 && t < 40 => MoodGroup::Group2,
            (s, t) if s >= 60 && t < 40 => MoodGroup::Group3,
            (s, t) if s >= 60 && t >= 60 => MoodGroup::Group4,
            _ => MoodGroup::Group5,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MoodGroup::Group1 => "group1",
            MoodGroup::Group2 => "group2",
            MoodGroup::Group3 => "group3",
            MoodGroup::Group4 => "group4",
            MoodGroup::Group5 => "group5",
        }
    }
}

/// Everything the user picked, owned by the caller and passed in explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideContext {
    pub service: String,
    pub platform: String,
    pub mood: Mood,
    pub keyword: String,
    pub primary_color: String,
}
