use thiserror::Error;

/// Failure to read a color from its textual form.
///
/// This is the only error the color core produces. Numeric inputs such as
/// out-of-range percentages are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

pub type ColorResult<T> = Result<T, ColorError>;

/// Errors raised while assembling a design guide report.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("knowledge base is not valid JSON: {0}")]
    KnowledgeBase(#[from] serde_json::Error),

    /// Neither the requested platform nor the `web` default has a guideline.
    #[error("no guideline for platform {0:?} and no web default")]
    MissingGuideline(String),

    #[error("unknown color group {0:?}")]
    UnknownGroup(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    /// Opaque failure reported by a remote guide source.
    #[error("remote guide source failed: {0}")]
    Remote(String),
}
