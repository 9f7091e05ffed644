//! Error types for cell resolution and settings

use thiserror::Error;

/// Errors raised while resolving cell boundaries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// The cursor line lies outside the document
    #[error("cursor line {cursor_line} is out of bounds for a document with {line_count} lines")]
    CursorOutOfBounds {
        cursor_line: usize,
        line_count: usize,
    },
}

/// Errors raised while loading or interpreting highlight settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },
}

impl SettingsError {
    pub(crate) fn invalid_color(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
