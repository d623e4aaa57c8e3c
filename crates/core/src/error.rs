//! Error types for the cie94 core.

use thiserror::Error;

/// Errors produced while turning hex strings into colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A string failed the hex color predicate (6 digits, optional `#`).
    #[error("not a valid hexcolor: '{0}'")]
    InvalidHexColor(String),

    /// The reference argument of a color pair was rejected.
    #[error("Reference color is not a valid hexcolor: '{0}'.")]
    InvalidReference(String),

    /// The sample argument of a color pair was rejected.
    #[error("Sample color is not a valid hexcolor: '{0}'.")]
    InvalidSample(String),
}

impl ColorError {
    /// Returns the rejected input string.
    pub fn value(&self) -> &str {
        match self {
            ColorError::InvalidHexColor(v)
            | ColorError::InvalidReference(v)
            | ColorError::InvalidSample(v) => v,
        }
    }
}
