//! Error type for color and size parsing.
//!
//! None of these reach the user: the public fallbacks in [`crate::color`] and
//! [`crate::layout`] turn them into silent defaults.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwatchError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Malformed rgb color: {0}")]
    MalformedRgb(String),
    #[error("Expected 3 rgb components, found {0}")]
    ComponentCount(usize),
    #[error("Invalid rgb component: {0}")]
    InvalidComponent(String),
    #[error("Invalid swatch size: {0}")]
    InvalidSize(String),
}

/// Result type for parsing operations.
pub type SwatchResult<T> = Result<T, SwatchError>;
