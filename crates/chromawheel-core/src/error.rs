//! Error types for color parsing.

use thiserror::Error;

/// Color errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex text with the wrong length or non-hex characters.
    #[error("Invalid hex color {text:?}: expected {expected} hex digits")]
    InvalidHex { text: String, expected: usize },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
