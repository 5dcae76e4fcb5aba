//! Error type for color parsing.

use thiserror::Error;

/// Color error.
///
/// Numeric operations never fail: out-of-range inputs are clamped or
/// wrapped.  Only textual input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#`
    /// being optional).
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
