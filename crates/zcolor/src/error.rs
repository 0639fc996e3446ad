//! Error types for the boundary of the conversion API.
//!
//! Conversions themselves never fail: degenerate input produces a defined
//! fallback color. Errors only come from strict parsing of names and
//! payloads supplied by callers.

use thiserror::Error;

/// Color API error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Format key is not one of `color_rgb`, `color_hs`, `color_xy`, `hex`.
    #[error("unknown color format: {0}")]
    UnknownFormat(String),

    /// No color space is registered under this gamut key.
    #[error("unknown gamut: {0}")]
    UnknownGamut(String),

    /// Payload does not have the shape of the requested format.
    #[error("invalid {format} payload: {reason}")]
    InvalidPayload {
        /// Format the payload was parsed as.
        format: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Hex string is not `#rrggbb` or `#rgb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
