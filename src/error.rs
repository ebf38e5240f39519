//! Error types for conversion and glyph rendering.

use std::path::PathBuf;

/// Errors raised while converting an image into characters.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A caller-supplied argument violates a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The glyph rasterizer failed for a candidate character
    #[error("glyph rendering failed: {0}")]
    Glyph(#[from] GlyphError),
}

/// Errors raised by a glyph rasterizer.
#[derive(Debug, thiserror::Error)]
pub enum GlyphError {
    /// No font is registered under this name
    #[error("font '{0}' is not registered")]
    UnknownFont(String),

    /// Font data could not be parsed
    #[error("failed to parse font '{name}': {reason}")]
    InvalidFont { name: String, reason: String },

    /// Font file could not be read
    #[error("failed to read font file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rasterizer returned a bitmap of the wrong shape
    #[error("glyph '{ch}' bitmap is malformed: expected {expected} pixels, got {actual}")]
    MalformedBitmap {
        ch: char,
        expected: usize,
        actual: usize,
    },
}
