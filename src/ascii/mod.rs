//! Brightness-matched character rendering.
//!
//! The pipeline turns a [`PixelGrid`](crate::image::PixelGrid) into an
//! [`AsciiGrid`]:
//!
//! 1. **Tiling** - split the grid into equally sized tiles
//! 2. **Luminance** - score each tile with BT.709 luma in [0, 1]
//! 3. **Glyph density** - rasterize candidates and stretch ink density onto [0, 1]
//! 4. **Matching** - pick the candidate closest to each tile's brightness
//!
//! # Character Sets
//!
//! Candidates are a [`CharacterSet`]; named starting points are available
//! via [`Preset`]:
//! - `Digits` - '0' through '9' (default)
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look
//! - `Printable` - every printable ASCII character

mod brightness;
mod charset;
mod glyph;
pub mod luminance;
mod matcher;
mod resolution;
pub mod tiler;

pub use brightness::GlyphBrightnessTable;
pub use charset::{
    CharacterSet, Preset, BLOCKS_CHARSET, DIGITS_CHARSET, MINIMAL_CHARSET, PRINTABLE_FIRST,
    PRINTABLE_LAST, STANDARD_CHARSET,
};
pub use glyph::{
    FontdueRasterizer, GlyphBitmap, GlyphRasterizer, GlyphStyle, COVERAGE_THRESHOLD,
    DEFAULT_FONT, DEFAULT_GLYPH_RESOLUTION,
};
pub use matcher::{closest_char, AsciiGrid, Matcher};
pub use resolution::{Resolution, INITIAL_CHARS_IN_ROW, MIN_PIXELS_PER_CHAR};
pub use tiler::{partition, partition_with, Tile, TileLayout};
