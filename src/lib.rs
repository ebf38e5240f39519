//! glyph-match library crate.
//!
//! Renders pixel grids as text by matching each tile's brightness to the
//! ink density of candidate glyphs.
//!
//! ```ignore
//! use glyph_match::ascii::{FontdueRasterizer, GlyphStyle, Matcher, Preset};
//! use glyph_match::image::PixelGrid;
//!
//! let mut fonts = FontdueRasterizer::new();
//! fonts.add_font_bytes("mono", &font_bytes)?;
//! let mut matcher = Matcher::new(fonts, GlyphStyle::new("mono", 16));
//! let text = matcher.convert(&grid, 64, &Preset::Standard.charset())?;
//! println!("{}", text);
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod image;

pub use error::{ConvertError, GlyphError};
