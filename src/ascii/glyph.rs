//! Glyph rasterization.
//!
//! The matcher only needs to know how much "ink" each candidate character
//! puts on a square cell. [`GlyphRasterizer`] is the seam for that: any
//! backend that can turn `(char, resolution, font)` into a square on/off
//! bitmap can drive a [`GlyphBrightnessTable`](super::GlyphBrightnessTable).
//! [`FontdueRasterizer`] is the bundled backend for TTF/OTF fonts.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::GlyphError;

/// Default glyph cell edge in pixels.
pub const DEFAULT_GLYPH_RESOLUTION: u32 = 16;

/// Default font name.
pub const DEFAULT_FONT: &str = "Courier New";

/// Coverage at or above this value counts as ink.
pub const COVERAGE_THRESHOLD: u8 = 128;

/// Font and cell size used to rasterize glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphStyle {
    pub font: String,
    pub resolution: u32,
}

impl GlyphStyle {
    pub fn new(font: impl Into<String>, resolution: u32) -> Self {
        Self {
            font: font.into(),
            resolution,
        }
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::new(DEFAULT_FONT, DEFAULT_GLYPH_RESOLUTION)
    }
}

/// A square on/off bitmap of a rendered glyph. `true` is ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    size: u32,
    bits: Vec<bool>,
}

impl GlyphBitmap {
    /// Wrap row-major bits for a `size x size` cell.
    ///
    /// Returns `None` if `bits.len() != size * size`.
    pub fn new(size: u32, bits: Vec<bool>) -> Option<Self> {
        (bits.len() == size as usize * size as usize).then_some(Self { size, bits })
    }

    /// A cell with no ink.
    pub fn blank(size: u32) -> Self {
        Self {
            size,
            bits: vec![false; size as usize * size as usize],
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total pixel count (size squared).
    pub fn pixel_count(&self) -> usize {
        self.bits.len()
    }

    /// Whether the pixel at `(row, col)` is ink.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> bool {
        self.bits[row as usize * self.size as usize + col as usize]
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.bits.iter().filter(|&&on| on).count()
    }

    /// Fraction of the cell area covered by ink, in [0, 1].
    ///
    /// Divides by the full pixel count (size squared), not the edge length.
    pub fn ink_density(&self) -> f64 {
        if self.bits.is_empty() {
            return 0.0;
        }
        self.ink_count() as f64 / self.pixel_count() as f64
    }
}

/// Renders characters into square ink bitmaps.
///
/// Implementations must be deterministic for a given
/// `(ch, resolution, font)` triple and return a bitmap whose edge is
/// exactly `resolution`.
pub trait GlyphRasterizer {
    fn render(&self, ch: char, resolution: u32, font: &str) -> Result<GlyphBitmap, GlyphError>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for &R {
    fn render(&self, ch: char, resolution: u32, font: &str) -> Result<GlyphBitmap, GlyphError> {
        (**self).render(ch, resolution, font)
    }
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for Box<R> {
    fn render(&self, ch: char, resolution: u32, font: &str) -> Result<GlyphBitmap, GlyphError> {
        (**self).render(ch, resolution, font)
    }
}

/// Rasterizer backed by `fontdue`, with fonts registered by name.
#[derive(Default)]
pub struct FontdueRasterizer {
    fonts: HashMap<String, Font>,
}

impl FontdueRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register TTF/OTF font data under `name`, replacing any previous font.
    pub fn add_font_bytes(&mut self, name: impl Into<String>, data: &[u8]) -> Result<(), GlyphError> {
        let name = name.into();
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|e| {
            GlyphError::InvalidFont {
                name: name.clone(),
                reason: e.to_string(),
            }
        })?;
        log::debug!("Registered font '{}'", name);
        self.fonts.insert(name, font);
        Ok(())
    }

    /// Read a font file and register it under `name`.
    pub fn add_font_file(&mut self, name: impl Into<String>, path: &Path) -> Result<(), GlyphError> {
        let data = std::fs::read(path).map_err(|e| GlyphError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.add_font_bytes(name, &data)
    }

    pub fn has_font(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }
}

impl std::fmt::Debug for FontdueRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.fonts.keys().collect();
        names.sort();
        f.debug_struct("FontdueRasterizer")
            .field("fonts", &names)
            .finish()
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn render(&self, ch: char, resolution: u32, font: &str) -> Result<GlyphBitmap, GlyphError> {
        let face = self
            .fonts
            .get(font)
            .ok_or_else(|| GlyphError::UnknownFont(font.to_string()))?;

        let (metrics, coverage) = face.rasterize(ch, resolution as f32);
        let mut cell = GlyphBitmap::blank(resolution);
        let size = resolution as usize;

        // Centre the glyph in the cell; anything outside is clipped
        let offset_x = (size as i64 - metrics.width as i64) / 2;
        let offset_y = (size as i64 - metrics.height as i64) / 2;

        for y in 0..metrics.height {
            for x in 0..metrics.width {
                if coverage[y * metrics.width + x] < COVERAGE_THRESHOLD {
                    continue;
                }
                let px = x as i64 + offset_x;
                let py = y as i64 + offset_y;
                if px >= 0 && py >= 0 && (px as usize) < size && (py as usize) < size {
                    cell.bits[py as usize * size + px as usize] = true;
                }
            }
        }

        Ok(cell)
    }
}
