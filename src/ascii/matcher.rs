//! Tile-to-character matching.

use std::fmt;

use super::brightness::GlyphBrightnessTable;
use super::charset::CharacterSet;
use super::glyph::{GlyphRasterizer, GlyphStyle};
use super::luminance;
use super::tiler::{self, TileLayout};
use crate::error::ConvertError;
use crate::image::{ImageSource, PixelGrid};

/// A row-major grid of characters, one per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl AsciiGrid {
    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, row: u32, col: u32) -> Option<char> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Pick the character whose density is closest to `brightness`.
///
/// `densities` must be in ascending code point order; on equal distance
/// the earlier (smaller code point) character wins.
pub fn closest_char(densities: impl IntoIterator<Item = (char, f64)>, brightness: f64) -> Option<char> {
    let mut best: Option<(char, f64)> = None;
    for (ch, density) in densities {
        let diff = (density - brightness).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((ch, diff)),
        }
    }
    best.map(|(ch, _)| ch)
}

/// Converts pixel grids into character grids by brightness.
///
/// Owns the glyph brightness table, so repeated conversions with the same
/// style reuse rasterized glyphs.
#[derive(Debug)]
pub struct Matcher<R> {
    table: GlyphBrightnessTable<R>,
}

impl<R: GlyphRasterizer> Matcher<R> {
    pub fn new(rasterizer: R, style: GlyphStyle) -> Self {
        Self {
            table: GlyphBrightnessTable::new(rasterizer, style),
        }
    }

    /// Build around an existing table.
    pub fn with_table(table: GlyphBrightnessTable<R>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &GlyphBrightnessTable<R> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut GlyphBrightnessTable<R> {
        &mut self.table
    }

    /// Convert `grid` with square tiles, `tiles_per_row` across.
    ///
    /// A square grid yields a `tiles_per_row x tiles_per_row` result. Each
    /// cell holds the member of `charset` whose stretched ink density is
    /// closest to the tile's brightness; more ink reads as brighter.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty charset, zero tiles or a geometry the
    /// tiler cannot split evenly; `Glyph` if rasterization fails.
    pub fn convert(
        &mut self,
        grid: &PixelGrid,
        tiles_per_row: u32,
        charset: &CharacterSet,
    ) -> Result<AsciiGrid, ConvertError> {
        require_candidates(charset)?;
        let layout = TileLayout::square(grid, tiles_per_row)?;
        self.convert_with_layout(grid, &layout, charset)
    }

    /// Convert `grid` using an explicit tile layout.
    pub fn convert_with_layout(
        &mut self,
        grid: &PixelGrid,
        layout: &TileLayout,
        charset: &CharacterSet,
    ) -> Result<AsciiGrid, ConvertError> {
        require_candidates(charset)?;

        log::debug!(
            "Converting {}x{} grid into {}x{} cells from {} candidates",
            grid.width(),
            grid.height(),
            layout.columns,
            layout.rows,
            charset.len()
        );

        self.table.ensure(charset)?;
        let densities: Vec<(char, f64)> = self.table.densities().collect();

        let cells = tiler::partition_with(grid, layout)
            .iter()
            .map(|tile| {
                let brightness = luminance::score(tile);
                closest_char(densities.iter().copied(), brightness).ok_or_else(no_candidates)
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Converted into {}x{} characters", layout.columns, layout.rows);

        Ok(AsciiGrid {
            width: layout.columns,
            height: layout.rows,
            cells,
        })
    }
}

fn no_candidates() -> ConvertError {
    ConvertError::InvalidArgument("character set must not be empty".to_string())
}

fn require_candidates(charset: &CharacterSet) -> Result<(), ConvertError> {
    if charset.is_empty() {
        Err(no_candidates())
    } else {
        Ok(())
    }
}
