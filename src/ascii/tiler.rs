//! Splitting a pixel grid into equally sized tiles.

use crate::error::ConvertError;
use crate::image::{ImageSource, PixelGrid, Rgb};

/// Geometry of a tile partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    /// Tiles per row (output columns)
    pub columns: u32,
    /// Tile rows (output rows)
    pub rows: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
}

impl TileLayout {
    /// Square tiles whose edge is `width / tiles_per_row`.
    ///
    /// The number of rows is derived from the grid height, so non-square
    /// grids are covered exactly. Both `width` and `height` must divide
    /// evenly by the tile edge.
    pub fn square(grid: &impl ImageSource, tiles_per_row: u32) -> Result<Self, ConvertError> {
        if tiles_per_row == 0 {
            return Err(ConvertError::InvalidArgument(
                "tiles per row must be at least 1".to_string(),
            ));
        }
        let (width, height) = (grid.width(), grid.height());
        let edge = width / tiles_per_row;
        if edge == 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "{} tiles per row exceeds grid width {}",
                tiles_per_row, width
            )));
        }
        if width % tiles_per_row != 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "{} tiles per row does not divide grid width {}",
                tiles_per_row, width
            )));
        }
        if height % edge != 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "tile edge {} does not divide grid height {}",
                edge, height
            )));
        }

        Ok(Self {
            columns: tiles_per_row,
            rows: height / edge,
            tile_width: edge,
            tile_height: edge,
        })
    }

    /// Explicit column and row counts; tiles may be rectangular.
    pub fn new(grid: &impl ImageSource, columns: u32, rows: u32) -> Result<Self, ConvertError> {
        if columns == 0 || rows == 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "tile counts must be at least 1, got {}x{}",
                columns, rows
            )));
        }
        let (width, height) = (grid.width(), grid.height());
        if columns > width || width % columns != 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "{} columns do not evenly divide grid width {}",
                columns, width
            )));
        }
        if rows > height || height % rows != 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "{} rows do not evenly divide grid height {}",
                rows, height
            )));
        }

        Ok(Self {
            columns,
            rows,
            tile_width: width / columns,
            tile_height: height / rows,
        })
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// A borrowed rectangular region of a [`PixelGrid`].
#[derive(Debug, Clone, Copy)]
pub struct Tile<'a> {
    grid: &'a PixelGrid,
    top: u32,
    left: u32,
    width: u32,
    height: u32,
}

impl Tile<'_> {
    /// Pixel offset of the tile's top-left corner as (row, col).
    pub fn origin(&self) -> (u32, u32) {
        (self.top, self.left)
    }
}

impl ImageSource for Tile<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, row: u32, col: u32) -> Rgb {
        debug_assert!(row < self.height && col < self.width);
        self.grid.pixel(self.top + row, self.left + col)
    }
}

/// Split `grid` into tiles following `layout`, in row-major order.
pub fn partition_with<'a>(grid: &'a PixelGrid, layout: &TileLayout) -> Vec<Tile<'a>> {
    let mut tiles = Vec::with_capacity(layout.tile_count());
    for ty in 0..layout.rows {
        for tx in 0..layout.columns {
            tiles.push(Tile {
                grid,
                top: ty * layout.tile_height,
                left: tx * layout.tile_width,
                width: layout.tile_width,
                height: layout.tile_height,
            });
        }
    }
    tiles
}

/// Split `grid` into square tiles, `tiles_per_row` across, in row-major order.
///
/// # Example
/// ```ignore
/// // A 16x16 grid with 4 tiles per row yields 16 tiles of 4x4
/// let tiles = partition(&grid, 4)?;
/// assert_eq!(tiles.len(), 16);
/// ```
pub fn partition(grid: &PixelGrid, tiles_per_row: u32) -> Result<Vec<Tile<'_>>, ConvertError> {
    let layout = TileLayout::square(grid, tiles_per_row)?;
    Ok(partition_with(grid, &layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |r, c| Rgb::new(r as u8, c as u8, 0)).unwrap()
    }

    #[test]
    fn test_zero_tiles_rejected() {
        assert!(matches!(
            partition(&grid(4, 4), 0),
            Err(ConvertError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_too_many_tiles_rejected() {
        assert!(partition(&grid(4, 4), 8).is_err());
    }

    #[test]
    fn test_non_divisible_rejected() {
        assert!(partition(&grid(6, 6), 4).is_err());
        // edge 2 does not divide height 5
        assert!(partition(&grid(4, 5), 2).is_err());
    }

    #[test]
    fn test_non_square_grid_rows_from_height() {
        let g = grid(8, 4);
        let layout = TileLayout::square(&g, 4).unwrap();
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.tile_width, 2);
        assert_eq!(partition(&g, 4).unwrap().len(), 8);
    }

    #[test]
    fn test_row_major_order() {
        let g = grid(4, 4);
        let tiles = partition(&g, 2).unwrap();
        let origins: Vec<_> = tiles.iter().map(|t| t.origin()).collect();
        assert_eq!(origins, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert_eq!(tiles[3].pixel(1, 0), Rgb::new(3, 2, 0));
    }

    #[test]
    fn test_explicit_layout_rectangular_tiles() {
        let g = grid(8, 4);
        let layout = TileLayout::new(&g, 2, 4).unwrap();
        assert_eq!((layout.tile_width, layout.tile_height), (4, 1));
        assert!(TileLayout::new(&g, 3, 4).is_err());
        assert!(TileLayout::new(&g, 2, 0).is_err());
    }
}
