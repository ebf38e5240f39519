//! Pixel data types.

use crate::error::ConvertError;

/// An 8-bit RGB sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Read access to a rectangular block of pixels.
///
/// Rows and columns are zero-based; `pixel` may panic for coordinates
/// outside `height() x width()`.
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, row: u32, col: u32) -> Rgb;
}

/// An immutable, row-major grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    ///
    /// Fails if either dimension is zero or the buffer length does not
    /// equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "grid dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ConvertError::InvalidArgument(format!(
                "expected {} pixels for a {}x{} grid, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, ConvertError> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel).
    pub fn from_rgb_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self, ConvertError> {
        if data.len() % 3 != 0 {
            return Err(ConvertError::InvalidArgument(format!(
                "RGB buffer length {} is not a multiple of 3",
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|rgb| Rgb::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Build a grid by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgb,
    ) -> Result<Self, ConvertError> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl ImageSource for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, row: u32, col: u32) -> Rgb {
        self.pixels[row as usize * self.width as usize + col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = PixelGrid::new(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(PixelGrid::new(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn test_pixel_lookup_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |row, col| Rgb::new(row as u8, col as u8, 0)).unwrap();
        assert_eq!(grid.pixel(1, 2), Rgb::new(1, 2, 0));
        assert_eq!(grid.pixels()[5], Rgb::new(1, 2, 0));
    }

    #[test]
    fn test_from_rgb_bytes() {
        let grid = PixelGrid::from_rgb_bytes(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
        assert_eq!(grid.pixel(0, 0), Rgb::new(255, 0, 0));
        assert_eq!(grid.pixel(0, 1), Rgb::new(0, 0, 255));
        assert!(PixelGrid::from_rgb_bytes(2, 1, &[1, 2, 3, 4]).is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_pixel_index_computed_in_usize() {
        // 70_000 * 70_000 does not fit in u32; the lookup must fail on the
        // buffer bound, not on index arithmetic
        let grid = PixelGrid {
            width: 70_000,
            height: 70_000,
            pixels: vec![Rgb::BLACK],
        };
        grid.pixel(69_999, 69_999);
    }
}
