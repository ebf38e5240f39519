//! Tile brightness using ITU-R BT.709 luma weights.

use crate::image::{ImageSource, Rgb};

/// Red weight for BT.709 luma.
pub const LUMA_RED: f64 = 0.2126;
/// Green weight for BT.709 luma.
pub const LUMA_GREEN: f64 = 0.7152;
/// Blue weight for BT.709 luma.
pub const LUMA_BLUE: f64 = 0.0722;

const CHANNEL_MAX: f64 = 255.0;

/// Luma of a single pixel in the 0-255 range.
///
/// Y = 0.2126*R + 0.7152*G + 0.0722*B
#[inline]
pub fn luma(pixel: Rgb) -> f64 {
    LUMA_RED * pixel.r as f64 + LUMA_GREEN * pixel.g as f64 + LUMA_BLUE * pixel.b as f64
}

/// Average brightness of an image in [0, 1].
///
/// Computes the mean luma over every pixel and divides by 255.
/// An image with no pixels scores 0.0.
pub fn score(tile: &impl ImageSource) -> f64 {
    let (width, height) = (tile.width(), tile.height());
    let count = width as u64 * height as u64;
    if count == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for row in 0..height {
        for col in 0..width {
            sum += luma(tile.pixel(row, col));
        }
    }

    // Clamp guards against rounding pushing white marginally above 1.0
    (sum / count as f64 / CHANNEL_MAX).clamp(0.0, 1.0)
}
