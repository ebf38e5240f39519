//! Padding images out to power-of-two dimensions.

use super::types::{ImageSource, PixelGrid, Rgb};
use crate::error::ConvertError;

/// Color used for the padded border.
pub const PADDING_COLOR: Rgb = Rgb::WHITE;

/// Smallest power of two that is >= `n` (1 for `n <= 1`).
pub fn next_power_of_two(n: u32) -> u32 {
    n.max(1).next_power_of_two()
}

/// Pad `source` so both dimensions are powers of two.
///
/// Each axis is padded independently. The source image is centred,
/// with any odd remainder going to the bottom/right, and the border is
/// filled with [`PADDING_COLOR`].
pub fn pad_to_power_of_two(source: &impl ImageSource) -> Result<PixelGrid, ConvertError> {
    let (width, height) = (source.width(), source.height());
    let new_width = next_power_of_two(width);
    let new_height = next_power_of_two(height);
    let top = (new_height - height) / 2;
    let left = (new_width - width) / 2;

    log::debug!(
        "Padding {}x{} image to {}x{} (offset {},{})",
        width,
        height,
        new_width,
        new_height,
        top,
        left
    );

    PixelGrid::from_fn(new_width, new_height, |row, col| {
        let inside = row >= top && row < top + height && col >= left && col < left + width;
        if inside {
            source.pixel(row - top, col - left)
        } else {
            PADDING_COLOR
        }
    })
}
