//! Output width control in characters per row.

/// Minimum tile edge in pixels; keeps at least 2 pixels behind each character.
pub const MIN_PIXELS_PER_CHAR: u32 = 2;

/// Starting characters per row before clamping to the image bounds.
pub const INITIAL_CHARS_IN_ROW: u32 = 64;

/// Characters-per-row setting bounded by the image it will be applied to.
///
/// The width can be doubled or halved, which keeps it a power of two for
/// power-of-two images and so always divides the image width evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    chars_in_row: u32,
    min: u32,
    max: u32,
}

impl Resolution {
    /// Bounds for an image of `img_width x img_height` pixels.
    ///
    /// - min = max(1, width / height)
    /// - max = width / [`MIN_PIXELS_PER_CHAR`]
    /// - initial = [`INITIAL_CHARS_IN_ROW`] clamped to max, then raised to min
    pub fn for_image(img_width: u32, img_height: u32) -> Self {
        let min = (img_width / img_height.max(1)).max(1);
        let max = img_width / MIN_PIXELS_PER_CHAR;
        let chars_in_row = INITIAL_CHARS_IN_ROW.min(max).max(min);
        Self {
            chars_in_row,
            min,
            max,
        }
    }

    /// Start from `requested` instead of the default, clamped the same way.
    pub fn with_chars_in_row(mut self, requested: u32) -> Self {
        self.chars_in_row = requested.min(self.max).max(self.min);
        self
    }

    pub fn chars_in_row(&self) -> u32 {
        self.chars_in_row
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Double the width if it stays within the maximum.
    ///
    /// Returns the new width, or `None` if the bound would be exceeded.
    pub fn increase(&mut self) -> Option<u32> {
        let next = self.chars_in_row.checked_mul(2)?;
        if next <= self.max {
            self.chars_in_row = next;
            log::info!("Width set to {}", next);
            Some(next)
        } else {
            log::debug!("Width {} already at maximum {}", self.chars_in_row, self.max);
            None
        }
    }

    /// Halve the width if it stays within the minimum.
    ///
    /// Returns the new width, or `None` if the bound would be exceeded.
    pub fn decrease(&mut self) -> Option<u32> {
        let next = self.chars_in_row / 2;
        if next >= self.min {
            self.chars_in_row = next;
            log::info!("Width set to {}", next);
            Some(next)
        } else {
            log::debug!("Width {} already at minimum {}", self.chars_in_row, self.min);
            None
        }
    }
}
