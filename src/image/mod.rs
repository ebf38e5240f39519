//! In-memory images consumed by the matcher.
//!
//! Decoding files into pixels is left to the caller; this module only
//! holds the pixel grid and the power-of-two padding the tiler expects.

mod padding;
mod types;

pub use padding::{next_power_of_two, pad_to_power_of_two, PADDING_COLOR};
pub use types::{ImageSource, PixelGrid, Rgb};
