//! Normalized ink density per character.

use std::collections::{BTreeMap, HashMap};

use super::charset::CharacterSet;
use super::glyph::{GlyphRasterizer, GlyphStyle};
use crate::error::{ConvertError, GlyphError};

/// Cache key for a raw density measurement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GlyphKey {
    ch: char,
    style: GlyphStyle,
}

/// Maps characters to ink density, stretched onto [0, 1].
///
/// Raw densities (ink pixels / cell area) are measured once per
/// `(char, resolution, font)` and kept for the life of the table. Every
/// call to [`ensure`](Self::ensure) re-stretches the raw values of the
/// requested set so its least inked member maps to 0.0 and its most inked
/// to 1.0. Stretched values are therefore relative to the most recent set.
#[derive(Debug)]
pub struct GlyphBrightnessTable<R> {
    rasterizer: R,
    style: GlyphStyle,
    raw: HashMap<GlyphKey, f64>,
    stretched: BTreeMap<char, f64>,
}

impl<R: GlyphRasterizer> GlyphBrightnessTable<R> {
    pub fn new(rasterizer: R, style: GlyphStyle) -> Self {
        Self {
            rasterizer,
            style,
            raw: HashMap::new(),
            stretched: BTreeMap::new(),
        }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    /// Switch font or resolution.
    ///
    /// Raw densities for other styles stay cached; the stretched set is
    /// cleared until the next `ensure`.
    pub fn set_style(&mut self, style: GlyphStyle) {
        if style != self.style {
            log::debug!(
                "Glyph style changed to '{}' @ {}px",
                style.font,
                style.resolution
            );
            self.style = style;
            self.stretched.clear();
        }
    }

    /// Number of raw measurements cached across all styles.
    pub fn cached_len(&self) -> usize {
        self.raw.len()
    }

    /// Stretched density of `ch` from the most recent `ensure`.
    pub fn density(&self, ch: char) -> Option<f64> {
        self.stretched.get(&ch).copied()
    }

    /// Raw (unstretched) density of `ch` under the current style, if measured.
    pub fn raw_density(&self, ch: char) -> Option<f64> {
        self.raw
            .get(&GlyphKey {
                ch,
                style: self.style.clone(),
            })
            .copied()
    }

    /// Active characters and their stretched densities, ascending by code point.
    pub fn densities(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.stretched.iter().map(|(&ch, &d)| (ch, d))
    }

    /// Measure any unseen members of `charset`, then re-stretch the set.
    ///
    /// If every member has the same raw density the stretch is degenerate
    /// and all members map to 0.0.
    pub fn ensure(&mut self, charset: &CharacterSet) -> Result<(), ConvertError> {
        let mut raws = Vec::with_capacity(charset.len());
        for ch in charset {
            raws.push((ch, self.measure(ch)?));
        }

        let min = raws.iter().map(|&(_, r)| r).fold(f64::INFINITY, f64::min);
        let max = raws.iter().map(|&(_, r)| r).fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if !raws.is_empty() && range <= 0.0 {
            log::warn!(
                "All {} candidate characters have raw density {:.4}; mapping every one to 0.0",
                raws.len(),
                min
            );
        }

        self.stretched = raws
            .into_iter()
            .map(|(ch, raw)| {
                let value = if range > 0.0 { (raw - min) / range } else { 0.0 };
                (ch, value)
            })
            .collect();

        Ok(())
    }

    /// Raw density of `ch`, rasterizing on a cache miss.
    fn measure(&mut self, ch: char) -> Result<f64, GlyphError> {
        let key = GlyphKey {
            ch,
            style: self.style.clone(),
        };
        if let Some(&raw) = self.raw.get(&key) {
            return Ok(raw);
        }

        let resolution = self.style.resolution;
        let bitmap = self.rasterizer.render(ch, resolution, &self.style.font)?;
        let expected = resolution as usize * resolution as usize;
        if bitmap.size() != resolution {
            return Err(GlyphError::MalformedBitmap {
                ch,
                expected,
                actual: bitmap.pixel_count(),
            });
        }

        let raw = bitmap.ink_density();
        log::debug!(
            "Rasterized {:?} in '{}' @ {}px: {} ink pixels, density {:.4}",
            ch,
            self.style.font,
            resolution,
            bitmap.ink_count(),
            raw
        );
        self.raw.insert(key, raw);
        Ok(raw)
    }
}
