//! Tests for the bundled fontdue rasterizer against a real font.
//!
//! The fixture is DejaVu Sans Mono (see `fixtures/DejaVu-LICENSE`).

use glyph_match::ascii::{
    FontdueRasterizer, GlyphBitmap, GlyphRasterizer, GlyphStyle, Matcher, Preset,
};
use glyph_match::image::{PixelGrid, Rgb};

const FONT: &str = "DejaVu Sans Mono";
const FONT_DATA: &[u8] = include_bytes!("fixtures/DejaVuSansMono.ttf");

fn rasterizer() -> FontdueRasterizer {
    let mut rasterizer = FontdueRasterizer::new();
    rasterizer.add_font_bytes(FONT, FONT_DATA).unwrap();
    rasterizer
}

/// Inked (row, col) bounds, or `None` for a blank cell.
fn ink_bounds(bitmap: &GlyphBitmap) -> Option<(u32, u32, u32, u32)> {
    let size = bitmap.size();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for row in 0..size {
        for col in 0..size {
            if !bitmap.get(row, col) {
                continue;
            }
            bounds = Some(match bounds {
                None => (row, row, col, col),
                Some((top, bottom, left, right)) => {
                    (top.min(row), bottom.max(row), left.min(col), right.max(col))
                }
            });
        }
    }
    bounds
}

// ==================== Bitmap shape ====================

#[test]
fn test_bitmap_edge_matches_resolution() {
    let rasterizer = rasterizer();
    for resolution in [4, 8, 16, 32] {
        for ch in [' ', '.', '@', 'W'] {
            let bitmap = rasterizer.render(ch, resolution, FONT).unwrap();
            assert_eq!(bitmap.size(), resolution, "{:?} @ {}px", ch, resolution);
            assert_eq!(bitmap.pixel_count(), (resolution * resolution) as usize);
        }
    }
}

#[test]
fn test_tiny_resolutions_render() {
    let rasterizer = rasterizer();
    for resolution in [1, 2] {
        for ch in [' ', '.', '@', '█'] {
            let bitmap = rasterizer.render(ch, resolution, FONT).unwrap();
            assert_eq!(bitmap.size(), resolution);
            assert!(bitmap.ink_density() <= 1.0);
        }
    }
}

// ==================== Ink density ====================

#[test]
fn test_space_has_no_ink() {
    let bitmap = rasterizer().render(' ', 16, FONT).unwrap();
    assert_eq!(bitmap.ink_count(), 0);
    assert_eq!(bitmap.ink_density(), 0.0);
}

#[test]
fn test_at_sign_denser_than_period() {
    let rasterizer = rasterizer();
    let period = rasterizer.render('.', 16, FONT).unwrap();
    let at = rasterizer.render('@', 16, FONT).unwrap();
    assert!(period.ink_count() > 0);
    assert!(at.ink_density() > period.ink_density());
}

#[test]
fn test_render_is_deterministic() {
    let rasterizer = rasterizer();
    assert_eq!(
        rasterizer.render('g', 16, FONT).unwrap(),
        rasterizer.render('g', 16, FONT).unwrap()
    );
}

// ==================== Placement ====================

#[test]
fn test_glyph_centred_horizontally() {
    let bitmap = rasterizer().render('@', 16, FONT).unwrap();
    let (_, _, left, right) = ink_bounds(&bitmap).unwrap();
    let centre = (left + right) as f64 / 2.0;
    assert!((centre - 7.5).abs() <= 2.0, "ink spans columns {}..={}", left, right);
}

#[test]
fn test_tall_glyph_clipped_to_cell() {
    // The full block spans ascender to descender, about one em; it must
    // stay inside the cell and cover most of its height
    let bitmap = rasterizer().render('█', 16, FONT).unwrap();
    assert_eq!(bitmap.size(), 16);
    let (top, bottom, _, _) = ink_bounds(&bitmap).unwrap();
    assert!(bottom < 16);
    assert!(bottom - top >= 12, "ink spans rows {}..={}", top, bottom);
}

// ==================== Matching ====================

#[test]
fn test_gradient_maps_to_increasing_ink() {
    let size = 64;
    let grid = PixelGrid::from_fn(size, size, |_, col| {
        let v = ((col as f32 / (size - 1) as f32) * 255.0).round() as u8;
        Rgb::new(v, v, v)
    })
    .unwrap();

    let charset = Preset::Standard.charset();
    let mut matcher = Matcher::new(rasterizer(), GlyphStyle::new(FONT, 16));
    let out = matcher.convert(&grid, 16, &charset).unwrap();

    assert_eq!(out.get(0, 0), Some(' '));
    for row in out.rows() {
        let densities: Vec<f64> = row
            .iter()
            .map(|&ch| matcher.table().density(ch).unwrap())
            .collect();
        assert!(
            densities.windows(2).all(|w| w[0] <= w[1]),
            "row {:?} is not monotonic",
            row
        );
    }
}
