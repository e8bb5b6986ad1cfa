//! Luminance to glyph mapping.

use crate::config::{Config, Palette};
use crate::document::Row;
use image::{Rgb, RgbImage};
use rayon::prelude::*;

/// One output character together with the color of the pixel it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub ch: char,
    pub color: [u8; 3],
}

/// BT.601 perceptual luminance in `[0, 255]`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Gamma-adjusted palette index for a luminance value.
///
/// Monotonic in `lum`; 0 maps to index 0 and 255 to `len - 1`.
#[inline]
pub fn palette_index(lum: f64, gamma: f64, len: usize) -> usize {
    let v = (lum / 255.0).clamp(0.0, 1.0).powf(1.0 / gamma);
    let idx = (v * (len - 1) as f64).floor() as usize;
    idx.min(len - 1)
}

pub fn map_pixel(pixel: Rgb<u8>, palette: &Palette, gamma: f64) -> GlyphCell {
    let [r, g, b] = pixel.0;
    let idx = palette_index(luminance(r, g, b), gamma, palette.len());
    GlyphCell { ch: palette.get(idx), color: [r, g, b] }
}

/// Map every pixel to a glyph, row-major. Rows are mapped in parallel and
/// collected in scan order.
pub fn map_image(image: &RgbImage, config: &Config) -> Vec<Row> {
    let (width, height) = image.dimensions();
    (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| map_pixel(*image.get_pixel(x, y), &config.palette, config.gamma))
                .collect()
        })
        .collect()
}
