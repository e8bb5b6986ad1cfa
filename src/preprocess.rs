//! Color normalization, blur and resampling to the glyph grid size.

use crate::config::Config;
use crate::{AsciifyError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Output grid size for a `src_w × src_h` source.
///
/// Width is `min(target_width, max(min_width, src_w))`; height keeps the
/// source aspect ratio, scaled by `vertical_scale`, and is at least 1.
pub fn target_dimensions(src_w: u32, src_h: u32, config: &Config) -> (u32, u32) {
    let width = config.target_width.min(config.min_width.max(src_w));
    let aspect = src_h as f64 / src_w as f64;
    let height = (aspect * width as f64 * config.vertical_scale).floor();
    let height = if height >= 1.0 { height.min(u32::MAX as f64) as u32 } else { 1 };
    (width, height)
}

/// Convert to RGB, blur at full resolution, then resample with Lanczos3.
pub fn prepare(image: &DynamicImage, config: &Config) -> Result<RgbImage> {
    let (src_w, src_h) = (image.width(), image.height());
    if src_w == 0 || src_h == 0 {
        return Err(AsciifyError::EmptyImage { width: src_w, height: src_h });
    }

    // Alpha and extra channels are dropped, not composited
    let mut rgb = image.to_rgb8();
    if config.blur_radius > 0.0 {
        rgb = imageops::blur(&rgb, config.blur_radius);
    }

    let (width, height) = target_dimensions(src_w, src_h, config);
    log::debug!("resampling {src_w}x{src_h} -> {width}x{height}");

    Ok(imageops::resize(&rgb, width, height, FilterType::Lanczos3))
}
