//! Fixed conversion parameters.

use crate::{AsciifyError, Result};

/// Default glyph ramp, densest first. The trailing space is the lightest glyph.
pub const DEFAULT_PALETTE: &str = concat!(
    "@$#B8&WM#*oahkbdpqwmZ0QLCJUYX",
    "zcvunxrjft/\\|()1{}[]?-_+~<>i!",
    "lI;:,\"^`'. ",
);

pub const TARGET_WIDTH: u32 = 120;
pub const MIN_WIDTH: u32 = 20;
pub const BLUR_RADIUS: f32 = 0.8;
pub const GAMMA: f64 = 1.08;
pub const LINE_HEIGHT: f32 = 0.95;
// Monospace cells are roughly twice as tall as wide
pub const VERTICAL_SCALE: f64 = 0.43;

/// Ordered glyph ramp from darkest to lightest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    pub fn new(glyphs: &str) -> Result<Self> {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.is_empty() {
            return Err(AsciifyError::Config("palette must contain at least one glyph".into()));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyph at `index`, saturating at the lightest glyph.
    pub fn get(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { chars: DEFAULT_PALETTE.chars().collect() }
    }
}

/// Immutable parameters handed to every pipeline stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub palette: Palette,
    /// Requested output width in columns
    pub target_width: u32,
    /// Narrowest output allowed, unless `target_width` is smaller
    pub min_width: u32,
    /// Gaussian blur sigma applied before resampling, 0 disables
    pub blur_radius: f32,
    pub gamma: f64,
    /// CSS line-height of the `<pre>` block
    pub line_height: f32,
    /// Row compression factor compensating for tall glyph cells
    pub vertical_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            target_width: TARGET_WIDTH,
            min_width: MIN_WIDTH,
            blur_radius: BLUR_RADIUS,
            gamma: GAMMA,
            line_height: LINE_HEIGHT,
            vertical_scale: VERTICAL_SCALE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(AsciifyError::Config("target_width must be positive".into()));
        }
        if self.min_width == 0 {
            return Err(AsciifyError::Config("min_width must be positive".into()));
        }
        if !self.blur_radius.is_finite() || self.blur_radius < 0.0 {
            return Err(AsciifyError::Config(format!(
                "blur_radius must be a non-negative number, got {}",
                self.blur_radius
            )));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(AsciifyError::Config(format!("gamma must be positive, got {}", self.gamma)));
        }
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(AsciifyError::Config(format!(
                "line_height must be positive, got {}",
                self.line_height
            )));
        }
        if !self.vertical_scale.is_finite() || self.vertical_scale <= 0.0 {
            return Err(AsciifyError::Config(format!(
                "vertical_scale must be positive, got {}",
                self.vertical_scale
            )));
        }
        Ok(())
    }
}
