//! Glyph grid plus the title it is rendered under.

use crate::glyph::GlyphCell;

/// One scan line of glyphs, left to right.
pub type Row = Vec<GlyphCell>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub rows: Vec<Row>,
}

impl Document {
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self { title: title.into(), rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &GlyphCell> {
        self.rows.iter().flatten()
    }
}
