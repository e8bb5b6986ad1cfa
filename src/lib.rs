//! Image to colored ASCII art HTML converter.

pub mod config;
pub mod document;
pub mod glyph;
pub mod html;
pub mod loader;
pub mod preprocess;

pub use config::{Config, Palette};
pub use document::{Document, Row};
pub use glyph::GlyphCell;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsciifyError {
    #[error("{0}")]
    Usage(String),
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Cannot open image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Cannot open image: empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Error writing HTML to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AsciifyError {
    /// Process exit status reported by the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            AsciifyError::Usage(_) | AsciifyError::Config(_) => 1,
            AsciifyError::NotFound(_) => 2,
            AsciifyError::Decode(_) | AsciifyError::EmptyImage { .. } => 3,
            AsciifyError::Write { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, AsciifyError>;

/// Runs the load, preprocess, map and render stages with one [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.config.target_width = width;
        self
    }

    pub fn with_blur(mut self, radius: f32) -> Self {
        self.config.blur_radius = radius;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn with_palette(mut self, glyphs: &str) -> Result<Self> {
        self.config.palette = Palette::new(glyphs)?;
        Ok(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the glyph document for an already decoded image.
    pub fn convert(
        &self,
        image: &image::DynamicImage,
        title: impl Into<String>,
    ) -> Result<Document> {
        self.config.validate()?;
        let small = preprocess::prepare(image, &self.config)?;
        let rows = glyph::map_image(&small, &self.config);
        Ok(Document::new(title, rows))
    }

    pub fn render(&self, doc: &Document) -> String {
        html::render_html(doc, &self.config)
    }

    /// Convert the image at `input` and write `{stem}ASCII.html` beside it.
    ///
    /// Returns the path of the written page. Nothing is written unless every
    /// stage succeeds.
    pub fn convert_file(&self, input: impl AsRef<Path>) -> Result<PathBuf> {
        let input = input.as_ref();
        let image = loader::load(input)?;

        let title = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let doc = self.convert(&image, title)?;
        log::debug!("mapped {}x{} glyphs", doc.width(), doc.height());

        let out = html::output_path(input);
        html::write_document(&out, &self.render(&doc))?;
        Ok(out)
    }
}
