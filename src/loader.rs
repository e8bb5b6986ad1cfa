//! Image loading with content-based format detection.

use crate::{AsciifyError, Result};
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

/// Read and decode the image at `path`.
///
/// Returns [`AsciifyError::NotFound`] unless `path` is an existing regular file.
/// Everything that goes wrong after that, including read errors, is a
/// [`AsciifyError::Decode`].
pub fn load(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(AsciifyError::NotFound(path.to_path_buf()));
    }

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
