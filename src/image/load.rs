//! Image loading utilities.

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

/// Load an image from disk as plain RGB.
///
/// The image is:
/// 1. Decoded from the specified path (format sniffed by the library)
/// 2. Converted to 8-bit RGB if it is anything else (RGBA, grayscale,
///    palette), discarding any alpha channel
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be decoded.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    // JPEG has no transparency, and the downstream PNGs are meant to be
    // opaque anyway, so normalize every color mode to RGB8 up front.
    Ok(img.into_rgb8())
}
