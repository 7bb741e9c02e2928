//! Image saving utilities.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbImage;

use crate::error::{Error, Result};

/// Save an RGB image as an optimized PNG.
///
/// Encodes with the library's best (still lossless) compression setting and
/// adaptive filtering, matching the "optimize" behavior asset pipelines
/// usually want for shipped icons.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the image cannot be
/// encoded.
pub fn save_png<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);

    img.write_with_encoder(encoder)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
