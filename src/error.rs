//! Custom error types for logoconvert.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the logoconvert library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file is not where it is expected to be.
    #[error("input file not found: {path} (place icon.jpeg in the assets directory)")]
    MissingInput { path: PathBuf },

    /// Failed to decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for logoconvert operations.
pub type Result<T> = std::result::Result<T, Error>;
