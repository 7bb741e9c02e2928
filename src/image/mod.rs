//! Image loading, resizing, and saving utilities.

mod load;
mod save;

pub use load::load_rgb;
pub use save::save_png;

use image::{imageops, imageops::FilterType, RgbImage};

/// Edge length of the square app icon outputs (icon, splash-icon,
/// adaptive-icon).
pub const ICON_SIZE: u32 = 1024;

/// Edge length of the square favicon output.
pub const FAVICON_SIZE: u32 = 96;

/// Resize an RGB image to exact target dimensions.
///
/// Uses Lanczos3, which keeps aliasing under control even for the large
/// downscales this tool performs (1024 -> 96 for the favicon).
pub fn resize_exact(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width, height, FilterType::Lanczos3)
}
