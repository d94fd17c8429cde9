use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// Save an RGB raster as 8-bit PNG.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
