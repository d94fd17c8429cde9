use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

use crate::error::{LunaError, Result};
use crate::frame::PreparedRaster;

/// Decode `path` and canonicalize it into a `size` x `size` RGB raster.
///
/// Non-square sources are cropped to their largest centered square first,
/// then resampled with a Lanczos3 filter. Colour is preserved.
pub fn prepare(path: &Path, size: u32) -> Result<PreparedRaster> {
    if size == 0 {
        return Err(LunaError::InvalidParameter(
            "working size must be > 0".into(),
        ));
    }

    let decoded = image::open(path).map_err(|source| LunaError::FrameLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(LunaError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let square = center_square(&rgb);
    let image = if square.width() == size {
        square
    } else {
        imageops::resize(&square, size, size, FilterType::Lanczos3)
    };

    debug!(path = %path.display(), src_w = w, src_h = h, size, "Prepared raster");
    Ok(PreparedRaster::new(path, image))
}

/// Crop the largest centered square out of `img`.
///
/// Offsets are `(dimension - side) / 2` with floor division per axis.
/// Square inputs are returned unchanged.
pub fn center_square(img: &RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    if w == h {
        return img.clone();
    }
    let side = w.min(h);
    let left = (w - side) / 2;
    let top = (h - side) / 2;
    imageops::crop_imm(img, left, top, side, side).to_image()
}
