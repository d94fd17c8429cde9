use std::borrow::Cow;

use image::{imageops, RgbImage};

use crate::io::prepare::center_square;

/// Side of the centered output crop: `floor(min(w, h) * percent / 100)`.
pub fn crop_side(width: u32, height: u32, percent: u8) -> u32 {
    (width.min(height) as u64 * percent as u64 / 100) as u32
}

/// Apply the output crop. Non-square input is first re-cropped to its centered
/// square. At 100% a square input is borrowed as-is.
pub fn apply_output_crop(img: &RgbImage, percent: u8) -> Cow<'_, RgbImage> {
    let square: Cow<'_, RgbImage> = if img.width() == img.height() {
        Cow::Borrowed(img)
    } else {
        Cow::Owned(center_square(img))
    };

    if percent >= 100 {
        return square;
    }

    let full = square.width();
    let side = crop_side(full, full, percent);
    let offset = (full - side) / 2;
    Cow::Owned(imageops::crop_imm(&*square, offset, offset, side, side).to_image())
}
