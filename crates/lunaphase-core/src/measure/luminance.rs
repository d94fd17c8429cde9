use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::{LUMA_WEIGHT_B, LUMA_WEIGHT_G, LUMA_WEIGHT_R, LUMA_WEIGHT_SUM};

/// BT.601 luma of one pixel, rounded to the nearest integer.
pub fn luma(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let weighted = LUMA_WEIGHT_R * r as u32 + LUMA_WEIGHT_G * g as u32 + LUMA_WEIGHT_B * b as u32;
    ((weighted + LUMA_WEIGHT_SUM / 2) / LUMA_WEIGHT_SUM) as u8
}

/// Single-channel luminance plane, shape = (height, width).
pub fn luminance(img: &RgbImage) -> Array2<u8> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        luma(img.get_pixel(col as u32, row as u32))
    })
}
