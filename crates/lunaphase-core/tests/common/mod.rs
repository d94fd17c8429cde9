#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use lunaphase_core::frame::PreparedRaster;

pub const SIZE: u32 = 64;

/// Uniform `bg` square with a disk of `fg` centered at `center` (x, y).
pub fn disk_image(size: u32, center: (i64, i64), radius: i64, fg: [u8; 3], bg: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        let dx = x as i64 - center.0;
        let dy = y as i64 - center.1;
        if dx * dx + dy * dy <= radius * radius {
            Rgb(fg)
        } else {
            Rgb(bg)
        }
    })
}

/// Black square whose left half (x < size / 2) is white.
pub fn left_half_lit(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, _| {
        if x < size / 2 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

pub fn uniform(size: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(size, size, Rgb(color))
}

/// Gray gradient along x, so every column has a different luminance.
pub fn gradient(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        let v = ((x * 255) / size.max(1)) as u8;
        Rgb([v, v.saturating_add((y % 7) as u8), v])
    })
}

pub fn raster(img: RgbImage) -> PreparedRaster {
    PreparedRaster::new(Path::new("synthetic.png"), img)
}

pub fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("write test png");
    path
}

/// A file with an image extension that no decoder accepts.
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not an image").expect("write corrupt file");
    path
}

/// Directory with `count` gradient frames named `frame_000.png`, `frame_001.png`, ...
pub fn frame_dir(count: usize) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for i in 0..count {
        let img = disk_image(SIZE, (32, 32), 8 + 2 * i as i64, [230, 230, 230], [10, 10, 10]);
        write_png(dir.path(), &format!("frame_{i:03}.png"), &img);
    }
    dir
}

/// Exact mask membership count by brute force over the raster.
pub fn brute_force_count(size: u32, center: (i64, i64), radius: i64) -> usize {
    let mut n = 0;
    for y in 0..size as i64 {
        for x in 0..size as i64 {
            let d = (((x - center.0).pow(2) + (y - center.1).pow(2)) as f64).sqrt();
            if d <= radius as f64 {
                n += 1;
            }
        }
    }
    n
}
