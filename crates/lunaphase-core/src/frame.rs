use std::path::{Path, PathBuf};

use image::RgbImage;

/// A discovered source photograph and its position in the sorted sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFrame {
    pub path: PathBuf,
    /// Ordinal index after lexicographic filename sort.
    pub index: usize,
}

impl SourceFrame {
    pub fn new(path: impl Into<PathBuf>, index: usize) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Canonical square, fixed-resolution RGB raster derived from one source frame.
///
/// Colour is retained; luminance is derived later by the measurement engine.
#[derive(Clone, Debug)]
pub struct PreparedRaster {
    pub source: PathBuf,
    pub image: RgbImage,
}

impl PreparedRaster {
    pub fn new(source: &Path, image: RgbImage) -> Self {
        Self {
            source: source.to_path_buf(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
