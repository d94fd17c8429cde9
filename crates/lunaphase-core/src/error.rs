use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to load frame {path}: {source}")]
    FrameLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No supported images found in {0}")]
    NoImagesFound(PathBuf),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },

    #[error("No frame directory loaded")]
    NoDirectoryLoaded,
}

pub type Result<T> = std::result::Result<T, LunaError>;
