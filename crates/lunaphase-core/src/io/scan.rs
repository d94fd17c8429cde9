use std::fs;
use std::path::Path;

use tracing::info;

use crate::consts::SUPPORTED_EXTENSIONS;
use crate::error::{LunaError, Result};
use crate::frame::SourceFrame;

/// True if `path` has one of the supported raster extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Enumerate the supported image files in `dir`, sorted lexicographically by
/// file name. Indices are assigned after sorting and never change.
///
/// Fails with `NoImagesFound` when the directory holds no supported image.
pub fn discover_frames(dir: &Path) -> Result<Vec<SourceFrame>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(LunaError::NoImagesFound(dir.to_path_buf()));
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    info!(dir = %dir.display(), frames = paths.len(), "Discovered frames");
    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| SourceFrame::new(path, index))
        .collect())
}
