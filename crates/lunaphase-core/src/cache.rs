use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::frame::PreparedRaster;
use crate::io::prepare::prepare;

/// Memoized prepared rasters for one frame directory, keyed by source path.
///
/// Unbounded: a session covers a single directory of at most a few hundred
/// frames. Cleared wholesale when the directory changes.
pub struct PreparedCache {
    working_size: u32,
    entries: HashMap<PathBuf, PreparedRaster>,
    hits: usize,
    misses: usize,
}

impl PreparedCache {
    pub fn new(working_size: u32) -> Self {
        Self {
            working_size,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn working_size(&self) -> u32 {
        self.working_size
    }

    /// Return a copy of the prepared raster for `path`, preparing it on first access.
    ///
    /// Callers own the returned copy; mutating it never touches the cached entry.
    /// Load failures are not cached, so a later retry re-reads the file.
    pub fn get(&mut self, path: &Path) -> Result<PreparedRaster> {
        if let Some(raster) = self.entries.get(path) {
            self.hits += 1;
            debug!(path = %path.display(), "Prepared cache hit");
            return Ok(raster.clone());
        }

        self.misses += 1;
        debug!(path = %path.display(), "Prepared cache miss");
        let raster = prepare(path, self.working_size)?;
        self.entries.insert(path.to_path_buf(), raster.clone());
        Ok(raster)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since the last clear.
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
