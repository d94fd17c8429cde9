mod observer;
mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbImage;
use tracing::{debug, info, warn};

use crate::cache::PreparedCache;
use crate::config::CalibrationConfig;
use crate::error::{LunaError, Result};
use crate::frame::SourceFrame;
use crate::io::scan::discover_frames;
use crate::measure::{measure, IlluminationMeasurement, OverlayOptions, Render};

pub use observer::{NoOpObserver, PreviewObserver};
pub use state::{CalibrationState, ParamChange, SessionPhase};

/// What the session last showed the operator.
#[derive(Clone, Debug)]
pub struct Preview {
    pub frame: SourceFrame,
    /// The exact state that produced this preview.
    pub state: CalibrationState,
    pub measurement: IlluminationMeasurement,
    pub image: RgbImage,
}

/// Interactive calibration over one frame directory.
///
/// Every index or parameter change re-runs [`measure`] synchronously through
/// the prepared-raster cache and publishes the result. A change whose frame
/// fails to load is rejected and leaves both the state and the last preview
/// untouched.
pub struct CalibrationSession {
    cache: PreparedCache,
    overlay: OverlayOptions,
    defaults: CalibrationState,
    directory: Option<PathBuf>,
    frames: Vec<SourceFrame>,
    state: CalibrationState,
    phase: SessionPhase,
    latest: Option<Preview>,
    observer: Arc<dyn PreviewObserver>,
}

impl CalibrationSession {
    pub fn new(config: &CalibrationConfig) -> Result<Self> {
        config.validate()?;
        let defaults = config.initial_state()?;
        Ok(Self {
            cache: PreparedCache::new(config.working_size()?),
            overlay: config.overlay.clone(),
            state: defaults.clone(),
            defaults,
            directory: None,
            frames: Vec::new(),
            phase: SessionPhase::Empty,
            latest: None,
            observer: Arc::new(NoOpObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn PreviewObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Load the frames of `dir`, clear the cache and reset the state to the
    /// configured defaults at index 0. Returns the frame count.
    ///
    /// On failure the session keeps whatever it had before (an empty session
    /// stays `Empty`).
    pub fn load_directory(&mut self, dir: &Path) -> Result<usize> {
        let frames = discover_frames(dir)?;

        self.cache.clear();
        self.frames = frames;
        self.directory = Some(dir.to_path_buf());
        self.state = self.defaults.clone();
        self.latest = None;
        self.phase = SessionPhase::Loaded;

        info!(dir = %dir.display(), frames = self.frames.len(), "Calibration directory loaded");
        Ok(self.frames.len())
    }

    /// Recompute the active frame with the current state.
    pub fn refresh(&mut self) -> Result<&Preview> {
        self.transition(self.state.clone())
    }

    /// Activate frame `index`, clamped to the last frame.
    pub fn set_index(&mut self, index: usize) -> Result<&Preview> {
        if self.frames.is_empty() {
            return Err(LunaError::NoDirectoryLoaded);
        }
        let candidate = CalibrationState {
            index: index.min(self.frames.len() - 1),
            ..self.state.clone()
        };
        self.transition(candidate)
    }

    pub fn next(&mut self) -> Result<&Preview> {
        self.set_index(self.state.index.saturating_add(1))
    }

    pub fn previous(&mut self) -> Result<&Preview> {
        self.set_index(self.state.index.saturating_sub(1))
    }

    /// Apply one parameter edit. Invalid values are rejected before any recompute.
    pub fn apply(&mut self, change: ParamChange) -> Result<&Preview> {
        let candidate = self.state.with_change(&change)?;
        self.transition(candidate)
    }

    pub fn set_threshold(&mut self, threshold: i64) -> Result<&Preview> {
        self.apply(ParamChange::Threshold(threshold))
    }

    pub fn set_radius(&mut self, radius: i64) -> Result<&Preview> {
        self.apply(ParamChange::Radius(radius))
    }

    pub fn set_center_offset(&mut self, offset_x: i64, offset_y: i64) -> Result<&Preview> {
        self.apply(ParamChange::CenterOffset(offset_x, offset_y))
    }

    pub fn set_crop_percent(&mut self, crop_percent: i64) -> Result<&Preview> {
        self.apply(ParamChange::CropPercent(crop_percent))
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &CalibrationState {
        &self.state
    }

    /// Copy of the current state, for handing to a batch export.
    pub fn frozen_state(&self) -> CalibrationState {
        self.state.clone()
    }

    pub fn frames(&self) -> &[SourceFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn active_frame(&self) -> Option<&SourceFrame> {
        self.frames.get(self.state.index)
    }

    pub fn latest_preview(&self) -> Option<&Preview> {
        self.latest.as_ref()
    }

    pub fn overlay(&self) -> &OverlayOptions {
        &self.overlay
    }

    pub fn working_size(&self) -> u32 {
        self.cache.working_size()
    }

    pub fn cache(&self) -> &PreparedCache {
        &self.cache
    }

    fn transition(&mut self, candidate: CalibrationState) -> Result<&Preview> {
        if self.phase == SessionPhase::Empty {
            return Err(LunaError::NoDirectoryLoaded);
        }
        let frame = self
            .frames
            .get(candidate.index)
            .cloned()
            .ok_or(LunaError::FrameIndexOutOfRange {
                index: candidate.index,
                total: self.frames.len(),
            })?;

        let raster = match self.cache.get(&frame.path) {
            Ok(raster) => raster,
            Err(e) => {
                warn!(frame = %frame.path.display(), error = %e, "Frame load failed; keeping previous preview");
                self.observer.on_frame_error(&frame, &e);
                return Err(e);
            }
        };

        let output = measure(
            &raster,
            &candidate.mask,
            candidate.threshold,
            &Render::Overlay(self.overlay.clone()),
        );
        let preview = Preview {
            frame,
            measurement: output.measurement,
            image: output.image.unwrap_or(raster.image),
            state: candidate,
        };
        debug!(
            index = preview.state.index,
            lit_percent = preview.measurement.lit_percent,
            phase_angle = preview.measurement.phase_angle_degrees,
            "Preview recomputed"
        );

        self.state = preview.state.clone();
        self.phase = SessionPhase::Previewing;
        self.observer.on_preview(&preview);
        Ok(self.latest.insert(preview))
    }
}
