use std::path::Path;

use tracing::info;

use crate::error::{LunaError, Result};
use crate::frame::SourceFrame;
use crate::io::prepare::prepare;
use crate::io::scan::discover_frames;
use crate::measure::{measure, IlluminationMeasurement, Render};
use crate::progress::ProgressReporter;
use crate::session::CalibrationState;

use super::sweep;

#[derive(Clone, Debug)]
pub struct SurveyEntry {
    pub frame: SourceFrame,
    pub measurement: IlluminationMeasurement,
}

/// Measurements for a whole directory, nothing written to disk.
#[derive(Debug, Default)]
pub struct SurveyReport {
    pub entries: Vec<SurveyEntry>,
    pub failures: Vec<(usize, LunaError)>,
}

impl SurveyReport {
    /// Mean lit percentage over the successfully measured frames.
    pub fn mean_lit_percent(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|e| e.measurement.lit_percent).sum();
        Some(sum / self.entries.len() as f64)
    }
}

/// Measure every supported frame of `directory` with the frozen `state`.
pub fn survey(
    directory: &Path,
    state: &CalibrationState,
    working_size: u32,
    reporter: &dyn ProgressReporter,
) -> Result<SurveyReport> {
    let frames = discover_frames(directory)?;
    Ok(survey_frames(&frames, state, working_size, reporter))
}

pub fn survey_frames(
    frames: &[SourceFrame],
    state: &CalibrationState,
    working_size: u32,
    reporter: &dyn ProgressReporter,
) -> SurveyReport {
    let (entries, failures) = sweep(frames, reporter, |frame| {
        let raster = prepare(&frame.path, working_size)?;
        let output = measure(&raster, &state.mask, state.threshold, &Render::None);
        Ok(SurveyEntry {
            frame: frame.clone(),
            measurement: output.measurement,
        })
    });

    info!(
        measured = entries.len(),
        failed = failures.len(),
        "Survey complete"
    );
    SurveyReport { entries, failures }
}
