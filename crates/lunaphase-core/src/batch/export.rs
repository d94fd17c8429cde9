use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{LunaError, Result};
use crate::frame::SourceFrame;
use crate::io::image_io::save_png;
use crate::io::naming::{output_file_name, DecimalStyle};
use crate::io::prepare::prepare;
use crate::io::scan::discover_frames;
use crate::measure::{measure, IlluminationMeasurement, OverlayOptions, Render};
use crate::progress::ProgressReporter;
use crate::session::{CalibrationSession, CalibrationState};

use super::sweep;

#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    /// Must match the working size the parameters were calibrated at.
    pub working_size: u32,
    pub naming: DecimalStyle,
    /// Write the composited preview instead of the plain cropped raster.
    pub annotate: bool,
    pub overlay: OverlayOptions,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>, working_size: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            working_size,
            naming: DecimalStyle::default(),
            annotate: false,
            overlay: OverlayOptions::default(),
        }
    }

    /// Options matching what `session` previews: same working size and overlay.
    pub fn for_session(session: &CalibrationSession, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            overlay: session.overlay().clone(),
            ..Self::new(output_dir, session.working_size())
        }
    }
}

/// One written artifact.
#[derive(Clone, Debug)]
pub struct ExportedFrame {
    pub frame: SourceFrame,
    pub output: PathBuf,
    pub measurement: IlluminationMeasurement,
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    /// In frame order.
    pub exported: Vec<ExportedFrame>,
    /// (frame index, cause), in frame order.
    pub failures: Vec<(usize, LunaError)>,
}

impl ExportSummary {
    pub fn success_count(&self) -> usize {
        self.exported.len()
    }
}

/// Export every supported frame of `directory` with the frozen `state`.
pub fn export_all(
    directory: &Path,
    state: &CalibrationState,
    options: &ExportOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ExportSummary> {
    let frames = discover_frames(directory)?;
    export_frames(&frames, state, options, reporter)
}

/// Export the given frames. Each frame goes through the same [`measure`] call
/// the interactive preview uses; sequence numbers come from the frame index,
/// so output names do not depend on completion order.
pub fn export_frames(
    frames: &[SourceFrame],
    state: &CalibrationState,
    options: &ExportOptions,
    reporter: &dyn ProgressReporter,
) -> Result<ExportSummary> {
    fs::create_dir_all(&options.output_dir)?;

    let render = if options.annotate {
        Render::Overlay(options.overlay.clone())
    } else {
        Render::Cropped
    };

    let (exported, failures) = sweep(frames, reporter, |frame| {
        export_one(frame, state, options, &render)
    });

    info!(
        exported = exported.len(),
        failed = failures.len(),
        output_dir = %options.output_dir.display(),
        "Export complete"
    );
    Ok(ExportSummary { exported, failures })
}

fn export_one(
    frame: &SourceFrame,
    state: &CalibrationState,
    options: &ExportOptions,
    render: &Render,
) -> Result<ExportedFrame> {
    let raster = prepare(&frame.path, options.working_size)?;
    let output = measure(&raster, &state.mask, state.threshold, render);

    let name = output_file_name(frame.index + 1, &output.measurement, options.naming);
    let path = options.output_dir.join(name);
    let image = output.image.unwrap_or(raster.image);
    save_png(&image, &path)?;

    Ok(ExportedFrame {
        frame: frame.clone(),
        output: path,
        measurement: output.measurement,
    })
}
