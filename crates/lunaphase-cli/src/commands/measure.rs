use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lunaphase_core::frame::SourceFrame;
use lunaphase_core::io::image_io::save_png;
use lunaphase_core::io::prepare::prepare;
use lunaphase_core::measure::{measure, Render};

use super::args::CalibrationArgs;
use crate::summary::{print_measurement, print_saved, print_settings};

#[derive(Args)]
pub struct MeasureArgs {
    /// Source image file
    pub file: PathBuf,

    #[command(flatten)]
    pub calibration: CalibrationArgs,

    /// Save the annotated preview (PNG)
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

pub fn run(args: &MeasureArgs) -> Result<()> {
    let config = args.calibration.resolve()?;
    let state = config.initial_state()?;
    print_settings("Lunaphase Measure", &config);

    let raster = prepare(&args.file, config.working_size()?)?;
    let render = if args.preview.is_some() {
        Render::Overlay(config.overlay.clone())
    } else {
        Render::None
    };
    let output = measure(&raster, &state.mask, state.threshold, &render);

    print_measurement(&SourceFrame::new(&args.file, 0), &output.measurement);

    if let (Some(path), Some(image)) = (&args.preview, &output.image) {
        save_png(image, path)?;
        print_saved(path);
    }

    Ok(())
}
