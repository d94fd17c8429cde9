use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lunaphase_core::batch::{export_all, ExportOptions, ExportSummary};

use super::args::CalibrationArgs;
use crate::progress::BarReporter;
use crate::summary::{print_failures, print_settings, Styles};

#[derive(Args)]
pub struct ExportArgs {
    /// Directory of source frames
    pub dir: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = "lunaphase_out")]
    pub output: PathBuf,

    #[command(flatten)]
    pub calibration: CalibrationArgs,

    /// Write annotated previews instead of plain cropped frames
    #[arg(long)]
    pub annotate: bool,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let config = args.calibration.resolve()?;
    let state = config.initial_state()?;
    print_settings("Lunaphase Export", &config);

    let options = ExportOptions {
        naming: config.naming,
        annotate: args.annotate,
        overlay: config.overlay.clone(),
        ..ExportOptions::new(&args.output, config.working_size()?)
    };

    let reporter = BarReporter::new("Exporting")?;
    let summary = export_all(&args.dir, &state, &options, &reporter)?;
    print_export_summary(&summary, &options);

    Ok(())
}

pub fn print_export_summary(summary: &ExportSummary, options: &ExportOptions) {
    let s = Styles::new();
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Exported"),
        s.good.apply_to(format!("{} frame(s)", summary.success_count()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(options.output_dir.display())
    );
    print_failures(&summary.failures);
}
