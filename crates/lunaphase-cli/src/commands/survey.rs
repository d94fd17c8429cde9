use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lunaphase_core::batch::survey;

use super::args::CalibrationArgs;
use crate::progress::BarReporter;
use crate::summary::{print_failures, print_measurement, print_settings, Styles};

#[derive(Args)]
pub struct SurveyArgs {
    /// Directory of source frames
    pub dir: PathBuf,

    #[command(flatten)]
    pub calibration: CalibrationArgs,
}

pub fn run(args: &SurveyArgs) -> Result<()> {
    let config = args.calibration.resolve()?;
    let state = config.initial_state()?;
    print_settings("Lunaphase Survey", &config);

    let reporter = BarReporter::new("Measuring")?;
    let report = survey(&args.dir, &state, config.working_size()?, &reporter)?;

    println!();
    for entry in &report.entries {
        print_measurement(&entry.frame, &entry.measurement);
    }
    print_failures(&report.failures);

    let s = Styles::new();
    println!();
    match report.mean_lit_percent() {
        Some(mean) => println!(
            "  {:<14}{}",
            s.label.apply_to("Mean lit"),
            s.value.apply_to(format!("{mean:.2}%"))
        ),
        None => println!("  {}", s.bad.apply_to("No frame could be measured")),
    }

    Ok(())
}
