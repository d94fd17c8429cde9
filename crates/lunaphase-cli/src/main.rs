mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lunaphase", about = "Lunar illumination and phase-angle estimation")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the frames found in a directory
    Info(commands::info::InfoArgs),
    /// Measure a single frame
    Measure(commands::measure::MeasureArgs),
    /// Measure every frame of a directory without writing output
    Survey(commands::survey::SurveyArgs),
    /// Measure every frame and write one named artifact per frame
    Export(commands::export::ExportArgs),
    /// Interactive calibration session driven from stdin
    Calibrate(commands::calibrate::CalibrateArgs),
    /// Print or save the default calibration config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Measure(args) => commands::measure::run(args),
        Commands::Survey(args) => commands::survey::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Calibrate(args) => commands::calibrate::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
