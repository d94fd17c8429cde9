use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lunaphase_core::config::CalibrationConfig;
use lunaphase_core::io::naming::DecimalStyle;

#[derive(Clone, Copy, ValueEnum)]
pub enum NamingArg {
    /// 0001_45.23_87.4.png
    Dot,
    /// 0001_45_23_87_4.png
    Underscore,
}

/// Calibration parameters shared by every measuring command.
///
/// Flags override values from `--config`, which override the built-in defaults.
#[derive(Args)]
pub struct CalibrationArgs {
    /// Calibration config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Brightness threshold (0-255); pixels strictly above it count as lit
    #[arg(short, long)]
    pub threshold: Option<i64>,

    /// Mask radius in working-raster pixels
    #[arg(short, long)]
    pub radius: Option<i64>,

    /// Horizontal mask center offset from the raster center
    #[arg(long, allow_hyphen_values = true)]
    pub offset_x: Option<i64>,

    /// Vertical mask center offset from the raster center
    #[arg(long, allow_hyphen_values = true)]
    pub offset_y: Option<i64>,

    /// Centered output crop, percent of the raster side (1-100)
    #[arg(long)]
    pub crop: Option<i64>,

    /// Working resolution every frame is resampled to
    #[arg(long)]
    pub size: Option<u32>,

    /// Decimal separator style in exported file names
    #[arg(long, value_enum)]
    pub naming: Option<NamingArg>,
}

impl CalibrationArgs {
    /// Layer defaults, config file and flags, then validate.
    pub fn resolve(&self) -> Result<CalibrationConfig> {
        let mut config = match self.config {
            Some(ref path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                toml::from_str(&contents).context("Invalid calibration config")?
            }
            None => CalibrationConfig::default(),
        };

        if let Some(v) = self.threshold {
            config.threshold = v;
        }
        if let Some(v) = self.radius {
            config.radius = v;
        }
        if let Some(v) = self.offset_x {
            config.center_offset_x = v;
        }
        if let Some(v) = self.offset_y {
            config.center_offset_y = v;
        }
        if let Some(v) = self.crop {
            config.crop_percent = v;
        }
        if let Some(v) = self.size {
            config.working_size = v;
        }
        if let Some(naming) = self.naming {
            config.naming = match naming {
                NamingArg::Dot => DecimalStyle::Dot,
                NamingArg::Underscore => DecimalStyle::Underscore,
            };
        }

        config.validate()?;
        Ok(config)
    }
}
