use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CROP_PERCENT, DEFAULT_RADIUS, DEFAULT_THRESHOLD, DEFAULT_WORKING_SIZE,
    MAX_WORKING_SIZE,
};
use crate::error::{LunaError, Result};
use crate::io::naming::DecimalStyle;
use crate::measure::{validate_threshold, MaskParameters, OverlayOptions};
use crate::session::CalibrationState;

/// Calibration settings as stored on disk (TOML) or assembled from CLI flags.
///
/// Numeric fields are kept wide so out-of-range values surface as
/// `InvalidParameter` from [`CalibrationConfig::validate`] instead of as
/// deserialization failures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Side of the canonical square raster.
    #[serde(default = "default_working_size")]
    pub working_size: u32,
    /// Brightness threshold, 0-255.
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    /// Mask radius in working-raster pixels.
    #[serde(default = "default_radius")]
    pub radius: i64,
    #[serde(default)]
    pub center_offset_x: i64,
    #[serde(default)]
    pub center_offset_y: i64,
    /// Centered output crop, 1-100 percent of the raster side.
    #[serde(default = "default_crop_percent")]
    pub crop_percent: i64,
    /// Decimal separator style in exported file names.
    #[serde(default)]
    pub naming: DecimalStyle,
    #[serde(default)]
    pub overlay: OverlayOptions,
}

fn default_working_size() -> u32 {
    DEFAULT_WORKING_SIZE
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD as i64
}
fn default_radius() -> i64 {
    DEFAULT_RADIUS as i64
}
fn default_crop_percent() -> i64 {
    DEFAULT_CROP_PERCENT as i64
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            working_size: DEFAULT_WORKING_SIZE,
            threshold: DEFAULT_THRESHOLD as i64,
            radius: DEFAULT_RADIUS as i64,
            center_offset_x: 0,
            center_offset_y: 0,
            crop_percent: DEFAULT_CROP_PERCENT as i64,
            naming: DecimalStyle::default(),
            overlay: OverlayOptions::default(),
        }
    }
}

impl CalibrationConfig {
    /// Reject every out-of-range value before it reaches the engine.
    pub fn validate(&self) -> Result<()> {
        self.working_size()?;
        self.threshold()?;
        self.mask_parameters()?;
        self.overlay.validate()
    }

    pub fn working_size(&self) -> Result<u32> {
        if self.working_size == 0 || self.working_size > MAX_WORKING_SIZE {
            return Err(LunaError::InvalidParameter(format!(
                "working size {} outside 1..={MAX_WORKING_SIZE}",
                self.working_size
            )));
        }
        Ok(self.working_size)
    }

    pub fn threshold(&self) -> Result<u8> {
        validate_threshold(self.threshold)
    }

    pub fn mask_parameters(&self) -> Result<MaskParameters> {
        MaskParameters::new(
            self.radius,
            self.center_offset_x,
            self.center_offset_y,
            self.crop_percent,
        )
    }

    /// Calibration state at frame 0 with these parameters.
    pub fn initial_state(&self) -> Result<CalibrationState> {
        Ok(CalibrationState {
            index: 0,
            mask: self.mask_parameters()?,
            threshold: self.threshold()?,
        })
    }
}
