use crate::consts::DEFAULT_THRESHOLD;
use crate::error::Result;
use crate::measure::{validate_threshold, MaskParameters};

/// Everything the operator has dialled in: active frame plus frozen engine inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalibrationState {
    pub index: usize,
    pub mask: MaskParameters,
    pub threshold: u8,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            index: 0,
            mask: MaskParameters::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl CalibrationState {
    /// New state with `change` applied. Out-of-range values are rejected and
    /// `self` is left as it was.
    pub fn with_change(&self, change: &ParamChange) -> Result<Self> {
        let mut next = self.clone();
        match *change {
            ParamChange::Threshold(v) => next.threshold = validate_threshold(v)?,
            ParamChange::Radius(v) => next.mask = self.mask.with_radius(v)?,
            ParamChange::CenterOffset(x, y) => next.mask = self.mask.with_center_offset(x, y)?,
            ParamChange::CropPercent(v) => next.mask = self.mask.with_crop_percent(v)?,
        }
        Ok(next)
    }
}

/// One operator edit, carrying the raw (unvalidated) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamChange {
    Threshold(i64),
    Radius(i64),
    CenterOffset(i64, i64),
    CropPercent(i64),
}

/// Lifecycle of a calibration session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No directory loaded.
    Empty,
    /// Frames known, nothing rendered since the load.
    Loaded,
    /// At least one preview published for the current directory.
    Previewing,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Previewing => write!(f, "Previewing"),
        }
    }
}
