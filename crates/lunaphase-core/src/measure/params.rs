use crate::consts::{
    DEFAULT_CROP_PERCENT, DEFAULT_RADIUS, MAX_CENTER_OFFSET, MAX_RADIUS,
};
use crate::error::{LunaError, Result};

/// Geometry of the analysed disk. Construct through [`MaskParameters::new`],
/// which enforces the declared ranges; the engine itself never re-validates.
///
/// The disk may extend past the raster edges; it is clipped silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskParameters {
    radius: u32,
    offset_x: i32,
    offset_y: i32,
    crop_percent: u8,
}

impl MaskParameters {
    pub fn new(radius: i64, offset_x: i64, offset_y: i64, crop_percent: i64) -> Result<Self> {
        Ok(Self {
            radius: validate_radius(radius)?,
            offset_x: validate_offset("center offset x", offset_x)?,
            offset_y: validate_offset("center offset y", offset_y)?,
            crop_percent: validate_crop_percent(crop_percent)?,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn crop_percent(&self) -> u8 {
        self.crop_percent
    }

    pub fn with_radius(self, radius: i64) -> Result<Self> {
        Ok(Self {
            radius: validate_radius(radius)?,
            ..self
        })
    }

    pub fn with_center_offset(self, offset_x: i64, offset_y: i64) -> Result<Self> {
        Ok(Self {
            offset_x: validate_offset("center offset x", offset_x)?,
            offset_y: validate_offset("center offset y", offset_y)?,
            ..self
        })
    }

    pub fn with_crop_percent(self, crop_percent: i64) -> Result<Self> {
        Ok(Self {
            crop_percent: validate_crop_percent(crop_percent)?,
            ..self
        })
    }
}

impl Default for MaskParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            offset_x: 0,
            offset_y: 0,
            crop_percent: DEFAULT_CROP_PERCENT,
        }
    }
}

/// Brightness threshold on the 0-255 luminance scale.
pub fn validate_threshold(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        LunaError::InvalidParameter(format!("threshold {value} outside 0..=255"))
    })
}

fn validate_radius(value: i64) -> Result<u32> {
    if value <= 0 || value > MAX_RADIUS as i64 {
        return Err(LunaError::InvalidParameter(format!(
            "radius {value} outside 1..={MAX_RADIUS}"
        )));
    }
    Ok(value as u32)
}

fn validate_offset(name: &str, value: i64) -> Result<i32> {
    let limit = MAX_CENTER_OFFSET as i64;
    if !(-limit..=limit).contains(&value) {
        return Err(LunaError::InvalidParameter(format!(
            "{name} {value} outside -{MAX_CENTER_OFFSET}..={MAX_CENTER_OFFSET}"
        )));
    }
    Ok(value as i32)
}

fn validate_crop_percent(value: i64) -> Result<u8> {
    if !(1..=100).contains(&value) {
        return Err(LunaError::InvalidParameter(format!(
            "crop percent {value} outside 1..=100"
        )));
    }
    Ok(value as u8)
}
