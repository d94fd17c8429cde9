use serde::{Deserialize, Serialize};

use crate::consts::OUTPUT_EXTENSION;
use crate::measure::IlluminationMeasurement;

/// How decimal separators are written inside output file stems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalStyle {
    /// `0001_45.23_87.4.png`
    #[default]
    Dot,
    /// `0001_45_23_87_4.png`, for tooling that rejects periods in stems.
    Underscore,
}

impl std::fmt::Display for DecimalStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dot => write!(f, "Dot"),
            Self::Underscore => write!(f, "Underscore"),
        }
    }
}

/// Stem `<seq:04>_<percent:.2>_<angle:.1>` for one measured frame.
///
/// Rust float formatting never consults the locale, so the separator is
/// always `.` before `style` is applied.
pub fn output_stem(seq: usize, measurement: &IlluminationMeasurement, style: DecimalStyle) -> String {
    let percent = format!("{:.2}", measurement.lit_percent);
    let angle = format!("{:.1}", measurement.phase_angle_degrees);
    let (percent, angle) = match style {
        DecimalStyle::Dot => (percent, angle),
        DecimalStyle::Underscore => (percent.replace('.', "_"), angle.replace('.', "_")),
    };
    format!("{seq:04}_{percent}_{angle}")
}

/// Full output file name, including the lossless raster extension.
pub fn output_file_name(
    seq: usize,
    measurement: &IlluminationMeasurement,
    style: DecimalStyle,
) -> String {
    format!("{}.{}", output_stem(seq, measurement, style), OUTPUT_EXTENSION)
}
