use image::RgbImage;
use ndarray::Zip;
use serde::Serialize;

use crate::frame::PreparedRaster;

use super::crop::apply_output_crop;
use super::luminance::luminance;
use super::mask::{build_mask, mask_center};
use super::overlay::{composite, OverlayOptions};
use super::params::MaskParameters;
use super::phase::{lit_fraction, phase_angle_degrees};

/// Illumination of one frame under one parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IlluminationMeasurement {
    /// Mask pixels with luminance strictly above the threshold.
    pub lit_pixels: usize,
    /// Exact mask membership count.
    pub mask_pixels: usize,
    /// In [0.0, 1.0].
    pub lit_fraction: f64,
    pub lit_percent: f64,
    /// In [0.0, 180.0]; 0 = fully lit disk.
    pub phase_angle_degrees: f64,
}

impl IlluminationMeasurement {
    pub fn from_counts(lit_pixels: usize, mask_pixels: usize) -> Self {
        let fraction = lit_fraction(lit_pixels, mask_pixels);
        Self {
            lit_pixels,
            mask_pixels,
            lit_fraction: fraction,
            lit_percent: fraction * 100.0,
            phase_angle_degrees: phase_angle_degrees(fraction),
        }
    }
}

/// Which raster, if any, [`measure`] should hand back alongside the numbers.
#[derive(Clone, Debug, Default)]
pub enum Render {
    /// Numbers only.
    #[default]
    None,
    /// The cropped raster, untouched.
    Cropped,
    /// The cropped raster with the lit region and boundary composited on top.
    Overlay(OverlayOptions),
}

#[derive(Clone, Debug)]
pub struct MeasureOutput {
    pub measurement: IlluminationMeasurement,
    pub image: Option<RgbImage>,
}

/// Measure the illuminated fraction of `raster`.
///
/// This is the single entry point shared by interactive preview, survey and
/// batch export. Pipeline: output crop -> luminance -> circular mask ->
/// strict threshold count -> fraction -> phase angle -> optional render.
/// The render step reads the measurement inputs but never feeds back into them.
pub fn measure(
    raster: &PreparedRaster,
    params: &MaskParameters,
    threshold: u8,
    render: &Render,
) -> MeasureOutput {
    // Step 1: output crop (identity at 100%).
    let cropped = apply_output_crop(&raster.image, params.crop_percent());

    // Step 2: luminance plane for thresholding; colour kept in `cropped`.
    let luma = luminance(&cropped);
    let (h, w) = luma.dim();

    // Step 3: mask over the cropped raster.
    let center = mask_center(w, h, params.offset_x(), params.offset_y());
    let mask = build_mask(h, w, center, params.radius());

    // Step 4: strict greater-than lit test within the mask.
    let lit = Zip::from(&mask.data)
        .and(&luma)
        .map_collect(|&inside, &l| inside && l > threshold);
    let lit_pixels = lit.iter().filter(|&&v| v).count();

    // Steps 5-6: fraction and phase angle.
    let measurement = IlluminationMeasurement::from_counts(lit_pixels, mask.count);

    // Step 7: operator-facing render.
    let image = match render {
        Render::None => None,
        Render::Cropped => Some(cropped.into_owned()),
        Render::Overlay(options) => Some(composite(&cropped, &mask, &lit, options)),
    };

    MeasureOutput { measurement, image }
}
