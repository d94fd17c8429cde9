use image::{Rgb, RgbImage};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BOUNDARY_COLOR, DEFAULT_HIGHLIGHT_COLOR, DEFAULT_OVERLAY_OPACITY};
use crate::error::{LunaError, Result};

use super::mask::CircleMask;

/// Appearance of the operator preview. Never affects the measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    /// Colour blended over lit mask pixels.
    #[serde(default = "default_highlight")]
    pub highlight: [u8; 3],
    /// Blend weight of the highlight, in [0.0, 1.0].
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Draw the mask boundary ring.
    #[serde(default = "default_true")]
    pub draw_boundary: bool,
    #[serde(default = "default_boundary_color")]
    pub boundary_color: [u8; 3],
}

fn default_highlight() -> [u8; 3] {
    DEFAULT_HIGHLIGHT_COLOR
}
fn default_opacity() -> f32 {
    DEFAULT_OVERLAY_OPACITY
}
fn default_true() -> bool {
    true
}
fn default_boundary_color() -> [u8; 3] {
    DEFAULT_BOUNDARY_COLOR
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            highlight: DEFAULT_HIGHLIGHT_COLOR,
            opacity: DEFAULT_OVERLAY_OPACITY,
            draw_boundary: true,
            boundary_color: DEFAULT_BOUNDARY_COLOR,
        }
    }
}

impl OverlayOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(LunaError::InvalidParameter(format!(
                "overlay opacity {} outside 0.0..=1.0",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// Blend the highlight over lit pixels and optionally stamp the mask boundary.
///
/// `lit` has the same shape as `mask.data`.
pub fn composite(
    base: &RgbImage,
    mask: &CircleMask,
    lit: &Array2<bool>,
    options: &OverlayOptions,
) -> RgbImage {
    let mut out = base.clone();
    let alpha = options.opacity.clamp(0.0, 1.0);

    for ((row, col), &is_lit) in lit.indexed_iter() {
        if is_lit {
            let px = out.get_pixel_mut(col as u32, row as u32);
            *px = blend(px, &options.highlight, alpha);
        }
        if options.draw_boundary && mask.is_boundary(row, col) {
            out.put_pixel(col as u32, row as u32, Rgb(options.boundary_color));
        }
    }

    out
}

fn blend(px: &Rgb<u8>, color: &[u8; 3], alpha: f32) -> Rgb<u8> {
    let mix = |a: u8, b: u8| ((1.0 - alpha) * a as f32 + alpha * b as f32).round() as u8;
    Rgb([
        mix(px.0[0], color[0]),
        mix(px.0[1], color[1]),
        mix(px.0[2], color[2]),
    ])
}
