/// Fraction of mask pixels that are lit, clamped to `[0, 1]`.
///
/// An empty mask (disk clipped away entirely) yields 0.0.
pub fn lit_fraction(lit: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (lit as f64 / total as f64).min(1.0)
}

/// Phase angle in degrees for a lit fraction under the uniform-sphere model:
/// `acos(2f - 1)`. Fraction 1.0 maps to 0°, fraction 0.0 to 180°.
pub fn phase_angle_degrees(fraction: f64) -> f64 {
    (2.0 * fraction - 1.0).clamp(-1.0, 1.0).acos().to_degrees()
}
