pub mod crop;
pub mod engine;
pub mod luminance;
pub mod mask;
pub mod overlay;
pub mod params;
pub mod phase;

pub use engine::{measure, IlluminationMeasurement, MeasureOutput, Render};
pub use mask::CircleMask;
pub use overlay::OverlayOptions;
pub use params::{validate_threshold, MaskParameters};
