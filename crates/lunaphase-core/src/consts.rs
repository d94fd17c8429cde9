/// Side length (pixels) of the canonical square raster every frame is resampled to.
pub const DEFAULT_WORKING_SIZE: u32 = 240;

/// Largest accepted working size.
pub const MAX_WORKING_SIZE: u32 = 8192;

/// Default brightness threshold on the 0-255 luminance scale.
pub const DEFAULT_THRESHOLD: u8 = 150;

/// Default mask radius in working-raster pixels.
pub const DEFAULT_RADIUS: u32 = 100;

/// Largest accepted mask radius. Exceeds any expected working size.
pub const MAX_RADIUS: u32 = 8192;

/// Largest accepted absolute center offset, per axis.
pub const MAX_CENTER_OFFSET: i32 = 8192;

/// Default output crop percentage (100 = no crop).
pub const DEFAULT_CROP_PERCENT: u8 = 100;

/// ITU-R BT.601 luminance weights, scaled by 1000 for integer arithmetic.
pub const LUMA_WEIGHT_R: u32 = 299;
pub const LUMA_WEIGHT_G: u32 = 587;
pub const LUMA_WEIGHT_B: u32 = 114;
pub const LUMA_WEIGHT_SUM: u32 = 1000;

/// Default highlight colour for lit pixels in the preview.
pub const DEFAULT_HIGHLIGHT_COLOR: [u8; 3] = [255, 64, 32];

/// Default blend opacity of the highlight over the raster.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.45;

/// Default colour of the mask boundary ring.
pub const DEFAULT_BOUNDARY_COLOR: [u8; 3] = [0, 220, 255];

/// File extensions (lowercase) accepted as source frames.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

/// Extension of exported artifacts.
pub const OUTPUT_EXTENSION: &str = "png";

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;
