pub mod image_io;
pub mod naming;
pub mod prepare;
pub mod scan;

pub use naming::{output_file_name, DecimalStyle};
pub use prepare::prepare;
pub use scan::discover_frames;
