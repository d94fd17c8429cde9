use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lunaphase_core::io::scan::discover_frames;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory of source frames
    pub dir: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frames = discover_frames(&args.dir)?;

    println!("Directory:   {}", args.dir.display());
    println!("Frames:      {}", frames.len());
    if let (Some(first), Some(last)) = (frames.first(), frames.last()) {
        println!("First:       {}", first.file_name());
        println!("Last:        {}", last.file_name());
        match image::image_dimensions(&first.path) {
            Ok((w, h)) => println!("Dimensions:  {}x{} (first frame)", w, h),
            Err(e) => println!("Dimensions:  unreadable ({})", e),
        }
    }

    Ok(())
}
