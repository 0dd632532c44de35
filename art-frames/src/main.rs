//! Headless driver for the evolving pattern-grid animation.
//!
//! Writes the configured number of PNG frames into the current
//! directory and prints one progress line per file. Any encoding or
//! I/O failure terminates the run with the underlying error.

use art_core::{config::GridConfig, frames};
use image::ImageResult;

fn main() -> ImageResult<()> {
    let cfg = GridConfig::default();

    println!(
        "Generating {} frames of evolving patterns...",
        cfg.num_frames
    );

    for frame in 0..cfg.num_frames {
        let path = frames::write_frame(&cfg, frame)?;
        println!("Saved {}", path.display());
    }

    println!("Generation complete!");
    Ok(())
}
