//! Frame rasterization and PNG output for the pattern-grid animation.
//!
//! Each frame is an independent raster: the grid is walked cell by
//! cell, the cell's pattern value is mapped to a color, and the
//! corresponding pixel block is painted. Frames are PNG-encoded to
//! sequentially numbered files.

use crate::{config::GridConfig, pattern};
use image::{ImageResult, RgbImage};
use std::path::PathBuf;

/// Per-frame time scalar, `frame / num_frames`, in `[0, 1)`.
pub fn time_factor(cfg: &GridConfig, frame: u32) -> f64 {
    f64::from(frame) / f64::from(cfg.num_frames)
}

/// Rasterizes one animation frame.
///
/// Fills a fresh `image_size() × image_size()` buffer with the
/// background color, then paints every cell's `cell_size × cell_size`
/// pixel block with the color mapped from its pattern value at this
/// frame's [`time_factor`].
pub fn render_frame(cfg: &GridConfig, frame: u32) -> RgbImage {
    let size = cfg.image_size();
    let mut img = RgbImage::from_pixel(size, size, cfg.background);
    let t = time_factor(cfg, frame);

    for row in 0..cfg.grid_size {
        for col in 0..cfg.grid_size {
            let value = pattern::pattern_value(row, col, t);
            let color = pattern::value_to_color(value, cfg.start_color, cfg.end_color);

            let x0 = col * cfg.cell_size;
            let y0 = row * cfg.cell_size;
            for y in y0..y0 + cfg.cell_size {
                for x in x0..x0 + cfg.cell_size {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
    img
}

/// Output path for a frame: `<dir>/<prefix><NNN>.png`.
///
/// Frame numbering in file names is 1-based and zero-padded to three
/// digits, so frame index `0` becomes `001`.
pub fn frame_path(cfg: &GridConfig, frame: u32) -> PathBuf {
    cfg.output_dir
        .join(format!("{}{:03}.png", cfg.file_prefix, frame + 1))
}

/// Renders one frame and writes it as a PNG.
///
/// Encoding and I/O failures propagate as [`image::ImageError`].
///
/// ### Returns
/// The path the frame was written to.
pub fn write_frame(cfg: &GridConfig, frame: u32) -> ImageResult<PathBuf> {
    let path = frame_path(cfg, frame);
    render_frame(cfg, frame).save(&path)?;
    Ok(path)
}

/// Writes every frame of the animation in order.
///
/// Stops at the first failed write and propagates its error.
///
/// ### Returns
/// The paths of all written frames, in frame order.
pub fn write_animation(cfg: &GridConfig) -> ImageResult<Vec<PathBuf>> {
    (0..cfg.num_frames).map(|frame| write_frame(cfg, frame)).collect()
}
