use crate::types::Color;
use image::Rgb;
use std::path::PathBuf;

/// Parameters of the recursive fractal tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeConfig {
    /// Angle between a branch and each of its children, in degrees.
    pub branch_angle: f32,
    /// Length ratio between a child branch and its parent.
    pub scale: f32,
    /// Length of the trunk, in world units.
    pub initial_length: f32,
    /// Number of branching levels below the trunk.
    pub depth: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            branch_angle: 25.0,
            scale: 0.7,
            initial_length: 100.0,
            depth: 9,
        }
    }
}

/// Parameters of the animated pattern grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of cells per side of the square grid.
    pub grid_size: u32,
    /// Side length of one cell, in pixels.
    pub cell_size: u32,
    /// Number of animation frames to render.
    pub num_frames: u32,
    /// Color the frame buffer is filled with before cells are painted.
    pub background: Color,
    /// Color a cell takes at pattern value `0.0`.
    pub start_color: Color,
    /// Color a cell takes at pattern value `1.0`.
    pub end_color: Color,
    /// Prefix of the per-frame output file names.
    pub file_prefix: String,
    /// Directory the frame files are written into.
    pub output_dir: PathBuf,
}

impl GridConfig {
    /// Side length of a rendered frame in pixels (`grid_size * cell_size`).
    pub fn image_size(&self) -> u32 {
        self.grid_size * self.cell_size
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 16,
            cell_size: 30,
            num_frames: 60,
            background: Rgb([255, 255, 255]),
            start_color: Rgb([0, 0, 0]),
            end_color: Rgb([100, 100, 255]),
            file_prefix: "pattern_grid_".to_owned(),
            output_dir: PathBuf::from("."),
        }
    }
}
