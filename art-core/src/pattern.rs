//! Per-cell pattern values and the value-to-color mapping.
//!
//! The pattern is a deterministic scalar field over `(row, col, time)`,
//! built from an affine base term and two phase-shifted oscillators.
//! Values are normalized into `[0, 1]` and then mapped to a color by
//! linear interpolation between two fixed endpoints.

use crate::types::Color;
use image::Rgb;

/// Computes the normalized pattern value for one grid cell.
///
/// The field combines an affine base term with a sine and a cosine
/// oscillator at fixed weights:
///
/// ```text
/// base  = (row + col) * 0.1
/// noise = |row - col| * 0.2 + row * 0.3 + col * 0.4 + time_factor * 0.5
/// value = ((sin(base + noise) * 0.5 + cos(noise * 1.5) * 0.5) + 1) / 2
/// ```
///
/// The `time_factor` term makes the field evolve across animation
/// frames. Because both oscillators lie in `[-1, 1]`, the result is
/// always in `[0, 1]` for any input.
///
/// ### Parameters
/// - `row`, `col` - Cell coordinates in the grid.
/// - `time_factor` - Per-frame scalar, `frame / num_frames` in `[0, 1)`.
pub fn pattern_value(row: u32, col: u32, time_factor: f64) -> f64 {
    let row = f64::from(row);
    let col = f64::from(col);

    let base = (row + col) * 0.1;
    let noise = (row - col).abs() * 0.2 + row * 0.3 + col * 0.4 + time_factor * 0.5;

    let combined = (base + noise).sin() * 0.5 + (noise * 1.5).cos() * 0.5;
    (combined + 1.0) / 2.0
}

/// Maps a normalized pattern value to a color between two endpoints.
///
/// Each channel is linearly interpolated from `start` to `end` and
/// clamped to the display range `[0, 255]`, so values outside `[0, 1]`
/// overshoot past the endpoint colors until each channel saturates at
/// `0` or `255`.
///
/// `value_to_color(0.0, ..)` is exactly `start` and
/// `value_to_color(1.0, ..)` is exactly `end`.
pub fn value_to_color(value: f64, start: Color, end: Color) -> Color {
    let channel = |i: usize| {
        let s = f64::from(start[i]);
        let e = f64::from(end[i]);
        (s + (e - s) * value).clamp(0.0, 255.0) as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}
