//! Core library for the two recursive-art demo pipelines.
//!
//! Main components:
//! - [`turtle`] — drawing cursor and line-segment recorder.
//! - [`fractal`] — recursive fractal-tree drawer.
//! - [`pattern`] — per-cell pattern values and color mapping.
//! - [`frames`] — frame rasterization and PNG output for the grid animation.
//! - [`config`] — configuration for both pipelines.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod fractal;
pub mod frames;
pub mod pattern;
pub mod turtle;
pub mod types;
