//! Interactive fractal-tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the tree configuration
//! and the recorded branch path, and implements [`eframe::App`] to
//! render the tree and expose its parameters through an egui UI.

use art_core::{
    config::TreeConfig,
    fractal,
    turtle::Segment,
};
use eframe::App;
use glam::Vec2;

/// Background of the drawing area, the original scene's light blue.
const SCENE_COLOR: egui::Color32 = egui::Color32::from_rgb(173, 216, 230);

/// Branch stroke color.
const BRANCH_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 128, 0);

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The tree parameters ([`TreeConfig`]) edited live in the side panel.
/// - The recorded branch segments, rebuilt whenever the parameters change.
/// - eframe/egui callbacks for drawing and user interaction (pan/zoom).
///
/// ### Fields
/// - `cfg` - Tree parameters as currently set in the UI.
/// - `drawn_cfg` - Parameters the current `segments` were built from;
///   when it differs from `cfg`, the tree is rebuilt on the next frame.
/// - `segments` - Recorded branch path in world space.
///
/// - `stroke_width` - Branch stroke width in pixels.
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
pub struct Viewer {
    cfg: TreeConfig,
    drawn_cfg: TreeConfig,
    segments: Vec<Segment>,

    stroke_width: f32,
    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Creates a viewer with the default tree already drawn.
    ///
    /// The camera starts at a zoom that fits the default tree into an
    /// 800×600 window, with no pan.
    pub fn new() -> Self {
        let cfg = TreeConfig::default();
        let segments = fractal::plant_tree(&cfg);

        Self {
            cfg,
            drawn_cfg: cfg,
            segments,
            stroke_width: 1.5,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
        }
    }

    /// Re-records the branch path from the current configuration.
    fn rebuild(&mut self) {
        self.segments = fractal::plant_tree(&self.cfg);
        self.drawn_cfg = self.cfg;
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `zoom`, `pan`, and `rect` center.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `u32` [`egui::DragValue`].
    fn labeled_drag_u32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut u32,
        range: std::ops::RangeInclusive<u32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (redraw, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Redraw").clicked() {
                    self.rebuild();
                }

                if ui.button("Reset view").clicked() {
                    self.zoom = 1.0;
                    self.pan = egui::vec2(0.0, 0.0);
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (branch count, recursion depth).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("branches = {}", self.segments.len()));
                ui.label(format!("depth = {}", self.drawn_cfg.depth));
            });
        });
    }

    /// Builds the right-hand configuration panel for tree parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Tree");

                ui.separator();
                ui.label("Branching");
                Self::labeled_drag_f32(
                    ui,
                    "branch_angle:",
                    &mut self.cfg.branch_angle,
                    0.0..=90.0,
                    0.5,
                );
                Self::labeled_drag_f32(ui, "scale:", &mut self.cfg.scale, 0.1..=0.95, 0.01);

                ui.separator();
                ui.label("Size");
                Self::labeled_drag_f32(
                    ui,
                    "initial_length:",
                    &mut self.cfg.initial_length,
                    10.0..=300.0,
                    1.0,
                );
                Self::labeled_drag_u32(ui, "depth:", &mut self.cfg.depth, 0..=14, 1.0);

                ui.separator();
                ui.label("Stroke");
                Self::labeled_drag_f32(ui, "width:", &mut self.stroke_width, 0.5..=6.0, 0.1);

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = TreeConfig::default();
                }
            });
    }

    /// Builds the central panel where the tree is drawn and panned/zoomed.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, 0.0, SCENE_COLOR);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(0.1, 10.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Draw the recorded branch path.
            let stroke = egui::Stroke::new(self.stroke_width, BRANCH_COLOR);
            for seg in &self.segments {
                let a = self.world_to_screen(seg.from, rect);
                let b = self.world_to_screen(seg.to, rect);
                painter.line_segment([a, b], stroke);
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Rebuilds the branch path first if the configuration changed in
    /// the previous frame, then renders the control panels and the
    /// central drawing area.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.cfg != self.drawn_cfg {
            self.rebuild();
        }

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-5;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn new_viewer_draws_the_default_tree() {
        let viewer = Viewer::new();

        // Default depth 9 means 2^9 - 1 branch segments.
        assert_eq!(viewer.segments.len(), 511);
        assert_eq!(viewer.cfg, TreeConfig::default());
        assert_eq!(viewer.drawn_cfg, viewer.cfg);
    }

    #[test]
    fn rebuild_tracks_configuration_changes() {
        let mut viewer = Viewer::new();

        viewer.cfg.depth = 3;
        assert_ne!(viewer.cfg, viewer.drawn_cfg);

        viewer.rebuild();

        assert_eq!(viewer.segments.len(), 7);
        assert_eq!(viewer.drawn_cfg, viewer.cfg);
    }
}
