//! Recursive fractal-tree drawer.
//!
//! The tree is a binary recursion over [`Turtle`] moves: draw a branch,
//! then grow a left and a right child at a reduced length, restoring the
//! cursor between and after the children so siblings share the same
//! base pose. The recursion is bounded purely by the depth budget.

use crate::{
    config::TreeConfig,
    turtle::{Segment, Turtle},
};
use glam::Vec2;

/// Recursively draws a fractal tree from the turtle's current pose.
///
/// For `depth == 0` this is a no-op. Otherwise it:
///
/// 1. Moves forward by `length`, recording one branch segment.
/// 2. Turns left by `cfg.branch_angle` and recurses with
///    `length * cfg.scale` and `depth - 1`.
/// 3. Restores the cursor to the branch tip (pen lifted while
///    repositioning), turns right by `cfg.branch_angle`, and recurses
///    for the right child.
/// 4. Restores the cursor to the pose it had on entry, so the caller
///    observes no net change in position or heading.
///
/// A call with depth `d` records exactly `2^d - 1` segments.
///
/// ### Parameters
/// - `t` - The turtle recording the drawn path.
/// - `cfg` - Branching angle and length scale.
/// - `length` - Length of the branch drawn at this level.
/// - `depth` - Remaining levels of subdivision; the recursion
///   terminates when it reaches zero.
pub fn draw_tree(t: &mut Turtle, cfg: &TreeConfig, length: f32, depth: u32) {
    if depth == 0 {
        return;
    }

    let base = t.cursor();
    t.forward(length);
    let tip = t.cursor();

    // Left child.
    t.turn_left(cfg.branch_angle);
    draw_tree(t, cfg, length * cfg.scale, depth - 1);

    // Back to the branch tip for the right child.
    t.pen_up();
    t.restore(tip);
    t.pen_down();

    // Right child.
    t.turn_right(cfg.branch_angle);
    draw_tree(t, cfg, length * cfg.scale, depth - 1);

    // Leave the cursor exactly where the caller put it.
    t.pen_up();
    t.restore(base);
    t.pen_down();
}

/// Draws a complete tree rooted at the bottom center of the scene.
///
/// Walks a fresh turtle to `(0, -250)` with the pen up, points it
/// straight up, and runs [`draw_tree`] from `cfg.initial_length` and
/// `cfg.depth`.
///
/// ### Returns
/// The recorded branch segments, trunk first.
pub fn plant_tree(cfg: &TreeConfig) -> Vec<Segment> {
    let mut t = Turtle::new();
    t.pen_up();
    t.goto(Vec2::new(0.0, -250.0));
    t.set_heading(90.0);
    t.pen_down();

    draw_tree(&mut t, cfg, cfg.initial_length, cfg.depth);
    t.into_segments()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn segment_count_is_two_pow_depth_minus_one() {
        for depth in 0..=6 {
            let mut t = Turtle::new();
            let cfg = TreeConfig::default();
            draw_tree(&mut t, &cfg, 100.0, depth);

            let expected = 2usize.pow(depth) - 1;
            assert_eq!(
                t.segments().len(),
                expected,
                "depth {} should draw {} branches",
                depth,
                expected
            );
        }
    }

    #[test]
    fn cursor_is_restored_after_full_recursion() {
        let mut t = Turtle::new();
        t.goto(Vec2::new(3.0, -7.0));
        t.set_heading(42.0);
        let before = t.cursor();

        let cfg = TreeConfig::default();
        draw_tree(&mut t, &cfg, 80.0, 5);

        let after = t.cursor();
        assert_relative_eq!(after.pos.x, before.pos.x, epsilon = 1e-4);
        assert_relative_eq!(after.pos.y, before.pos.y, epsilon = 1e-4);
        assert_relative_eq!(after.heading, before.heading, epsilon = 1e-4);
    }

    #[test]
    fn trunk_starts_at_bottom_center_pointing_up() {
        let cfg = TreeConfig {
            depth: 1,
            ..TreeConfig::default()
        };
        let segments = plant_tree(&cfg);

        // Depth 1 draws only the trunk.
        assert_eq!(segments.len(), 1);
        let trunk = segments[0];
        assert_eq!(trunk.from, Vec2::new(0.0, -250.0));
        assert_relative_eq!(trunk.to.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(trunk.to.y, -250.0 + cfg.initial_length, epsilon = 1e-4);
    }

    #[test]
    fn children_scale_down_by_the_configured_ratio() {
        let cfg = TreeConfig {
            depth: 2,
            scale: 0.5,
            initial_length: 100.0,
            ..TreeConfig::default()
        };
        let segments = plant_tree(&cfg);
        assert_eq!(segments.len(), 3);

        let trunk_len = (segments[0].to - segments[0].from).length();
        let left_len = (segments[1].to - segments[1].from).length();
        let right_len = (segments[2].to - segments[2].from).length();

        assert_relative_eq!(trunk_len, 100.0, epsilon = 1e-3);
        assert_relative_eq!(left_len, 50.0, epsilon = 1e-3);
        assert_relative_eq!(right_len, 50.0, epsilon = 1e-3);

        // Both children grow from the trunk tip.
        assert_relative_eq!(segments[1].from.x, segments[0].to.x, epsilon = 1e-4);
        assert_relative_eq!(segments[2].from.y, segments[0].to.y, epsilon = 1e-4);
    }

    #[test]
    fn siblings_fork_symmetrically_around_the_trunk() {
        let cfg = TreeConfig {
            depth: 2,
            ..TreeConfig::default()
        };
        let segments = plant_tree(&cfg);
        assert_eq!(segments.len(), 3);

        // With the trunk pointing straight up, the left child tips left
        // of it and the right child tips right of it by the same amount.
        let left = segments[1];
        let right = segments[2];
        assert!(left.to.x < 0.0);
        assert!(right.to.x > 0.0);
        assert_relative_eq!(left.to.x, -right.to.x, epsilon = 1e-3);
        assert_relative_eq!(left.to.y, right.to.y, epsilon = 1e-3);
    }
}
