use glam::Vec2;

/// The drawing agent's pose: a position and a facing angle.
///
/// Headings are in degrees, counterclockwise, with `0.0` pointing along
/// the positive x axis and `90.0` pointing up. `Cursor` is `Copy` so a
/// caller can snapshot the pose and restore it later by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub pos: Vec2,
    pub heading: f32,
}

impl Cursor {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self { pos, heading }
    }

    /// Unit vector pointing along the current heading.
    pub fn direction(&self) -> Vec2 {
        let rad = self.heading.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }
}

/// A line drawn by one pen-down forward move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// A turtle-graphics path recorder.
///
/// The turtle owns a [`Cursor`] and a pen flag. Moving forward with the
/// pen down appends a [`Segment`]; moving with the pen up only changes
/// the pose. Nothing is rasterized here — the recorded segments are
/// drawn later by whatever front end consumes them.
#[derive(Debug)]
pub struct Turtle {
    cursor: Cursor,
    pen_down: bool,
    segments: Vec<Segment>,
}

impl Turtle {
    /// Creates a turtle at the origin, facing along positive x, pen down.
    pub fn new() -> Self {
        Self {
            cursor: Cursor::new(Vec2::ZERO, 0.0),
            pen_down: true,
            segments: Vec::new(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Restores a previously snapshotted pose.
    pub fn restore(&mut self, saved: Cursor) {
        self.cursor = saved;
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    /// Moves `length` units along the current heading.
    ///
    /// Records a [`Segment`] if the pen is down.
    pub fn forward(&mut self, length: f32) {
        let from = self.cursor.pos;
        let to = from + self.cursor.direction() * length;
        self.cursor.pos = to;
        if self.pen_down {
            self.segments.push(Segment { from, to });
        }
    }

    /// Rotates the heading counterclockwise by `degrees`.
    pub fn turn_left(&mut self, degrees: f32) {
        self.cursor.heading += degrees;
    }

    /// Rotates the heading clockwise by `degrees`.
    pub fn turn_right(&mut self, degrees: f32) {
        self.cursor.heading -= degrees;
    }

    /// Teleports to `pos` without changing the heading.
    ///
    /// Never records a segment, regardless of pen state.
    pub fn goto(&mut self, pos: Vec2) {
        self.cursor.pos = pos;
    }

    pub fn set_heading(&mut self, degrees: f32) {
        self.cursor.heading = degrees;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}
