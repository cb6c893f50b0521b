// Integer Bresenham line walker and polygon outline drawing.
// Visual: each click closes the outline again with 1-pixel black edges.

use crate::types::{Color, FrameBuffer, Point, Polygon};

#[inline]
fn sign(v: i32) -> i32 {
    v.signum()
}

/// Walks the pixels of a segment from `from` to `to`, both endpoints included.
///
/// Pure integer stepping with an error accumulator. Consecutive points differ
/// by at most 1 on each axis, and the walk ends exactly on `to`.
#[derive(Debug, Clone)]
pub struct Line {
    x: i32,
    y: i32,
    end: Point,
    dx: i32,
    dy: i32,
    error: i32,
    done: bool,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        Self { x: from.x, y: from.y, end: to, dx, dy, error: dx - dy, done: false }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let here = Point::new(self.x, self.y);
        if here == self.end {
            self.done = true;
            return Some(here);
        }

        let err2 = 2 * self.error;
        if err2 > -self.dy {
            self.error -= self.dy;
            self.x += sign(self.end.x - self.x);
        }
        if err2 < self.dx {
            self.error += self.dx;
            self.y += sign(self.end.y - self.y);
        }
        Some(here)
    }
}

/// Draw a 1-pixel line; points outside the buffer are skipped.
pub fn draw_line(fb: &mut FrameBuffer, from: Point, to: Point, color: Color) {
    for p in Line::new(from, to) {
        fb.put(p.x, p.y, color);
    }
}

/// Draw every edge of the polygon, closing edge included.
pub fn draw_polygon(fb: &mut FrameBuffer, polygon: &Polygon, color: Color) {
    for (from, to) in polygon.edges() {
        draw_line(fb, from, to, color);
    }
}
