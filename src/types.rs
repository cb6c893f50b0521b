// Core types shared by the rasterizer, the filler and the filters.
//
// Coordinates: origin at the top-left, y grows downward, pixel (x, y) lives at
// `y * width + x`. This matches the window's mouse coordinates, so nothing
// flips anywhere.

use image::Rgb;

/// One pixel: three float channels, nominally in [0,1].
/// Weighted blending may push a channel out of range; it's clamped on present.
pub type Color = Rgb<f32>;

pub const BACKGROUND: Color = Rgb([1.0, 1.0, 1.0]); // white canvas
pub const INK: Color = Rgb([0.0, 0.0, 0.0]);        // polygon edges
pub const FILL: Color = Rgb([0.0, 0.0, 1.0]);       // seed fill

/// Integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Closed polygon: the last point implicitly connects back to the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in traversal order, closing edge last.
    /// Fewer than two points have no edges at all.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.points.len() < 2 { 0 } else { self.points.len() };
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

/// Row-major index of (x, y) in a `width` x `height` grid, None when outside.
/// Shared by the float canvas and the packed screen buffer.
#[inline]
pub fn grid_index(width: usize, height: usize, x: i32, y: i32) -> Option<usize> {
    let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
    (x < width && y < height).then(|| y * width + x)
}

/// The float canvas the core draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,     // canvas width in pixels
    pub height: usize,    // canvas height in pixels
    pub pixels: Vec<Color>, // length = width * height, row-major
}

impl FrameBuffer {
    /// New buffer, every pixel set to `color`.
    pub fn new(width: usize, height: usize, color: Color) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Linear index of (x, y), or None when outside the buffer.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        grid_index(self.width, self.height, x, y)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel if (x, y) is inside bounds; silently skip otherwise.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_close_the_loop() {
        let poly: Polygon = [(0, 0), (4, 0), (4, 4)].into_iter().map(Point::from).collect();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(4, 4), Point::new(0, 0)));
    }

    #[test]
    fn degenerate_polygons_have_no_edges() {
        let mut poly = Polygon::new();
        assert_eq!(poly.edges().count(), 0);
        poly.push(Point::new(3, 3));
        assert_eq!(poly.edges().count(), 0);
        poly.push(Point::new(5, 3));
        assert_eq!(poly.edges().count(), 2);
    }

    #[test]
    fn index_is_row_major_and_bounds_checked() {
        let fb = FrameBuffer::new(4, 3, BACKGROUND);
        assert_eq!(fb.index(0, 0), Some(0));
        assert_eq!(fb.index(3, 2), Some(11));
        assert_eq!(fb.index(4, 0), None);
        assert_eq!(fb.index(0, 3), None);
        assert_eq!(fb.index(-1, 1), None);
    }

    #[test]
    fn grid_index_rejects_every_side() {
        assert_eq!(grid_index(5, 2, 4, 1), Some(9));
        assert_eq!(grid_index(5, 2, 5, 1), None);
        assert_eq!(grid_index(5, 2, 4, 2), None);
        assert_eq!(grid_index(5, 2, -1, 0), None);
        assert_eq!(grid_index(5, 2, 0, -1), None);
        assert_eq!(grid_index(0, 0, 0, 0), None);
    }

    #[test]
    fn put_outside_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2, BACKGROUND);
        fb.put(5, 5, INK);
        fb.put(-1, 0, INK);
        assert!(fb.pixels.iter().all(|&p| p == BACKGROUND));
        fb.put(1, 1, INK);
        assert_eq!(fb.get(1, 1), Some(INK));
    }
}
