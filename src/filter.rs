// Smoothing ("F" key). Two interchangeable strategies:
// • LineCoverage: redraw every edge with two weighted pixels per step (soft edges, fill dropped).
// • CrossBlur: 3x3 weighted average over whatever is on the canvas right now.

use crate::error::Error;
use crate::types::{BACKGROUND, Color, FrameBuffer, INK, Point, Polygon};
use image::{Pixel, Rgb};

/// One way of smoothing the rasterized canvas.
pub trait PostFilter {
    /// Short label for logs and the window title.
    fn name(&self) -> &'static str;

    /// Smooth `fb` in place. `polygon` is the outline that produced it.
    fn apply(&self, polygon: &Polygon, fb: &mut FrameBuffer) -> Result<(), Error>;
}

/* ------------------------------ weighted line coverage ------------------------------ */

/// One step of a coverage walk: the pixel nearest the line and its neighbour on
/// the side the line leans toward. The two weights always add up to `intensity / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageStep {
    pub primary: Point,
    pub primary_weight: f64,
    pub companion: Point,
    pub companion_weight: f64,
}

/// Integer-stepped line that carries a running coverage value `e`.
///
/// Per step along the major axis: if `e < threshold` the minor coordinate stays
/// and `e` grows by `slope`; otherwise the minor coordinate advances and `e`
/// drops by `threshold`. The ideal line sits `e / intensity - 0.5` pixels past the
/// current minor coordinate, in the minor step direction.
#[derive(Debug, Clone)]
pub struct CoverageLine {
    y_major: bool,
    major: i32,
    minor: i32,
    major_end: i32,
    major_step: i32,
    minor_step: i32,
    slope: f64,
    threshold: f64,
    intensity: f64,
    e: f64,
    started: bool,
}

impl CoverageLine {
    pub fn new(from: Point, to: Point, intensity: f64) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let y_major = dy > dx;
        let slope = match (y_major, dx.max(dy)) {
            (_, 0) => 0.0,
            (true, _) => intensity * dx as f64 / dy as f64,
            (false, _) => intensity * dy as f64 / dx as f64,
        };

        // Direction normalization: which endpoint we start from depends on the
        // octant, not just on the major axis running backwards.
        let y_backward = from.y > to.y;
        let x_flip = if y_major { from.x < to.x } else { from.x > to.x };
        let (start, end) = if y_backward != x_flip { (to, from) } else { (from, to) };

        let step_x = if start.x > end.x { -1 } else { 1 };
        let step_y = if start.y > end.y { -1 } else { 1 };
        let (major, minor, major_end, major_step, minor_step) = if y_major {
            (start.y, start.x, end.y, step_y, step_x)
        } else {
            (start.x, start.y, end.x, step_x, step_y)
        };

        Self {
            y_major,
            major,
            minor,
            major_end,
            major_step,
            minor_step,
            slope,
            threshold: intensity - slope,
            intensity,
            e: intensity / 2.0,
            started: false,
        }
    }

    #[inline]
    fn point(&self, major: i32, minor: i32) -> Point {
        if self.y_major { Point::new(minor, major) } else { Point::new(major, minor) }
    }

    fn step(&self) -> CoverageStep {
        let offset = self.e / self.intensity - 0.5; // in [-0.5, 0.5)
        let side = if offset < 0.0 { -self.minor_step } else { self.minor_step };
        let scale = 0.5 * self.intensity;
        CoverageStep {
            primary: self.point(self.major, self.minor),
            primary_weight: (1.0 - offset.abs()) * scale,
            companion: self.point(self.major, self.minor + side),
            companion_weight: offset.abs() * scale,
        }
    }
}

impl Iterator for CoverageLine {
    type Item = CoverageStep;

    fn next(&mut self) -> Option<CoverageStep> {
        if !self.started {
            self.started = true;
            return Some(self.step());
        }
        if self.major_step * self.major >= self.major_step * self.major_end {
            return None;
        }

        self.major += self.major_step;
        if self.e < self.threshold {
            self.e += self.slope;
        } else {
            self.minor += self.minor_step;
            self.e -= self.threshold;
        }
        Some(self.step())
    }
}

/// Blend `weight` of `ink` over `background` into (x, y), per channel, keeping
/// whichever value is closer to the ink. Overlapping edges only ever darken.
/// Weights past 1 saturate at solid ink.
fn cover(fb: &mut FrameBuffer, x: i32, y: i32, weight: f64, ink: Color, background: Color) {
    let Some(idx) = fb.index(x, y) else { return };
    let w = weight.clamp(0.0, 1.0) as f32;
    let target = background.map2(&ink, |bg, fg| bg + (fg - bg) * w);
    let current = fb.pixels[idx];

    let mut out = current;
    for ((o, &t), &k) in out.channels_mut().iter_mut().zip(target.channels()).zip(ink.channels()) {
        if (t - k).abs() < (*o - k).abs() {
            *o = t;
        }
    }
    fb.pixels[idx] = out;
}

/// Draw one edge with two coverage-weighted pixels per step.
pub fn draw_coverage_line(fb: &mut FrameBuffer, from: Point, to: Point, intensity: f64, ink: Color, background: Color) {
    for s in CoverageLine::new(from, to, intensity) {
        cover(fb, s.primary.x, s.primary.y, s.primary_weight, ink, background);
        cover(fb, s.companion.x, s.companion.y, s.companion_weight, ink, background);
    }
}

/// Variant A: throw away the hard edges (and any fill) and redraw the outline
/// with weighted coverage.
#[derive(Debug, Clone, Copy)]
pub struct LineCoverage {
    pub intensity: f64,
}

impl Default for LineCoverage {
    fn default() -> Self {
        Self { intensity: 2.0 }
    }
}

impl PostFilter for LineCoverage {
    fn name(&self) -> &'static str {
        "coverage"
    }

    fn apply(&self, polygon: &Polygon, fb: &mut FrameBuffer) -> Result<(), Error> {
        fb.clear(BACKGROUND);
        for (from, to) in polygon.edges() {
            draw_coverage_line(fb, from, to, self.intensity, INK, BACKGROUND);
        }
        Ok(())
    }
}

/* ------------------------------------ cross blur ------------------------------------ */

/// 3x3 taps: centre 1/4, orthogonal 1/8 each, diagonal 1/16 each. Sum is exactly 1.
pub const CROSS_TAPS: [(i32, i32, f32); 9] = [
    (0, 0, 1.0 / 4.0),
    (-1, 0, 1.0 / 8.0),
    (0, -1, 1.0 / 8.0),
    (1, 0, 1.0 / 8.0),
    (0, 1, 1.0 / 8.0),
    (-1, -1, 1.0 / 16.0),
    (1, 1, 1.0 / 16.0),
    (1, -1, 1.0 / 16.0),
    (-1, 1, 1.0 / 16.0),
];

/// Weighted 3x3 average of `src` into `dst`. Samples that fall off the canvas
/// read as `background`. Output channels are clamped to [0,1].
pub fn cross_blur(src: &FrameBuffer, dst: &mut FrameBuffer, background: Color) -> Result<(), Error> {
    if !src.same_size(dst) {
        return Err(Error::SizeMismatch {
            what: "cross_blur",
            expected_w: src.width,
            expected_h: src.height,
            got_w: dst.width,
            got_h: dst.height,
        });
    }

    for y in 0..src.height as i32 {
        for x in 0..src.width as i32 {
            let mut acc = [0.0f32; 3];
            for &(ox, oy, w) in &CROSS_TAPS {
                let sample = src.get(x + ox, y + oy).unwrap_or(background);
                for (a, c) in acc.iter_mut().zip(sample.0) {
                    *a += c * w;
                }
            }
            dst.put(x, y, Rgb(acc.map(|c| c.clamp(0.0, 1.0))));
        }
    }
    Ok(())
}

/// Variant B: blur the current canvas (edges and fill alike).
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossBlur;

impl PostFilter for CrossBlur {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn apply(&self, _polygon: &Polygon, fb: &mut FrameBuffer) -> Result<(), Error> {
        let snapshot = fb.clone();
        cross_blur(&snapshot, fb, BACKGROUND)
    }
}
