// Seeded 4-connected flood fill bounded by color.
// Visual: right-click inside a closed outline and the interior turns blue.

use crate::types::{BACKGROUND, Color, FrameBuffer, Point};

const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Recolor every background pixel reachable from `seed` through up/down/left/right
/// steps. Anything that isn't background is a wall. Returns how many pixels changed.
///
/// A seed outside the buffer, or sitting on a non-background pixel, fills nothing.
/// Uses an explicit stack so huge regions can't blow the call stack.
pub fn seed_fill(fb: &mut FrameBuffer, seed: Point, fill: Color) -> usize {
    if fill == BACKGROUND {
        return 0; // would never terminate: every recolored pixel stays fillable
    }
    match fb.get(seed.x, seed.y) {
        Some(c) if c == BACKGROUND => {}
        _ => return 0,
    }

    let mut stack = vec![seed];
    let mut filled = 0;

    while let Some(p) = stack.pop() {
        let Some(idx) = fb.index(p.x, p.y) else { continue };
        // Pushed twice before being visited: already done.
        if fb.pixels[idx] != BACKGROUND {
            continue;
        }
        fb.pixels[idx] = fill;
        filled += 1;

        for (ox, oy) in NEIGHBOURS {
            let (nx, ny) = (p.x + ox, p.y + oy);
            if fb.get(nx, ny) == Some(BACKGROUND) {
                stack.push(Point::new(nx, ny));
            }
        }
    }

    log::trace!("seed_fill from ({}, {}) recolored {filled} px", seed.x, seed.y);
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::draw_polygon;
    use crate::types::{FILL, INK, Polygon};
    use test_log::test;

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> Polygon {
        [(x0, y0), (x1, y0), (x1, y1), (x0, y1)].into_iter().map(Point::from).collect()
    }

    #[test]
    fn empty_buffer_fills_everything() {
        for seed in [Point::new(0, 0), Point::new(6, 4), Point::new(9, 7)] {
            let mut fb = FrameBuffer::new(10, 8, BACKGROUND);
            assert_eq!(seed_fill(&mut fb, seed, FILL), 80);
            assert!(fb.pixels.iter().all(|&p| p == FILL));
        }
    }

    #[test]
    fn inside_square_fills_only_interior() {
        let mut fb = FrameBuffer::new(12, 12, BACKGROUND);
        draw_polygon(&mut fb, &square(2, 2, 8, 8), INK);
        let before = fb.clone();

        let n = seed_fill(&mut fb, Point::new(5, 5), FILL);
        assert_eq!(n, 5 * 5);

        for y in 0..12 {
            for x in 0..12 {
                let interior = (3..8).contains(&x) && (3..8).contains(&y);
                let got = fb.get(x, y).unwrap();
                if interior {
                    assert_eq!(got, FILL, "({x},{y}) should be filled");
                } else {
                    assert_eq!(got, before.get(x, y).unwrap(), "({x},{y}) should be untouched");
                }
            }
        }
    }

    #[test]
    fn outside_square_leaves_interior_alone() {
        let mut fb = FrameBuffer::new(12, 12, BACKGROUND);
        draw_polygon(&mut fb, &square(2, 2, 8, 8), INK);
        seed_fill(&mut fb, Point::new(0, 11), FILL);
        assert_eq!(fb.get(5, 5), Some(BACKGROUND));
        assert_eq!(fb.get(2, 2), Some(INK));
        assert_eq!(fb.get(11, 0), Some(FILL));
    }

    #[test]
    fn seed_on_boundary_is_a_no_op() {
        let mut fb = FrameBuffer::new(12, 12, BACKGROUND);
        draw_polygon(&mut fb, &square(2, 2, 8, 8), INK);
        let before = fb.clone();
        assert_eq!(seed_fill(&mut fb, Point::new(2, 5), FILL), 0);
        assert_eq!(fb, before);
    }

    #[test]
    fn seed_outside_buffer_is_a_no_op() {
        let mut fb = FrameBuffer::new(4, 4, BACKGROUND);
        assert_eq!(seed_fill(&mut fb, Point::new(4, 0), FILL), 0);
        assert_eq!(seed_fill(&mut fb, Point::new(-1, 2), FILL), 0);
        assert!(fb.pixels.iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn fill_does_not_wrap_across_rows() {
        // A wall in column 0 must not leak into the previous row's last column.
        let mut fb = FrameBuffer::new(5, 3, BACKGROUND);
        for y in 0..3 {
            fb.put(3, y, INK);
        }
        seed_fill(&mut fb, Point::new(0, 1), FILL);
        for y in 0..3 {
            assert_eq!(fb.get(4, y), Some(BACKGROUND));
        }
    }

    #[test]
    fn diagonal_gaps_block_four_connected_fill() {
        // A diagonal line is 8-connected, which is enough to stop a 4-connected fill.
        let mut fb = FrameBuffer::new(6, 6, BACKGROUND);
        crate::raster::draw_line(&mut fb, Point::new(0, 5), Point::new(5, 0), INK);
        seed_fill(&mut fb, Point::new(0, 0), FILL);
        assert_eq!(fb.get(5, 5), Some(BACKGROUND));
        assert_eq!(fb.get(1, 1), Some(FILL));
    }
}
