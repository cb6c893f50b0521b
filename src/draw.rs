// Window + presentation.
// Visual effects provided here:
// 1) A resizable window that shows the canvas.
// 2) Mouse clicks / F E C keys / resizes turned into canvas events.
// 3) A crosshair that follows your mouse (drawn on the presented copy only,
//    so it never becomes a fill boundary).

use crate::canvas::{Button, Command, InputEvent};
use crate::error::Error;
use crate::raster::Line;
use crate::types::{Color, FrameBuffer, Point, grid_index};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};

/// Physical keys for each canvas command.
const KEYMAP: [(Key, Command); 3] = [(Key::F, Command::Smooth), (Key::E, Command::Redraw), (Key::C, Command::Clear)];

/// What actually goes to minifb: one 0x00RRGGBB word per pixel.
pub struct Screen {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height] }
    }

    /// Copy the float canvas in, clamping and rounding each channel to 8 bits.
    pub fn load(&mut self, fb: &FrameBuffer) {
        self.width = fb.width;
        self.height = fb.height;
        self.pixels.clear();
        self.pixels.extend(fb.pixels.iter().map(|&c| pack_0rgb(c)));
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = grid_index(self.width, self.height, x, y) {
            self.pixels[i] = color;
        }
    }
}

#[inline]
pub fn pack_0rgb(c: Color) -> u32 {
    let [r, g, b] = c.0.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u32);
    (r << 16) | (g << 8) | b
}

pub struct Drawer {
    window: Window,               // the on-screen window you see
    size: (usize, usize),         // last size we told the canvas about
    left_was_down: bool,
    right_was_down: bool,
    title: String,
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, scale_mode: ScaleMode::UpperLeft, ..WindowOptions::default() };
        let mut window =
            Window::new(title, width, height, options).map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self {
            window,
            size: (width, height),
            left_was_down: false,
            right_was_down: false,
            title: title.to_string(),
        })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, screen: &Screen) -> Result<(), Error> {
        self.window
            .update_with_buffer(&screen.pixels, screen.width, screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in canvas pixels, None when outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x.floor() as i32, y.floor() as i32))
    }

    /// Only rewrites the title when it actually changed.
    pub fn set_status(&mut self, status: &str) {
        if self.title != status {
            self.title = status.to_string();
            self.window.set_title(status);
        }
    }

    /// Everything that happened since the last frame, in canvas terms.
    /// Clicks fire once per press, not every frame the button is held.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let (w, h) = self.window.get_size();
        if (w, h) != self.size {
            if w == 0 || h == 0 {
                log::warn!("ignoring {w}x{h} window size (minimized?)");
            } else {
                self.size = (w, h);
                events.push(InputEvent::Resize { width: w, height: h });
            }
        }

        let left = self.window.get_mouse_down(MouseButton::Left);
        let right = self.window.get_mouse_down(MouseButton::Right);
        if let Some(at) = self.mouse_pos() {
            if left && !self.left_was_down {
                events.push(InputEvent::PointerDown { button: Button::Left, at });
            }
            if right && !self.right_was_down {
                events.push(InputEvent::PointerDown { button: Button::Right, at });
            }
        }
        self.left_was_down = left;
        self.right_was_down = right;

        for (key, command) in KEYMAP {
            if self.window.is_key_pressed(key, KeyRepeat::No) {
                events.push(InputEvent::KeyPress(command));
            }
        }
        events
    }
}

/// Draw a small crosshair centered at `c`, with a gap in the middle.
/// Visual: a "+" follows your mouse.
pub fn draw_crosshair(screen: &mut Screen, c: Point, size: i32, color: u32) {
    let arms = [
        ((c.x - size, c.y), (c.x - 2, c.y)),
        ((c.x + 2, c.y), (c.x + size, c.y)),
        ((c.x, c.y - size), (c.x, c.y - 2)),
        ((c.x, c.y + 2), (c.x, c.y + size)),
    ];
    for (from, to) in arms {
        for p in Line::new(from.into(), to.into()) {
            screen.put(p.x, p.y, color);
        }
    }
    screen.put(c.x, c.y, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BACKGROUND, FILL, INK};
    use image::Rgb;

    #[test]
    fn packs_channels_to_0rgb() {
        assert_eq!(pack_0rgb(BACKGROUND), 0x00FF_FFFF);
        assert_eq!(pack_0rgb(INK), 0);
        assert_eq!(pack_0rgb(FILL), 0x0000_00FF);
        assert_eq!(pack_0rgb(Rgb([0.5, 0.0, 0.0])), 128 << 16);
        // out-of-range blends clamp instead of wrapping
        assert_eq!(pack_0rgb(Rgb([1.5, -0.2, 0.0])), 0x00FF_0000);
    }

    #[test]
    fn screen_follows_canvas_size() {
        let mut fb = FrameBuffer::new(3, 2, BACKGROUND);
        fb.put(2, 1, INK);
        let mut screen = Screen::new(10, 10);
        screen.load(&fb);
        assert_eq!((screen.width, screen.height), (3, 2));
        assert_eq!(screen.pixels.len(), 6);
        assert_eq!(screen.pixels[5], 0);
        assert_eq!(screen.pixels[0], 0x00FF_FFFF);
    }

    #[test]
    fn crosshair_is_clipped_and_gapped() {
        let mut screen = Screen::new(20, 20);
        draw_crosshair(&mut screen, Point::new(1, 10), 5, 7);
        assert_eq!(screen.pixels[10 * 20 + 1], 7); // centre dot
        assert_eq!(screen.pixels[10 * 20 + 2], 0); // gap
        assert_eq!(screen.pixels[10 * 20 + 6], 7); // right arm tip
        assert_eq!(screen.pixels[5 * 20 + 1], 7); // top arm tip
        assert_eq!(screen.pixels.iter().filter(|&&p| p == 7).count(), 1 + 4 + 4 + 4);
    }

    #[test]
    fn crosshair_near_far_corner_stays_in_buffer() {
        let mut screen = Screen::new(6, 4);
        draw_crosshair(&mut screen, Point::new(5, 3), 4, 9);
        assert_eq!(screen.pixels.len(), 24);
        assert_eq!(screen.pixels[3 * 6 + 5], 9);
        // left arm (1..=3, 3) and top arm (5, 0..=1) only
        assert_eq!(screen.pixels.iter().filter(|&&p| p == 9).count(), 1 + 3 + 2);
    }
}
