// The drawing session: one framebuffer, one polygon, one smoothing strategy.
// Every input event goes through `Canvas::handle`; nothing here knows about windows.

use crate::error::Error;
use crate::fill::seed_fill;
use crate::filter::PostFilter;
use crate::raster::draw_polygon;
use crate::types::{BACKGROUND, FILL, FrameBuffer, INK, Point, Polygon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

/// Key actions. The window layer decides which physical keys map here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Smooth,
    Redraw,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { button: Button, at: Point },
    KeyPress(Command),
    Resize { width: usize, height: usize },
}

pub struct Canvas {
    framebuffer: FrameBuffer,
    polygon: Polygon,
    filter: Box<dyn PostFilter>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, filter: Box<dyn PostFilter>) -> Self {
        let mut canvas = Self {
            framebuffer: FrameBuffer::new(width, height, BACKGROUND),
            polygon: Polygon::new(),
            filter,
        };
        canvas.redraw();
        canvas
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn filter_name(&self) -> &'static str {
        self.filter.name()
    }

    pub fn size(&self) -> (usize, usize) {
        (self.framebuffer.width, self.framebuffer.height)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<(), Error> {
        log::debug!("event: {event:?}");
        match event {
            InputEvent::PointerDown { button: Button::Left, at } => self.add_point(at),
            InputEvent::PointerDown { button: Button::Right, at } => {
                self.fill_at(at);
            }
            InputEvent::KeyPress(Command::Smooth) => self.smooth()?,
            InputEvent::KeyPress(Command::Redraw) => self.redraw(),
            InputEvent::KeyPress(Command::Clear) => self.clear(),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
        Ok(())
    }

    /// New canvas size: fresh background buffer, polygon dropped.
    pub fn resize(&mut self, width: usize, height: usize) {
        log::info!("resize to {width}x{height}, polygon cleared");
        self.framebuffer = FrameBuffer::new(width, height, BACKGROUND);
        self.polygon.clear();
        self.redraw();
    }

    pub fn add_point(&mut self, p: Point) {
        self.polygon.push(p);
        self.redraw();
    }

    /// Redraw the outline (dropping earlier fills/smoothing), then seed-fill from `seed`.
    pub fn fill_at(&mut self, seed: Point) -> usize {
        self.redraw();
        let n = seed_fill(&mut self.framebuffer, seed, FILL);
        log::info!("fill at ({}, {}): {n} px", seed.x, seed.y);
        n
    }

    pub fn smooth(&mut self) -> Result<(), Error> {
        log::info!("smoothing with {}", self.filter.name());
        self.filter.apply(&self.polygon, &mut self.framebuffer)
    }

    pub fn redraw(&mut self) {
        self.framebuffer.clear(BACKGROUND);
        draw_polygon(&mut self.framebuffer, &self.polygon, INK);
    }

    pub fn clear(&mut self) {
        self.polygon.clear();
        self.redraw();
    }
}
