// What you SEE:
// • A white canvas. Left click adds a polygon vertex; the closed outline is redrawn in black.
// • Right click inside the outline: seed fill in blue.
// • F smooths (coverage redraw or blur, per config). E redraws hard edges. C clears.
// • Resizing the window starts over. ESC quits.

mod canvas;
mod config;
mod draw;
mod error;
mod fill;
mod filter;
mod raster;
mod types;

use canvas::Canvas;
use config::Config;
use draw::{Drawer, Screen, draw_crosshair};
use error::Error;
use log::{debug, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const CROSSHAIR_COLOR: u32 = 0x00_FF_CC_33; // yellow, visible on white and blue

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Config::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    info!("config: {config:?}");

    let (w, h) = (config.window.width, config.window.height);
    let mut drawer = Drawer::new(&config.window.title, w, h, config.window.target_fps)?;
    let mut canvas = Canvas::new(w, h, config.filter.build());
    let mut screen = Screen::new(w, h);

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    while drawer.is_open() && !drawer.esc_pressed() {
        for event in drawer.poll_events() {
            canvas.handle(event)?;
        }

        screen.load(canvas.framebuffer());
        if let Some(at) = drawer.mouse_pos() {
            draw_crosshair(&mut screen, at, 8, CROSSHAIR_COLOR);
        }

        drawer.set_status(&format!(
            "{} | {} points | F: {}  E: redraw  C: clear",
            config.window.title,
            canvas.polygon().len(),
            canvas.filter_name()
        ));
        drawer.present(&screen)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / now.duration_since(last_fps_time).as_secs_f32();
            debug!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed, bye");
    Ok(())
}
