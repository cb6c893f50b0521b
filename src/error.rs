// Error type for the demo. Every variant states *where* things went wrong.
// The rasterizer/filler never fail; only the window, config and filter
// plumbing can.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    #[error("Config read error ({}): {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Two buffers that must share dimensions don't.
    #[error("Size mismatch in {what}: {expected_w}x{expected_h} vs {got_w}x{got_h}")]
    SizeMismatch {
        what: &'static str,
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },
}
