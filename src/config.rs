//! Window and smoothing settings.
//!
//! Everything has a default, so a config file only needs the fields it wants
//! to change:
//!
//! ```json
//! { "window": { "width": 800, "height": 600 }, "filter": { "kind": "blur" } }
//! ```

use crate::error::Error;
use crate::filter::{CrossBlur, LineCoverage, PostFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when no path is given on the command line.
pub const CONFIG_ENV: &str = "POLYFILL_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    /// Frames per second the event loop is throttled to.
    pub target_fps: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Polygon Fill".to_string(), width: 1280, height: 720, target_fps: 60 }
    }
}

/// Which smoothing runs on the "F" key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Redraw edges with weighted two-pixel coverage.
    #[default]
    Coverage,
    /// 3x3 weighted blur of the whole canvas.
    Blur,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub kind: FilterKind,
    /// Total weight per coverage step (only used by `coverage`).
    pub intensity: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { kind: FilterKind::default(), intensity: LineCoverage::default().intensity }
    }
}

impl FilterConfig {
    pub fn build(&self) -> Box<dyn PostFilter> {
        match self.kind {
            FilterKind::Coverage => Box::new(LineCoverage { intensity: self.intensity }),
            FilterKind::Blur => Box::new(CrossBlur),
        }
    }
}

impl Config {
    /// Resolve the config: explicit path, else `$POLYFILL_CONFIG`, else defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self, Error> {
        match path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(p) => Self::from_file(&p),
            None => {
                log::info!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
        log::info!("loading config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !self.filter.intensity.is_finite() || self.filter.intensity <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "filter intensity must be a positive number, got {}",
                self.filter.intensity
            )));
        }
        Ok(())
    }
}
