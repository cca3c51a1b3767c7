//! File-backed render configuration.
//!
//! Every field is optional in the TOML file; missing values fall back to the
//! defaults below.
//!
//! ```toml
//! width = 800
//! height = 800
//! max_iterations = 500
//! colour_map = "sine-hue"
//! grid_mapping = "aspect-locked"
//!
//! [viewport]
//! x_min = -2.0
//! x_max = 1.0
//! y_min = -1.5
//! y_max = 1.5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::actions::render_frame::render_frame::RenderSettings;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::DEFAULT_MAX_ITERATIONS;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::maps::sine_hue::{
    DEFAULT_LIGHTNESS, DEFAULT_SATURATION,
};
use crate::core::util::pixel_to_complex_coords::GridMapping;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub viewport: ViewportConfig,
    pub max_iterations: u32,
    pub colour_map: MandelbrotColourMapKinds,
    pub saturation: f64,
    pub lightness: f64,
    pub grid_mapping: GridMapping,
    pub parallel: bool,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            viewport: ViewportConfig::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map: MandelbrotColourMapKinds::default(),
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            grid_mapping: GridMapping::default(),
            parallel: true,
            output: PathBuf::from("mandelbrot.ppm"),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn home_viewport(&self) -> Result<Viewport, ViewportError> {
        let ViewportConfig {
            x_min,
            x_max,
            y_min,
            y_max,
        } = self.viewport;

        Viewport::new(x_min, x_max, y_min, y_max)
    }

    pub fn resolution(&self) -> Result<Resolution, ViewportError> {
        Resolution::new(self.width, self.height)
    }

    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            max_iterations: self.max_iterations,
            colour_map: self.colour_map,
            saturation: self.saturation,
            lightness: self.lightness,
            grid_mapping: self.grid_mapping,
            parallel: self.parallel,
        }
    }
}
