use std::path::PathBuf;

use clap::Parser;

use crate::config::{RenderConfig, ViewportConfig};
use crate::controllers::explorer::viewport_transform::ZoomGesture;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::util::pixel_to_complex_coords::GridMapping;

/// Render the Mandelbrot set with smooth hue banding and replay zoom clicks.
///
/// Flags override values read from `--config`.
#[derive(Debug, Parser)]
#[command(name = "smooth_mandelbrot", version)]
pub struct CliArgs {
    /// TOML file with render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Viewport as x_min,x_max,y_min,y_max
    #[arg(long, value_parser = parse_viewport, allow_hyphen_values = true)]
    pub viewport: Option<ViewportConfig>,

    /// Iteration cap for points that never escape
    #[arg(short = 'i', long)]
    pub max_iterations: Option<u32>,

    /// sine-hue or iteration-bands
    #[arg(long)]
    pub colour_map: Option<MandelbrotColourMapKinds>,

    /// aspect-locked or stretch
    #[arg(long)]
    pub grid_mapping: Option<GridMapping>,

    /// Compute on the calling thread only
    #[arg(long)]
    pub serial: bool,

    /// Zoom click as x,y,in or x,y,out; repeat to replay several
    #[arg(short, long = "zoom")]
    pub zooms: Vec<ZoomGesture>,

    /// Write a numbered image for every step instead of only the last view
    #[arg(long)]
    pub keep_steps: bool,

    /// Output image path (binary PPM)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_viewport(value: &str) -> Result<ViewportConfig, String> {
    let bounds = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| format!("invalid viewport '{value}': {e}"))?;

    match bounds.as_slice() {
        &[x_min, x_max, y_min, y_max] => Ok(ViewportConfig {
            x_min,
            x_max,
            y_min,
            y_max,
        }),
        _ => Err(format!("viewport needs four bounds, got {}", bounds.len())),
    }
}

impl CliArgs {
    /// Layers the flags that were given over `config`.
    #[must_use]
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(viewport) = self.viewport {
            config.viewport = viewport;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(colour_map) = self.colour_map {
            config.colour_map = colour_map;
        }
        if let Some(grid_mapping) = self.grid_mapping {
            config.grid_mapping = grid_mapping;
        }
        if self.serial {
            config.parallel = false;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }

        config
    }
}
