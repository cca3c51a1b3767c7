use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_frame::generate_frame::{GenerateFrameError, generate_frame};
use crate::core::actions::render_frame::iteration_stats::iteration_stats;
use crate::core::data::frame::{Frame, IterationStats};
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::colour_mapping::{
    factory::mandelbrot_colour_map_factory,
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::sine_hue::{DEFAULT_LIGHTNESS, DEFAULT_SATURATION},
};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{GridMapping, PixelToComplexCoordsError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(#[from] ViewportError),
    #[error("invalid render settings: {0}")]
    Settings(#[from] MandelbrotError),
    #[error("sampling failed: {0}")]
    Sampling(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    Frame(#[from] GenerateFrameError),
}

/// Everything about a render except where it looks and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub max_iterations: u32,
    pub colour_map: MandelbrotColourMapKinds,
    pub saturation: f64,
    pub lightness: f64,
    pub grid_mapping: GridMapping,
    pub parallel: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map: MandelbrotColourMapKinds::default(),
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            grid_mapping: GridMapping::default(),
            parallel: true,
        }
    }
}

/// Turns viewports into frames. Holds no per-frame state.
pub struct Renderer {
    settings: RenderSettings,
    colour_map: Box<dyn MandelbrotColourMap>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("settings", &self.settings)
            .field("colour_map", &self.colour_map.kind())
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        let settings = RenderSettings::default();

        Self {
            colour_map: colour_map_for(&settings),
            settings,
        }
    }
}

fn colour_map_for(settings: &RenderSettings) -> Box<dyn MandelbrotColourMap> {
    mandelbrot_colour_map_factory(settings.colour_map, settings.saturation, settings.lightness)
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Result<Self, RenderError> {
        if settings.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations.into());
        }

        Ok(Self {
            colour_map: colour_map_for(&settings),
            settings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Renders `viewport` at `resolution` and returns the finished frame.
    ///
    /// Runs to completion before returning; no partially filled frame is ever
    /// handed out.
    pub fn render(&self, viewport: Viewport, resolution: Resolution) -> Result<Frame, RenderError> {
        debug!(
            "rendering x [{}, {}] y [{}, {}] at {}x{} ({}, {}, {} iterations)",
            viewport.x_min(),
            viewport.x_max(),
            viewport.y_min(),
            viewport.y_max(),
            resolution.width(),
            resolution.height(),
            self.settings.grid_mapping,
            self.colour_map.display_name(),
            self.settings.max_iterations
        );

        let algorithm = MandelbrotAlgorithm::new(
            resolution,
            viewport,
            self.settings.grid_mapping,
            self.settings.max_iterations,
        )?;

        let start = Instant::now();
        let samples = if self.settings.parallel {
            generate_fractal_parallel_rayon(&algorithm)?
        } else {
            generate_fractal_serial(&algorithm)?
        };
        let sample_duration = start.elapsed();

        // a valid resolution always has at least one pixel
        let stats = iteration_stats(&samples).unwrap_or(IterationStats { min: 0, max: 0 });
        let frame = generate_frame(&samples, &self.colour_map, resolution, stats)?;

        info!(
            "rendered {}x{} in {:?} (sampling {:?}), iterations {}..={}",
            resolution.width(),
            resolution.height(),
            start.elapsed(),
            sample_duration,
            stats.min,
            stats.max
        );

        Ok(frame)
    }

    /// Renders from raw bounds and pixel counts, validating both first.
    pub fn render_bounds(
        &self,
        (x_min, x_max, y_min, y_max): (f64, f64, f64, f64),
        out_x: u32,
        out_y: u32,
    ) -> Result<Frame, RenderError> {
        let viewport = Viewport::new(x_min, x_max, y_min, y_max)?;
        let resolution = Resolution::new(out_x, out_y)?;

        self.render(viewport, resolution)
    }
}

/// Renders with [`RenderSettings::default`].
pub fn render(viewport: Viewport, out_x: u32, out_y: u32) -> Result<Frame, RenderError> {
    let resolution = Resolution::new(out_x, out_y)?;

    Renderer::default().render(viewport, resolution)
}
