//! Smooth escape-time rendering of the Mandelbrot set.
//!
//! [`Renderer::render`] turns a [`Viewport`] and a [`Resolution`] into a
//! [`Frame`] of RGB pixels. Everything outside the renderer (zoom gestures,
//! presenting frames, the command line) is a thin shell around it.

mod config;
mod controllers;
mod core;
mod presenters;

pub use crate::config::{ConfigError, RenderConfig, ViewportConfig};
pub use crate::controllers::cli::args::CliArgs;
pub use crate::controllers::cli::run::run;
pub use crate::controllers::explorer::controller::{ControllerError, ExplorerController};
pub use crate::controllers::explorer::viewport_transform::{
    MouseButton, TransformError, ZoomGesture, clicked_coordinate, zoom_at,
};
pub use crate::controllers::ports::frame_presenter::FramePresenterPort;
pub use crate::core::actions::generate_frame::generate_frame::GenerateFrameError;
pub use crate::core::actions::generate_frame::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::render_frame::render_frame::{
    RenderError, RenderSettings, Renderer, render,
};
pub use crate::core::colour::hsl::{hsl_to_rgb, hue_to_rgb};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::{Frame, FrameError, IterationStats};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::sample::{NON_ESCAPING_SMOOTHED_VALUE, Sample};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_MAX_ITERATIONS, EscapeEvaluator};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::util::pixel_to_complex_coords::{GridMapping, PixelToComplexCoordsError};
pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};
