//! Zoom/pan gestures expressed as pure viewport arithmetic.

use std::str::FromStr;

use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    GridMapping, PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    /// Zoom in: halve both extents.
    Primary,
    /// Zoom out: double both extents.
    Secondary,
}

impl MouseButton {
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            Self::Primary => 0.5,
            Self::Secondary => 2.0,
        }
    }
}

/// A click at a pixel of the currently displayed frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoomGesture {
    pub point: Point,
    pub button: MouseButton,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("click at x:{}, y:{} is outside the {}x{} frame", .point.x, .point.y, .resolution.width(), .resolution.height())]
    ClickOutsideFrame { point: Point, resolution: Resolution },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error("cannot parse zoom gesture '{0}', expected 'x,y,in' or 'x,y,out'")]
    Parse(String),
}

/// Plane coordinate the renderer samples for the clicked pixel.
///
/// `mapping` must be the one the displayed frame was rendered with, otherwise
/// the coordinate is not the point drawn under the click.
pub fn clicked_coordinate(
    viewport: &Viewport,
    click: Point,
    resolution: Resolution,
    mapping: GridMapping,
) -> Result<Complex, TransformError> {
    pixel_to_complex_coords(click, resolution, *viewport, mapping).map_err(
        |PixelToComplexCoordsError::PointOutsideGrid { point, resolution }| {
            TransformError::ClickOutsideFrame { point, resolution }
        },
    )
}

/// Recentres the viewport on the clicked coordinate and rescales its extents
/// according to the button.
pub fn zoom_at(
    viewport: &Viewport,
    click: Point,
    resolution: Resolution,
    mapping: GridMapping,
    button: MouseButton,
) -> Result<Viewport, TransformError> {
    let center = clicked_coordinate(viewport, click, resolution, mapping)?;
    let scale = button.scale();

    Ok(Viewport::centered_on(
        center,
        viewport.width() * scale,
        viewport.height() * scale,
    )?)
}

impl FromStr for ZoomGesture {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || TransformError::Parse(s.to_string());
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();

        let [x, y, direction] = parts.as_slice() else {
            return Err(parse_error());
        };

        let button = match *direction {
            "in" => MouseButton::Primary,
            "out" => MouseButton::Secondary,
            _ => return Err(parse_error()),
        };

        Ok(Self {
            point: Point {
                x: x.parse().map_err(|_| parse_error())?,
                y: y.parse().map_err(|_| parse_error())?,
            },
            button,
        })
    }
}
