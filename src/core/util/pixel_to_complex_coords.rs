use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("point (x: {}, y: {}) is outside the {}x{} output grid", .point.x, .point.y, .resolution.width(), .resolution.height())]
    PointOutsideGrid { point: Point, resolution: Resolution },
}

/// How pixel indices are spread over the viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridMapping {
    /// One step, `height / out_y`, shared by both axes starting from the
    /// top-left bound. When the viewport and output aspects differ the sampled
    /// x-extent is `step * out_x`, not the viewport width.
    #[default]
    AspectLocked,
    /// Each axis is interpolated between its own bounds.
    Stretch,
}

impl GridMapping {
    pub const ALL: &'static [Self] = &[Self::AspectLocked, Self::Stretch];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AspectLocked => "aspect-locked",
            Self::Stretch => "stretch",
        }
    }
}

impl std::fmt::Display for GridMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).name())
    }
}

impl std::str::FromStr for GridMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mapping| mapping.name() == s)
            .ok_or_else(|| format!("unknown grid mapping '{s}'"))
    }
}

/// Maps a pixel index to the plane coordinate of that pixel's top-left corner.
///
/// Under [`GridMapping::Stretch`] this inverts
/// `px = floor((cx - x_min) / (x_max - x_min) * out_x)`.
pub fn pixel_to_complex_coords(
    pixel: Point,
    resolution: Resolution,
    viewport: Viewport,
    mapping: GridMapping,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel,
            resolution,
        });
    }

    let px = f64::from(pixel.x);
    let py = f64::from(pixel.y);

    let (real, imag) = match mapping {
        GridMapping::AspectLocked => {
            let step = viewport.height() / f64::from(resolution.height());
            (viewport.x_min() + px * step, viewport.y_min() + py * step)
        }
        GridMapping::Stretch => (
            viewport.x_min() + px / f64::from(resolution.width()) * viewport.width(),
            viewport.y_min() + py / f64::from(resolution.height()) * viewport.height(),
        ),
    };

    Ok(Complex { real, imag })
}
