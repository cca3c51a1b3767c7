use std::f64::consts::LN_2;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::sample::{NON_ESCAPING_SMOOTHED_VALUE, Sample};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    GridMapping, PixelToComplexCoordsError, pixel_to_complex_coords,
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluation of single points of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeEvaluator {
    max_iterations: u32,
}

impl EscapeEvaluator {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    /// Iterates `z <- z^2 + c` from zero until `|z|^2 >= 4` or the iteration
    /// cap is reached.
    ///
    /// Escaped points carry `log2(ln(|z|^2) / 2 / ln 2)` as their smoothed
    /// value. Bounded points report the cap and the sentinel smoothed value,
    /// since the logarithm is undefined for them.
    #[must_use]
    pub fn evaluate(&self, c: Complex) -> Sample {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iterations < self.max_iterations {
            z = z * z + c;
            iterations += 1;
        }

        let modulus_squared = z.magnitude_squared();

        // NaN compares false, so a non-finite orbit counts as bounded
        let escaped = modulus_squared >= ESCAPE_RADIUS_SQUARED;

        if !escaped {
            return Sample::bounded(self.max_iterations);
        }

        let log_zn = modulus_squared.ln() / 2.0;
        let smoothed = (log_zn / LN_2).ln() / LN_2;

        if smoothed.is_finite() {
            Sample::escaped(iterations, smoothed)
        } else {
            Sample::escaped(iterations, NON_ESCAPING_SMOOTHED_VALUE)
        }
    }
}

/// Evaluates the Mandelbrot set over every pixel of a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    resolution: Resolution,
    viewport: Viewport,
    mapping: GridMapping,
    evaluator: EscapeEvaluator,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Sample;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.resolution, self.viewport, self.mapping)?;

        Ok(self.evaluator.evaluate(c))
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        resolution: Resolution,
        viewport: Viewport,
        mapping: GridMapping,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        Ok(Self {
            resolution,
            viewport,
            mapping,
            evaluator: EscapeEvaluator::new(max_iterations)?,
        })
    }
}
