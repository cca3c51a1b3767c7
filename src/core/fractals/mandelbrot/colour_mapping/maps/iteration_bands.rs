use crate::core::actions::generate_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::frame::IterationStats;
use crate::core::data::sample::Sample;
use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds, map::MandelbrotColourMap,
};

/// Greyscale ramp of the iteration count, normalised to the frame's range.
///
/// Points that never escaped are black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MandelbrotIterationBands {}

impl MandelbrotIterationBands {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl ColourMap for MandelbrotIterationBands {
    fn map(&self, sample: &Sample, stats: &IterationStats) -> Result<Colour, ColourMapError> {
        if sample.iterations < stats.min || sample.iterations > stats.max {
            return Err(ColourMapError::IterationsOutsideRange {
                iterations: sample.iterations,
                min: stats.min,
                max: stats.max,
            });
        }

        if !sample.escaped {
            return Ok(Colour::BLACK);
        }

        if stats.span() == 0 {
            return Ok(Colour::grey(255));
        }

        let t = f64::from(sample.iterations - stats.min) / f64::from(stats.span());

        Ok(Colour::grey((t * 255.0).round() as u8))
    }

    fn display_name(&self) -> &str {
        "Iteration bands"
    }
}

impl MandelbrotColourMap for MandelbrotIterationBands {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::IterationBands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: IterationStats = IterationStats { min: 10, max: 110 };

    #[test]
    fn test_bounded_points_are_black() {
        let mapper = MandelbrotIterationBands::new();

        assert_eq!(mapper.map(&Sample::bounded(110), &STATS), Ok(Colour::BLACK));
    }

    #[test]
    fn test_ramp_endpoints_and_midpoint() {
        let mapper = MandelbrotIterationBands::new();

        assert_eq!(mapper.map(&Sample::escaped(10, 0.3), &STATS), Ok(Colour::grey(0)));
        assert_eq!(mapper.map(&Sample::escaped(60, 0.3), &STATS), Ok(Colour::grey(128)));
        assert_eq!(mapper.map(&Sample::escaped(110, 0.3), &STATS), Ok(Colour::grey(255)));
    }

    #[test]
    fn test_flat_frame_is_white() {
        let mapper = MandelbrotIterationBands::new();
        let stats = IterationStats { min: 1, max: 1 };

        assert_eq!(mapper.map(&Sample::escaped(1, 0.0), &stats), Ok(Colour::grey(255)));
    }

    #[test]
    fn test_iterations_outside_range_fail() {
        let mapper = MandelbrotIterationBands::new();

        assert_eq!(
            mapper.map(&Sample::escaped(5, 0.0), &STATS),
            Err(ColourMapError::IterationsOutsideRange {
                iterations: 5,
                min: 10,
                max: 110
            })
        );
    }
}
