use crate::core::actions::generate_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour::hsl::hsl_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::data::frame::IterationStats;
use crate::core::data::sample::Sample;
use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds, map::MandelbrotColourMap,
};

pub const DEFAULT_SATURATION: f64 = 0.6;
pub const DEFAULT_LIGHTNESS: f64 = 0.5;

/// Periodic hue bands driven by the smoothed escape value.
///
/// `hue = (sin(smoothed) + 1) / 2`, rendered at a fixed saturation and
/// lightness. Bounded points share the colour of the sentinel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotSineHue {
    saturation: f64,
    lightness: f64,
}

impl MandelbrotSineHue {
    #[must_use]
    pub fn new(saturation: f64, lightness: f64) -> Self {
        Self {
            saturation,
            lightness,
        }
    }

    #[must_use]
    pub fn hue(smoothed: f64) -> f64 {
        (smoothed.sin() + 1.0) / 2.0
    }
}

impl Default for MandelbrotSineHue {
    fn default() -> Self {
        Self::new(DEFAULT_SATURATION, DEFAULT_LIGHTNESS)
    }
}

impl ColourMap for MandelbrotSineHue {
    fn map(&self, sample: &Sample, _: &IterationStats) -> Result<Colour, ColourMapError> {
        Ok(hsl_to_rgb(
            Self::hue(sample.smoothed),
            self.saturation,
            self.lightness,
        ))
    }

    fn display_name(&self) -> &str {
        "Sine hue"
    }
}

impl MandelbrotColourMap for MandelbrotSineHue {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::SineHue
    }
}
