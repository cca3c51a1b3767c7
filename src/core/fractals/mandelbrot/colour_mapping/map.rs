use crate::core::actions::generate_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::frame::IterationStats;
use crate::core::data::sample::Sample;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap for Box<dyn MandelbrotColourMap> {
    fn map(&self, sample: &Sample, stats: &IterationStats) -> Result<Colour, ColourMapError> {
        (**self).map(sample, stats)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
