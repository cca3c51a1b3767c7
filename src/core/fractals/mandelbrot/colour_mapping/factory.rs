use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{iteration_bands::MandelbrotIterationBands, sine_hue::MandelbrotSineHue},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    saturation: f64,
    lightness: f64,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::SineHue => Box::new(MandelbrotSineHue::new(saturation, lightness)),
        MandelbrotColourMapKinds::IterationBands => Box::new(MandelbrotIterationBands::new()),
    }
}
