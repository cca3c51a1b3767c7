pub mod iteration_bands;
pub mod sine_hue;
