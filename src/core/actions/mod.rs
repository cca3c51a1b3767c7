pub mod generate_fractal;
pub mod generate_frame;
pub mod render_frame;
