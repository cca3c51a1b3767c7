pub mod colour;
pub mod complex;
pub mod frame;
pub mod point;
pub mod resolution;
pub mod sample;
pub mod viewport;
