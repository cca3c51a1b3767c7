pub mod controller;
pub mod viewport_transform;
