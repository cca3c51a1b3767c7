use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn resolution(&self) -> Resolution;
}
