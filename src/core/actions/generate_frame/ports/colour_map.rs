use crate::core::data::colour::Colour;
use crate::core::data::frame::IterationStats;
use crate::core::data::sample::Sample;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} outside frame range {min}..={max}")]
    IterationsOutsideRange { iterations: u32, min: u32, max: u32 },
}

/// Turns one sample into a pixel colour.
///
/// `stats` describes the whole frame the sample belongs to; maps that colour
/// by the smoothed value alone ignore it.
pub trait ColourMap {
    fn map(&self, sample: &Sample, stats: &IterationStats) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
