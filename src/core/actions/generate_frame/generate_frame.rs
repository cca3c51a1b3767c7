use crate::core::actions::generate_frame::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::frame::{BYTES_PER_PIXEL, Frame, FrameData, FrameError, IterationStats};
use crate::core::data::resolution::Resolution;
use crate::core::data::sample::Sample;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateFrameError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

/// Colours a row-major list of samples into a frame.
///
/// The buffer is preallocated from `resolution`; a sample count that does not
/// match the resolution is reported as a [`FrameError::BoundsMismatch`].
pub fn generate_frame<CMap: ColourMap + ?Sized>(
    samples: &[Sample],
    colour_map: &CMap,
    resolution: Resolution,
    stats: IterationStats,
) -> Result<Frame, GenerateFrameError> {
    let mut buffer: FrameData = Vec::with_capacity(resolution.size() * BYTES_PER_PIXEL);

    for sample in samples {
        let Colour { r, g, b } = colour_map.map(sample, &stats)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(Frame::from_data(resolution, buffer)?.with_iteration_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        fn map(&self, sample: &Sample, _: &IterationStats) -> Result<Colour, ColourMapError> {
            Ok(Colour::grey(sample.iterations as u8))
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        fn map(&self, sample: &Sample, stats: &IterationStats) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::IterationsOutsideRange {
                iterations: sample.iterations,
                min: stats.min,
                max: stats.max,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    fn samples(iterations: &[u32]) -> Vec<Sample> {
        iterations.iter().map(|&n| Sample::escaped(n, 0.0)).collect()
    }

    const STATS: IterationStats = IterationStats { min: 1, max: 6 };

    #[test]
    fn test_generates_frame_correctly() {
        let resolution = Resolution::new(3, 2).unwrap();
        let frame = generate_frame(
            &samples(&[1, 2, 3, 4, 5, 6]),
            &StubColourMapSuccess {},
            resolution,
            STATS,
        )
        .unwrap();

        assert_eq!(
            frame.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6]
        );
        assert_eq!(frame.resolution(), resolution);
        assert_eq!(frame.iteration_stats(), Some(STATS));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let result = generate_frame(
            &samples(&[1, 2, 3, 4, 5, 6]),
            &StubColourMapFailure {},
            Resolution::new(3, 2).unwrap(),
            STATS,
        );

        assert!(matches!(
            result,
            Err(GenerateFrameError::ColourMap(ColourMapError::IterationsOutsideRange {
                iterations: 1,
                ..
            }))
        ));
    }

    #[test]
    fn test_sample_count_mismatch_returns_err() {
        let result = generate_frame(
            &samples(&[1, 2, 3, 4, 5, 6]),
            &StubColourMapSuccess {},
            Resolution::new(2, 2).unwrap(),
            STATS,
        );

        assert!(matches!(
            result,
            Err(GenerateFrameError::Frame(FrameError::BoundsMismatch {
                frame_size: 12,
                buffer_size: 18
            }))
        ));
    }
}
