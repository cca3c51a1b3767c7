use crate::core::data::frame::IterationStats;
use crate::core::data::sample::Sample;

/// Running min/max of the iteration counts; `None` for no samples.
#[must_use]
pub fn iteration_stats(samples: &[Sample]) -> Option<IterationStats> {
    samples.iter().fold(None, |stats, sample| {
        let n = sample.iterations;

        Some(match stats {
            None => IterationStats { min: n, max: n },
            Some(IterationStats { min, max }) => IterationStats {
                min: min.min(n),
                max: max.max(n),
            },
        })
    })
}
