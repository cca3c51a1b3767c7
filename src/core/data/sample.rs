/// Smoothed value reported for points that never escape.
pub const NON_ESCAPING_SMOOTHED_VALUE: f64 = 0.0;

/// Result of iterating one point of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub iterations: u32,
    pub smoothed: f64,
    pub escaped: bool,
}

impl Sample {
    #[must_use]
    pub fn escaped(iterations: u32, smoothed: f64) -> Self {
        Self {
            iterations,
            smoothed,
            escaped: true,
        }
    }

    #[must_use]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            smoothed: NON_ESCAPING_SMOOTHED_VALUE,
            escaped: false,
        }
    }
}
