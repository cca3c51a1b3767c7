use crate::core::data::complex::Complex;
use thiserror::Error;

/// Everything that makes a render request impossible to satisfy.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds are inverted or empty: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvertedBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    #[error("viewport bounds must be finite")]
    NonFiniteBounds,
    #[error("output resolution must be positive: {width}x{height}")]
    EmptyResolution { width: u32, height: u32 },
}

/// The rectangle of the complex plane being rendered.
///
/// `x` runs along the real axis and `y` along the imaginary axis. Row 0 of a
/// frame corresponds to `y_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(ViewportError::NonFiniteBounds);
        }

        if x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvertedBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds the viewport of the given extents centred on `center`.
    pub fn centered_on(center: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        Self::new(
            center.real - width / 2.0,
            center.real + width / 2.0,
            center.imag - height / 2.0,
            center.imag + height / 2.0,
        )
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.x_min + self.width() / 2.0,
            imag: self.y_min + self.height() / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.x_min(), -2.5);
        assert_eq!(viewport.x_max(), 1.0);
        assert_eq!(viewport.y_min(), -1.0);
        assert_eq!(viewport.y_max(), 1.0);
        assert_eq!(viewport.width(), 3.5);
        assert_eq!(viewport.height(), 2.0);
    }

    #[test]
    fn test_viewport_rejects_inverted_and_empty_bounds() {
        assert_eq!(
            Viewport::new(1.0, -1.0, -1.0, 1.0),
            Err(ViewportError::InvertedBounds {
                x_min: 1.0,
                x_max: -1.0,
                y_min: -1.0,
                y_max: 1.0
            })
        );
        assert!(matches!(
            Viewport::new(-1.0, 1.0, 1.0, -1.0),
            Err(ViewportError::InvertedBounds { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, 0.0, -1.0, 1.0),
            Err(ViewportError::InvertedBounds { .. })
        ));
        assert!(matches!(
            Viewport::new(-1.0, 1.0, 2.0, 2.0),
            Err(ViewportError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_viewport_rejects_non_finite_bounds() {
        assert_eq!(
            Viewport::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(ViewportError::NonFiniteBounds)
        );
        assert_eq!(
            Viewport::new(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(ViewportError::NonFiniteBounds)
        );
    }

    #[test]
    fn test_viewport_center() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 3.0).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 1.0));
    }

    #[test]
    fn test_centered_on_round_trips_center_and_extents() {
        let viewport = Viewport::centered_on(Complex::new(-0.75, 0.1), 0.5, 0.25).unwrap();

        assert!((viewport.center().real - -0.75).abs() < 1e-12);
        assert!((viewport.center().imag - 0.1).abs() < 1e-12);
        assert!((viewport.width() - 0.5).abs() < 1e-12);
        assert!((viewport.height() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_centered_on_rejects_non_positive_extent() {
        assert!(Viewport::centered_on(Complex::ZERO, 0.0, 1.0).is_err());
        assert!(Viewport::centered_on(Complex::ZERO, 1.0, -1.0).is_err());
    }
}
