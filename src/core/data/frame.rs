use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("pixel at x:{}, y:{} outside of {}x{} frame", .pixel.x, .pixel.y, .resolution.width(), .resolution.height())]
    PixelOutsideBounds { pixel: Point, resolution: Resolution },
    #[error("frame size {frame_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        frame_size: usize,
        buffer_size: usize,
    },
}

/// Lowest and highest iteration counts seen across one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationStats {
    pub min: u32,
    pub max: u32,
}

impl IterationStats {
    #[must_use]
    pub fn span(&self) -> u32 {
        self.max - self.min
    }
}

pub type FrameData = Vec<u8>;

/// A finished render: row-major RGB bytes, three per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    resolution: Resolution,
    buffer: FrameData,
    iteration_stats: Option<IterationStats>,
}

impl Frame {
    pub fn from_data(resolution: Resolution, buffer: FrameData) -> Result<Self, FrameError> {
        let frame_size = resolution_to_buffer_size(resolution);

        if frame_size != buffer.len() {
            return Err(FrameError::BoundsMismatch {
                frame_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            resolution,
            buffer,
            iteration_stats: None,
        })
    }

    #[must_use]
    pub fn with_iteration_stats(mut self, stats: IterationStats) -> Self {
        self.iteration_stats = Some(stats);
        self
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &FrameData {
        &self.buffer
    }

    /// Min/max iteration counts of the render that produced this frame.
    #[must_use]
    pub fn iteration_stats(&self) -> Option<IterationStats> {
        self.iteration_stats
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, FrameError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Colour {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            })
    }

    fn index_of(&self, pixel: Point) -> Result<usize, FrameError> {
        if !self.resolution.contains_point(pixel) {
            return Err(FrameError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        let row = pixel.y as usize * self.resolution.width() as usize;

        Ok((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let resolution = create_resolution(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let frame = Frame::from_data(resolution, data.clone()).unwrap();

        assert_eq!(frame.resolution(), resolution);
        assert_eq!(frame.buffer(), &data);
        assert_eq!(frame.pixel(Point { x: 0, y: 1 }), Ok(Colour { r: 0, g: 0, b: 255 }));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let resolution = create_resolution(2, 2);

        assert_eq!(
            Frame::from_data(resolution, vec![255, 0, 0]).unwrap_err(),
            FrameError::BoundsMismatch {
                frame_size: 12,
                buffer_size: 3
            }
        );
        assert_eq!(
            Frame::from_data(resolution, vec![0; 24]).unwrap_err(),
            FrameError::BoundsMismatch {
                frame_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let mut data = vec![0; 27];
        data[12..15].copy_from_slice(&[255, 0, 0]);
        let frame = Frame::from_data(create_resolution(3, 3), data).unwrap();

        assert_eq!(frame.pixel(Point { x: 1, y: 1 }), Ok(Colour { r: 255, g: 0, b: 0 }));
        assert_eq!(frame.pixel(Point { x: 2, y: 1 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let resolution = create_resolution(3, 3);
        let frame = Frame::from_data(resolution, vec![0; 27]).unwrap();

        assert_eq!(
            frame.pixel(Point { x: 3, y: 1 }),
            Err(FrameError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 1 },
                resolution
            })
        );
    }

    #[test]
    fn test_pixels_iterates_every_pixel() {
        let frame = Frame::from_data(create_resolution(2, 1), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let pixels: Vec<Colour> = frame.pixels().collect();

        assert_eq!(
            pixels,
            vec![Colour { r: 1, g: 2, b: 3 }, Colour { r: 4, g: 5, b: 6 }]
        );
    }

    #[test]
    fn test_iteration_stats_attach() {
        let stats = IterationStats { min: 3, max: 40 };
        let frame = Frame::from_data(create_resolution(1, 1), vec![0; 3]).unwrap();

        assert_eq!(frame.iteration_stats(), None);
        assert_eq!(frame.with_iteration_stats(stats).iteration_stats(), Some(stats));
        assert_eq!(stats.span(), 37);
    }
}
