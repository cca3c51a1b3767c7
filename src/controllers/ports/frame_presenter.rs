use crate::core::data::frame::Frame;
use crate::core::data::viewport::Viewport;

/// Receives each finished frame together with the viewport it shows.
pub trait FramePresenterPort {
    fn present(&mut self, frame: &Frame, viewport: &Viewport) -> std::io::Result<()>;
}
