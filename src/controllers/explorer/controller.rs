use log::info;
use thiserror::Error;

use crate::controllers::explorer::viewport_transform::{TransformError, ZoomGesture, zoom_at};
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderError, Renderer};
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("presenting frame failed: {0}")]
    Present(#[from] std::io::Error),
}

/// Owns the current viewport and re-renders it on every gesture.
///
/// A gesture only replaces the current viewport once its frame has rendered
/// and been presented.
pub struct ExplorerController<P: FramePresenterPort> {
    renderer: Renderer,
    presenter: P,
    home: Viewport,
    viewport: Viewport,
    resolution: Resolution,
    frames_presented: u64,
}

impl<P: FramePresenterPort> ExplorerController<P> {
    pub fn new(renderer: Renderer, presenter: P, home: Viewport, resolution: Resolution) -> Self {
        Self {
            renderer,
            presenter,
            home,
            viewport: home,
            resolution,
            frames_presented: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn render(&mut self) -> Result<(), ControllerError> {
        self.show(self.viewport)
    }

    pub fn click(&mut self, gesture: ZoomGesture) -> Result<Viewport, ControllerError> {
        let next = zoom_at(
            &self.viewport,
            gesture.point,
            self.resolution,
            self.renderer.settings().grid_mapping,
            gesture.button,
        )?;

        info!(
            "{:?} click at ({}, {}): centre ({}, {}), width {}",
            gesture.button,
            gesture.point.x,
            gesture.point.y,
            next.center().real,
            next.center().imag,
            next.width()
        );

        self.show(next)?;
        Ok(next)
    }

    pub fn reset(&mut self) -> Result<(), ControllerError> {
        self.show(self.home)
    }

    fn show(&mut self, viewport: Viewport) -> Result<(), ControllerError> {
        let frame = self.renderer.render(viewport, self.resolution)?;

        self.presenter.present(&frame, &viewport)?;
        self.viewport = viewport;
        self.frames_presented += 1;

        Ok(())
    }
}
