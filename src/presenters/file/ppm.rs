use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame::Frame;
use crate::core::data::viewport::Viewport;

/// Writes frames as binary PPM (P6) images.
///
/// With `keep_every_frame` each presented frame gets its own numbered file
/// next to `path`; otherwise every frame overwrites `path`.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    path: PathBuf,
    keep_every_frame: bool,
    frames_written: usize,
}

impl PpmFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keep_every_frame: false,
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn keep_every_frame(mut self, keep: bool) -> Self {
        self.keep_every_frame = keep;
        self
    }

    #[must_use]
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Path the next frame will be written to.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        if !self.keep_every_frame {
            return self.path.clone();
        }

        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());

        self.path
            .with_file_name(format!("{stem}-{:03}.ppm", self.frames_written))
    }
}

pub fn write_ppm(frame: &Frame, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(filepath)?);

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", frame.width(), frame.height())?;
    writeln!(file, "255")?;
    file.write_all(frame.buffer())?;
    file.flush()
}

impl FramePresenterPort for PpmFilePresenter {
    fn present(&mut self, frame: &Frame, viewport: &Viewport) -> std::io::Result<()> {
        let path = self.next_path();

        write_ppm(frame, &path)?;
        self.frames_written += 1;

        info!(
            "wrote {} (x [{}, {}], y [{}, {}])",
            path.display(),
            viewport.x_min(),
            viewport.x_max(),
            viewport.y_min(),
            viewport.y_max()
        );

        Ok(())
    }
}
