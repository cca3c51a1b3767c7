use std::error::Error;

use log::{info, warn};

use crate::config::RenderConfig;
use crate::controllers::cli::args::CliArgs;
use crate::controllers::explorer::controller::ExplorerController;
use crate::core::actions::render_frame::render_frame::Renderer;
use crate::core::util::pixel_to_complex_coords::GridMapping;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Renders the configured view, then replays each zoom gesture in order.
pub fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let config = args.apply(config);

    let home = config.home_viewport()?;
    let resolution = config.resolution()?;
    let renderer = Renderer::new(config.render_settings())?;

    if config.grid_mapping == GridMapping::AspectLocked {
        let sampled_width = home.height() / f64::from(config.height) * f64::from(config.width);

        if (sampled_width - home.width()).abs() > home.width() * 1e-9 {
            warn!(
                "aspect-locked sampling covers {} of the viewport's {} horizontal units",
                sampled_width,
                home.width()
            );
        }
    }

    info!("Rendering Mandelbrot set...");
    info!("Image size: {}x{}", config.width, config.height);
    info!("Max iterations: {}", config.max_iterations);

    let keep_steps = args.keep_steps && !args.zooms.is_empty();
    let presenter = PpmFilePresenter::new(&config.output).keep_every_frame(keep_steps);
    let mut controller = ExplorerController::new(renderer, presenter, home, resolution);

    if keep_steps || args.zooms.is_empty() {
        controller.render()?;
    }

    for gesture in &args.zooms {
        controller.click(*gesture)?;
    }

    let viewport = controller.viewport();
    info!(
        "final viewport x [{}, {}] y [{}, {}] after {} frame(s)",
        viewport.x_min(),
        viewport.x_max(),
        viewport.y_min(),
        viewport.y_max(),
        controller.frames_presented()
    );

    Ok(())
}
