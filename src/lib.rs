pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use adapters::compute::loader::{BackendKind, load_backend};
pub use config::{ConfigError, ExplorerConfig};
pub use controllers::cli::explorer::Explorer;
pub use controllers::cli::repl::{CommandHandler, Repl};
pub use controllers::interactive::{
    InputEvent, RedrawAction, RenderSurface, SessionController, SessionError, transition,
};
pub use crate::core::actions::sample_view::ports::compute_backend::{
    BackendError, BackendGrid, BackendQuery, ComputeBackend,
};
pub use crate::core::data::sample_point::SamplePoint;
pub use crate::core::data::viewport_state::ViewportState;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use presenters::file::ppm::PpmSurface;

#[cfg(feature = "gui")]
pub use presenters::pixels::surface::PixelsSurface;
