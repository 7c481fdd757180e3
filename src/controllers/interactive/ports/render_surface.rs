use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::controllers::interactive::input_event::InputEvent;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::viewport_state::ViewportState;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceHandle(pub u64);

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface {0} is not open")]
    NotOpen(SurfaceHandle),

    #[error("surface {handle} shows {expected}x{expected} cells, got a {actual}x{actual} grid")]
    ShapeChanged {
        handle: SurfaceHandle,
        expected: u32,
        actual: u32,
    },

    #[error("could not write frame to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not build pixel buffer: {0}")]
    PixelBuffer(#[from] PixelBufferError),

    #[error("window system error: {0}")]
    Window(String),
}

/// Where sampled grids are shown and input events come from.
///
/// `update` replaces the samples of an open surface and rescales its colours
/// to the new value range; the grid must keep the resolution the surface was
/// opened with.
pub trait RenderSurface {
    fn display(&mut self, grid: &IterationGrid) -> Result<SurfaceHandle, SurfaceError>;

    fn update(&mut self, handle: SurfaceHandle, grid: &IterationGrid) -> Result<(), SurfaceError>;

    fn close(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError>;

    /// Starts delivering pointer and key events for `handle`.
    fn subscribe(&mut self, handle: SurfaceHandle) -> Result<(), SurfaceError>;

    /// Blocks until the next subscribed event. `Ok(None)` means the user
    /// closed the surface.
    fn wait_event(&mut self, handle: SurfaceHandle) -> Result<Option<InputEvent>, SurfaceError>;

    /// Describes the view currently shown on `handle`.
    fn annotate(&mut self, _handle: SurfaceHandle, _state: &ViewportState, _iterations: u32) {}

    /// Shows a message that does not end the session.
    fn notify(&mut self, _handle: SurfaceHandle, _message: &str) {}
}
