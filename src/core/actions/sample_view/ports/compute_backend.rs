use thiserror::Error;

use crate::core::data::iteration_grid::IterationGridError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Arguments of one backend call. The vertical centre is already negated so
/// that row 0 of the result is the top of the displayed image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackendQuery {
    pub center_x: f64,
    pub negated_center_y: f64,
    pub size: f64,
    pub resolution: u32,
    pub iterations: u32,
}

/// Backend-owned `resolution × resolution` row-major escape counts.
///
/// Callers copy what they need and hand the grid back through
/// [`ComputeBackend::release`].
#[derive(Debug)]
pub struct BackendGrid {
    resolution: u32,
    cells: Vec<u32>,
}

impl BackendGrid {
    #[must_use]
    pub fn new(resolution: u32, cells: Vec<u32>) -> Self {
        Self { resolution, cells }
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("compute backend '{name}' could not be loaded: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("compute backend rejected the query: {0}")]
    Algorithm(#[from] MandelbrotError),

    #[error("compute backend returned a malformed grid: {0}")]
    Grid(#[from] IterationGridError),
}

/// The escape-time sampling routine. Calls are synchronous, one at a time.
pub trait ComputeBackend {
    fn name(&self) -> &str;

    fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError>;

    /// Takes back a grid previously returned by [`ComputeBackend::sample`].
    fn release(&mut self, grid: BackendGrid);
}

impl<B: ComputeBackend + ?Sized> ComputeBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError> {
        (**self).sample(query)
    }

    fn release(&mut self, grid: BackendGrid) {
        (**self).release(grid)
    }
}
