use rayon::prelude::*;

use crate::core::actions::sample_view::ports::compute_backend::{
    BackendError, BackendGrid, BackendQuery, ComputeBackend,
};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Runs the escape test on every cell, one rayon task per row.
#[derive(Debug, Default)]
pub struct EscapeTimeBackend {
    scratch: Vec<u32>,
}

impl EscapeTimeBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputeBackend for EscapeTimeBackend {
    fn name(&self) -> &str {
        "escape-time"
    }

    fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError> {
        let algorithm = MandelbrotAlgorithm::new(query)?;
        let width = query.resolution as usize;

        let mut cells = std::mem::take(&mut self.scratch);
        cells.clear();
        cells.resize(width * width, 0);

        cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, row_cells)| {
                for (col, cell) in row_cells.iter_mut().enumerate() {
                    *cell = algorithm.compute(col, row);
                }
            });

        Ok(BackendGrid::new(query.resolution, cells))
    }

    fn release(&mut self, grid: BackendGrid) {
        self.scratch = grid.into_cells();
    }
}
