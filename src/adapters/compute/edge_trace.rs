use crate::core::actions::sample_view::ports::compute_backend::{
    BackendError, BackendGrid, BackendQuery, ComputeBackend,
};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Spacing of the traced grid lines.
const CHUNK: usize = 10;

/// Chunked edge tracing.
///
/// Every other cell on grid lines `CHUNK` apart is computed first. A chunk
/// whose sampled border is uniform is flooded with that value, any other
/// chunk is computed exactly. Cells past the last whole chunk are always
/// computed exactly.
#[derive(Debug, Default)]
pub struct EdgeTraceBackend {
    scratch: Vec<u32>,
    known: Vec<bool>,
}

impl EdgeTraceBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputeBackend for EdgeTraceBackend {
    fn name(&self) -> &str {
        "edge-trace"
    }

    fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError> {
        let algorithm = MandelbrotAlgorithm::new(query)?;
        let width = query.resolution as usize;

        let mut cells = std::mem::take(&mut self.scratch);
        cells.clear();
        cells.resize(width * width, 0);

        self.known.clear();
        self.known.resize(width * width, false);

        Tracer {
            algorithm: &algorithm,
            width,
            cells: &mut cells,
            known: &mut self.known,
        }
        .run();

        Ok(BackendGrid::new(query.resolution, cells))
    }

    fn release(&mut self, grid: BackendGrid) {
        self.scratch = grid.into_cells();
    }
}

struct Tracer<'a> {
    algorithm: &'a MandelbrotAlgorithm,
    width: usize,
    cells: &'a mut [u32],
    // set once a cell holds an exact count; flooded cells stay unset
    known: &'a mut [bool],
}

impl Tracer<'_> {
    fn run(&mut self) {
        let chunks = (self.width - 1) / CHUNK;
        let edge = chunks * CHUNK;

        for line in (0..=edge).step_by(CHUNK) {
            for offset in (0..=edge).step_by(2) {
                self.exact(offset, line);
                self.exact(line, offset);
            }
        }

        for chunk_row in 0..chunks {
            for chunk_col in 0..chunks {
                self.trace_chunk(chunk_col * CHUNK, chunk_row * CHUNK);
            }
        }

        for row in 0..self.width {
            for col in 0..self.width {
                if row > edge || col > edge {
                    self.exact(col, row);
                }
            }
        }
    }

    fn trace_chunk(&mut self, left: usize, top: usize) {
        let corner = self.cell(left, top);

        if self.border_is_uniform(left, top, corner) {
            for row in top..=top + CHUNK {
                for col in left..=left + CHUNK {
                    let index = row * self.width + col;
                    if !self.known[index] {
                        self.cells[index] = corner;
                    }
                }
            }
        } else {
            for row in top..=top + CHUNK {
                for col in left..=left + CHUNK {
                    self.exact(col, row);
                }
            }
        }
    }

    fn border_is_uniform(&self, left: usize, top: usize, value: u32) -> bool {
        (0..=CHUNK).step_by(2).all(|offset| {
            self.cell(left + offset, top) == value
                && self.cell(left + offset, top + CHUNK) == value
                && self.cell(left, top + offset) == value
                && self.cell(left + CHUNK, top + offset) == value
        })
    }

    fn cell(&self, col: usize, row: usize) -> u32 {
        self.cells[row * self.width + col]
    }

    fn exact(&mut self, col: usize, row: usize) {
        let index = row * self.width + col;

        if !self.known[index] {
            self.cells[index] = self.algorithm.compute(col, row);
            self.known[index] = true;
        }
    }
}
