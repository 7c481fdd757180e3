use std::time::Instant;

use tracing::debug;

use crate::core::actions::sample_view::ports::compute_backend::{BackendError, ComputeBackend};
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::sample_request::SampleRequest;

/// Written into cell `[0][0]` of an all-zero grid, which the display layer
/// cannot colour-scale.
pub const BLANK_GRID_SENTINEL: u32 = 1;

/// Samples one validated view into caller-owned memory.
///
/// The backend's grid is copied, released back to the backend, and never
/// retained past this call.
pub fn sample_view<B: ComputeBackend + ?Sized>(
    backend: &mut B,
    request: &SampleRequest,
) -> Result<IterationGrid, BackendError> {
    let query = request.backend_query();
    let start = Instant::now();

    let raw = backend.sample(&query)?;
    let copied = IterationGrid::copy_from(query.resolution, raw.as_slice());
    backend.release(raw);

    let mut grid = copied?;

    if grid.is_blank() {
        grid.set_first_cell(BLANK_GRID_SENTINEL);
    }

    debug!(
        backend = backend.name(),
        resolution = query.resolution,
        iterations = query.iterations,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sampled view"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::sample_view::ports::compute_backend::{BackendGrid, BackendQuery};

    struct StubBackend {
        fill: u32,
        short_by: usize,
        queries: Vec<BackendQuery>,
        released: usize,
    }

    impl StubBackend {
        fn filled_with(fill: u32) -> Self {
            Self {
                fill,
                short_by: 0,
                queries: Vec::new(),
                released: 0,
            }
        }
    }

    impl ComputeBackend for StubBackend {
        fn name(&self) -> &str {
            "stub"
        }

        fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError> {
            self.queries.push(*query);
            let cells = (query.resolution as usize).pow(2) - self.short_by;
            Ok(BackendGrid::new(query.resolution, vec![self.fill; cells]))
        }

        fn release(&mut self, _grid: BackendGrid) {
            self.released += 1;
        }
    }

    #[test]
    fn copies_and_releases_backend_grid() {
        let mut backend = StubBackend::filled_with(3);
        let request = SampleRequest::new(-0.5, 0.25, 3.0, 128, 100).unwrap();

        let grid = sample_view(&mut backend, &request).unwrap();

        assert_eq!(grid.resolution(), 128);
        assert!(grid.cells().iter().all(|&v| v == 3));
        assert_eq!(backend.released, 1);
    }

    #[test]
    fn passes_inverted_center_to_backend() {
        let mut backend = StubBackend::filled_with(3);
        let request = SampleRequest::new(-0.5, 0.25, 3.0, 128, 100).unwrap();

        sample_view(&mut backend, &request).unwrap();

        assert_eq!(backend.queries.len(), 1);
        assert_eq!(backend.queries[0].center_x, -0.5);
        assert_eq!(backend.queries[0].negated_center_y, -0.25);
        assert_eq!(backend.queries[0].iterations, 100);
    }

    #[test]
    fn blank_grid_gets_sentinel_in_first_cell() {
        let mut backend = StubBackend::filled_with(0);
        let request = SampleRequest::new(0.0, 0.0, 0.01, 128, 10).unwrap();

        let grid = sample_view(&mut backend, &request).unwrap();

        assert_eq!(grid.get(0, 0), Some(BLANK_GRID_SENTINEL));
        assert_eq!(grid.get(0, 1), Some(0));
    }

    #[test]
    fn non_blank_grid_is_left_untouched() {
        let mut backend = StubBackend::filled_with(5);
        let request = SampleRequest::new(0.0, 0.0, 0.01, 128, 10).unwrap();

        let grid = sample_view(&mut backend, &request).unwrap();

        assert_eq!(grid.get(0, 0), Some(5));
    }

    #[test]
    fn malformed_grid_is_rejected_but_still_released() {
        let mut backend = StubBackend::filled_with(1);
        backend.short_by = 1;
        let request = SampleRequest::new(0.0, 0.0, 1.0, 128, 10).unwrap();

        let result = sample_view(&mut backend, &request);

        assert!(matches!(result, Err(BackendError::Grid(_))));
        assert_eq!(backend.released, 1);
    }
}
