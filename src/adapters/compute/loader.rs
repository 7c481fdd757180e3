use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::info;

use crate::adapters::compute::edge_trace::EdgeTraceBackend;
use crate::adapters::compute::escape_time::EscapeTimeBackend;
use crate::core::actions::sample_view::ports::compute_backend::{
    BackendError, BackendQuery, ComputeBackend,
};
use crate::core::data::iteration_grid::IterationGridError;
use crate::core::data::viewport_state::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_ITERATION_BASE, DEFAULT_SIZE, MIN_RESOLUTION,
};

pub const PROBE_RESOLUTION: u32 = MIN_RESOLUTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    #[default]
    EdgeTrace,
    EscapeTime,
}

impl BackendKind {
    pub const ALL: &'static [Self] = &[Self::EdgeTrace, Self::EscapeTime];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EdgeTrace => "edge-trace",
            Self::EscapeTime => "escape-time",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type LoadedBackend = Box<dyn ComputeBackend + Send>;

/// Constructs the backend and proves it can sample before any session uses it.
pub fn load_backend(kind: BackendKind) -> Result<LoadedBackend, BackendError> {
    let mut backend: LoadedBackend = match kind {
        BackendKind::EdgeTrace => Box::new(EdgeTraceBackend::new()),
        BackendKind::EscapeTime => Box::new(EscapeTimeBackend::new()),
    };

    probe(&mut backend)?;

    info!(backend = %kind, "compute backend loaded");

    Ok(backend)
}

/// Samples the default view at the minimum resolution and checks the shape
/// of what comes back.
pub fn probe<B: ComputeBackend + ?Sized>(backend: &mut B) -> Result<(), BackendError> {
    let query = BackendQuery {
        center_x: DEFAULT_CENTER_X,
        negated_center_y: -DEFAULT_CENTER_Y,
        size: DEFAULT_SIZE,
        resolution: PROBE_RESOLUTION,
        iterations: DEFAULT_ITERATION_BASE,
    };

    let grid = backend.sample(&query)?;
    let expected = (PROBE_RESOLUTION as usize).pow(2);
    let actual = grid.as_slice().len();
    backend.release(grid);

    if actual != expected {
        return Err(IterationGridError::DimensionMismatch {
            resolution: PROBE_RESOLUTION,
            expected,
            actual,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::sample_view::ports::compute_backend::BackendGrid;

    struct TruncatingBackend;

    impl ComputeBackend for TruncatingBackend {
        fn name(&self) -> &str {
            "truncating"
        }

        fn sample(&mut self, query: &BackendQuery) -> Result<BackendGrid, BackendError> {
            Ok(BackendGrid::new(query.resolution, vec![0; 10]))
        }

        fn release(&mut self, _grid: BackendGrid) {}
    }

    struct MissingBackend;

    impl ComputeBackend for MissingBackend {
        fn name(&self) -> &str {
            "missing"
        }

        fn sample(&mut self, _query: &BackendQuery) -> Result<BackendGrid, BackendError> {
            Err(BackendError::Unavailable {
                name: "missing".to_string(),
                reason: "library not found".to_string(),
            })
        }

        fn release(&mut self, _grid: BackendGrid) {}
    }

    #[test]
    fn test_every_kind_loads() {
        for &kind in BackendKind::ALL {
            let backend = load_backend(kind).unwrap();
            assert_eq!(backend.name(), kind.name());
        }
    }

    #[test]
    fn test_probe_rejects_wrong_shape() {
        let result = probe(&mut TruncatingBackend);

        assert!(matches!(
            result,
            Err(BackendError::Grid(IterationGridError::DimensionMismatch {
                expected: 16384,
                actual: 10,
                ..
            }))
        ));
    }

    #[test]
    fn test_probe_propagates_backend_failure() {
        let result = probe(&mut MissingBackend);

        assert!(matches!(result, Err(BackendError::Unavailable { .. })));
    }

    #[test]
    fn test_kind_names_match_cli_values() {
        for &kind in BackendKind::ALL {
            let parsed = BackendKind::from_str(kind.name(), false).unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
