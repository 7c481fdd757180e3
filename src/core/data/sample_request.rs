use crate::core::actions::sample_view::ports::compute_backend::BackendQuery;
use crate::core::data::viewport_state::{MIN_RESOLUTION, ViewportState};
use crate::core::errors::validation::ValidationError;

pub const MIN_ITERATIONS: u32 = 1;

/// A validated request for one sampled frame.
///
/// `center_y` is in mathematical orientation (increasing upward). The
/// inversion expected by the backend happens in [`SampleRequest::backend_query`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleRequest {
    center_x: f64,
    center_y: f64,
    size: f64,
    resolution: u32,
    iterations: u32,
}

impl SampleRequest {
    pub fn new(
        center_x: f64,
        center_y: f64,
        size: f64,
        resolution: u32,
        iterations: u32,
    ) -> Result<Self, ValidationError> {
        if resolution < MIN_RESOLUTION {
            return Err(ValidationError::ResolutionBelowMinimum {
                resolution,
                minimum: MIN_RESOLUTION,
            });
        }

        if iterations < MIN_ITERATIONS {
            return Err(ValidationError::IterationsBelowMinimum {
                iterations,
                minimum: MIN_ITERATIONS,
            });
        }

        if !(size > 0.0 && size.is_finite()) {
            return Err(ValidationError::NonPositiveSize { size });
        }

        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ValidationError::NonFiniteCenter { center_x, center_y });
        }

        Ok(Self {
            center_x,
            center_y,
            size,
            resolution,
            iterations,
        })
    }

    pub fn for_viewport(state: &ViewportState, iterations: u32) -> Result<Self, ValidationError> {
        Self::new(
            state.center_x(),
            state.center_y(),
            state.size(),
            state.resolution(),
            iterations,
        )
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn backend_query(&self) -> BackendQuery {
        BackendQuery {
            center_x: self.center_x,
            negated_center_y: -self.center_y,
            size: self.size,
            resolution: self.resolution,
            iterations: self.iterations,
        }
    }
}
