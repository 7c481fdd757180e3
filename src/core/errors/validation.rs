use thiserror::Error;

/// Rejection of a requested view before it reaches the compute backend.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("{resolution} below resolution minimum of {minimum}")]
    ResolutionBelowMinimum { resolution: u32, minimum: u32 },

    #[error("{iterations} below num_iterations minimum of {minimum}")]
    IterationsBelowMinimum { iterations: u32, minimum: u32 },

    #[error("{iteration_base} below iteration base minimum of {minimum}")]
    IterationBaseBelowMinimum { iteration_base: u32, minimum: u32 },

    #[error("sampling window size must be positive and finite: {size}")]
    NonPositiveSize { size: f64 },

    #[error("sampling window centre must be finite: ({center_x}, {center_y})")]
    NonFiniteCenter { center_x: f64, center_y: f64 },
}
