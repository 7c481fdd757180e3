use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,

    #[error("sample grid must have at least one cell per axis")]
    ZeroResolutionError,

    #[error("sample window size must be positive and finite: {size}")]
    InvalidSizeError { size: f64 },
}
