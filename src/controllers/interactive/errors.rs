use thiserror::Error;

use crate::controllers::interactive::ports::render_surface::SurfaceError;
use crate::core::actions::sample_view::ports::compute_backend::BackendError;
use crate::core::errors::validation::ValidationError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid view: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("no surface is open")]
    NotStarted,
}
