//! Interactive exploration sessions.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: [`InputEvent`]s pulled from a [`RenderSurface`]
//! - **Core**: the pure [`transition`] function over [`ViewportState`]
//! - **Output**: sampled grids pushed back to the [`RenderSurface`]
//!
//! [`ViewportState`]: crate::core::data::viewport_state::ViewportState

pub mod errors;
pub mod input_event;
pub mod ports;
mod session;
pub mod transition;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::SessionError;
pub use input_event::{InputEvent, KeyCode, PointerButton};
pub use ports::render_surface::{RenderSurface, SurfaceError, SurfaceHandle};
pub use session::{POST_UPDATE_PAUSE, SessionController};
pub use transition::{RedrawAction, transition};
