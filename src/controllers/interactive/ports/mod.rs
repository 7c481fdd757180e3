//! Port definitions for the interactive controller.

pub mod render_surface;
