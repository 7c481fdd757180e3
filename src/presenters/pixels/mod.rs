pub mod geometry;

#[cfg(feature = "gui")]
pub mod event_mapping;
#[cfg(feature = "gui")]
pub mod surface;
#[cfg(feature = "gui")]
mod window_view;
