pub mod colour;
pub mod complex;
pub mod iteration_grid;
pub mod pixel_buffer;
pub mod sample_point;
pub mod sample_request;
pub mod viewport_state;
