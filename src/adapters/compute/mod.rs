pub mod edge_trace;
pub mod escape_time;
pub mod loader;
