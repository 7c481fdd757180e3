pub mod auto_scale;
pub mod generate_pixel_buffer;
pub mod ports;
