pub mod compute;
pub mod pixel_format;
