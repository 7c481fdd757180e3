pub mod file;
pub mod pixels;
