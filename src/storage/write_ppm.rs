use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filepath)?);

    // P6 is binary RGB: magic, width height, max colour value
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.edge(), buffer.edge())?;
    writeln!(file, "255")?;
    file.write_all(buffer.buffer())?;

    file.flush()
}
