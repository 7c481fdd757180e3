use thiserror::Error;

fn edge_to_buffer_size(edge: u32) -> usize {
    (edge as usize) * (edge as usize) * 3
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("square of edge {edge} needs {expected} bytes, buffer has {buffer_size}")]
    BoundsMismatch {
        edge: u32,
        expected: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// A square RGB image, three bytes per pixel, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    edge: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(edge: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = edge_to_buffer_size(edge);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                edge,
                expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { edge, buffer })
    }

    #[must_use]
    pub fn edge(&self) -> u32 {
        self.edge
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }
}
