//! Pixel format conversion helpers for presentation adapters.

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("cannot upscale a {src_edge}px image to {dst_edge}px")]
    Upscale { src_edge: u32, dst_edge: u32 },

    #[error("RGBA frame of {dst_edge}px needs {expected} bytes, got {actual}")]
    FrameLength {
        dst_edge: u32,
        expected: usize,
        actual: usize,
    },
}

/// Copies a square RGB image into an RGBA frame of edge `dst_edge`, setting
/// alpha to 255 and dropping pixels nearest-neighbour when the frame is
/// smaller than the image.
pub fn downsample_rgb_to_rgba(
    src: &PixelBuffer,
    dst_edge: u32,
    dst: &mut [u8],
) -> Result<(), PixelFormatError> {
    let src_edge = src.edge();

    if dst_edge > src_edge {
        return Err(PixelFormatError::Upscale { src_edge, dst_edge });
    }

    let expected = (dst_edge as usize) * (dst_edge as usize) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::FrameLength {
            dst_edge,
            expected,
            actual: dst.len(),
        });
    }

    if dst_edge == 0 {
        return Ok(());
    }

    let src_edge = src_edge as usize;
    let dst_edge = dst_edge as usize;
    let rgb = src.buffer();

    for (dst_row, row_pixels) in dst.chunks_exact_mut(dst_edge * 4).enumerate() {
        let src_row = dst_row * src_edge / dst_edge;

        for (dst_col, dst_pixel) in row_pixels.chunks_exact_mut(4).enumerate() {
            let src_col = dst_col * src_edge / dst_edge;
            let offset = (src_row * src_edge + src_col) * 3;

            dst_pixel[..3].copy_from_slice(&rgb[offset..offset + 3]);
            dst_pixel[3] = 255;
        }
    }

    Ok(())
}
