use crate::core::actions::generate_pixel_buffer::auto_scale::AutoScale;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

/// Colours a grid at full resolution, rescaling the colour map to the
/// grid's own value range.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    grid: &IterationGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    let scale = AutoScale::from_grid(grid);
    let mut buffer: PixelBufferData = Vec::with_capacity(grid.cells().len() * 3);

    for &value in grid.cells() {
        let Colour { r, g, b } = mapper.map(scale.normalise(value));

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(grid.resolution(), buffer)
}
