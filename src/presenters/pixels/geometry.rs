//! Mapping between a window's display buffer and grid cells.

/// Largest display buffer edge; larger grids are shown downsampled.
pub const MAX_DISPLAY_EDGE: u32 = 1000;

#[must_use]
pub fn display_edge(resolution: u32) -> u32 {
    resolution.min(MAX_DISPLAY_EDGE)
}

/// Converts a display buffer pixel to grid cell coordinates, top-left origin.
#[must_use]
pub fn display_to_grid(col: usize, row: usize, display_edge: u32, resolution: u32) -> (f64, f64) {
    let scale = f64::from(resolution) / f64::from(display_edge.max(1));

    (col as f64 * scale, row as f64 * scale)
}
