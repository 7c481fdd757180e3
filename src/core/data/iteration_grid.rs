use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IterationGridError {
    #[error("grid of resolution {resolution} needs {expected} cells, got {actual}")]
    DimensionMismatch {
        resolution: u32,
        expected: usize,
        actual: usize,
    },
}

/// Caller-owned `resolution × resolution` escape counts, row-major with row 0
/// at the top of the displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    resolution: u32,
    cells: Vec<u32>,
}

fn cell_count(resolution: u32) -> usize {
    (resolution as usize) * (resolution as usize)
}

impl IterationGrid {
    pub fn from_cells(resolution: u32, cells: Vec<u32>) -> Result<Self, IterationGridError> {
        let expected = cell_count(resolution);

        if cells.len() != expected {
            return Err(IterationGridError::DimensionMismatch {
                resolution,
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self { resolution, cells })
    }

    /// Copies backend-owned cells into a new grid.
    pub fn copy_from(resolution: u32, cells: &[u32]) -> Result<Self, IterationGridError> {
        Self::from_cells(resolution, cells.to_vec())
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.resolution || col >= self.resolution {
            return None;
        }

        self.cells
            .get(row as usize * self.resolution as usize + col as usize)
            .copied()
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        if row >= self.resolution {
            return None;
        }

        let width = self.resolution as usize;
        let start = row as usize * width;
        Some(&self.cells[start..start + width])
    }

    /// Smallest and largest value in the grid.
    #[must_use]
    pub fn value_range(&self) -> (u32, u32) {
        self.cells
            .iter()
            .fold((u32::MAX, u32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// True when every cell is zero, i.e. nothing diverged within budget.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    pub(crate) fn set_first_cell(&mut self, value: u32) {
        if let Some(first) = self.cells.first_mut() {
            *first = value;
        }
    }
}
