use crate::core::data::iteration_grid::IterationGrid;

/// Linear normalisation of a grid onto `[0, 1]` using the grid's own range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AutoScale {
    min: u32,
    span: u32,
}

impl AutoScale {
    #[must_use]
    pub fn from_grid(grid: &IterationGrid) -> Self {
        let (min, max) = grid.value_range();

        Self {
            min,
            span: max.saturating_sub(min),
        }
    }

    /// A uniform grid has no range to spread, every value maps to zero.
    #[must_use]
    pub fn normalise(&self, value: u32) -> f64 {
        if self.span == 0 {
            return 0.0;
        }

        let offset = value.saturating_sub(self.min).min(self.span);
        f64::from(offset) / f64::from(self.span)
    }
}
