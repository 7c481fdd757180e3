use crate::core::data::viewport_state::ViewportState;
use crate::core::errors::validation::ValidationError;

/// An immutable preset view used to seed a session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplePoint {
    center_x: f64,
    center_y: f64,
    size: f64,
    resolution: u32,
    iteration_base: u32,
}

impl SamplePoint {
    pub fn new(
        center_x: f64,
        center_y: f64,
        size: f64,
        resolution: u32,
        iteration_base: u32,
    ) -> Result<Self, ValidationError> {
        // Same invariants as a live viewport.
        ViewportState::new(center_x, center_y, size, resolution, iteration_base)?;

        Ok(Self {
            center_x,
            center_y,
            size,
            resolution,
            iteration_base,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn iteration_base(&self) -> u32 {
        self.iteration_base
    }
}
