//! The single mutable record of an interactive session.
//!
//! Every field is clamped at the point of mutation, so no sequence of
//! `with_*` calls can produce a state that breaks the invariants
//! `size > 0`, `resolution >= 128`, `iteration_base >= 1` and
//! `iteration_multiplier >= 0.25`.

use crate::core::data::sample_point::SamplePoint;
use crate::core::errors::validation::ValidationError;
use crate::core::util::coordinate_transform::{clamp_multiplier, clamp_resolution};

pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_SIZE: f64 = 3.0;
pub const DEFAULT_RESOLUTION: u32 = 1000;
pub const DEFAULT_ITERATION_BASE: u32 = 100;
pub const DEFAULT_ITERATION_MULTIPLIER: f64 = 1.0;

pub const MIN_RESOLUTION: u32 = 128;
pub const MIN_ITERATION_BASE: u32 = 1;
pub const MIN_ITERATION_MULTIPLIER: f64 = 0.25;
pub const ITERATION_MULTIPLIER_STEP: f64 = 0.25;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    center_x: f64,
    center_y: f64,
    size: f64,
    resolution: u32,
    iteration_base: u32,
    iteration_multiplier: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            size: DEFAULT_SIZE,
            resolution: DEFAULT_RESOLUTION,
            iteration_base: DEFAULT_ITERATION_BASE,
            iteration_multiplier: DEFAULT_ITERATION_MULTIPLIER,
        }
    }
}

impl ViewportState {
    /// Builds a state with the default multiplier, rejecting values that
    /// would break the invariants instead of clamping them.
    pub fn new(
        center_x: f64,
        center_y: f64,
        size: f64,
        resolution: u32,
        iteration_base: u32,
    ) -> Result<Self, ValidationError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ValidationError::NonFiniteCenter { center_x, center_y });
        }

        if !(size > 0.0 && size.is_finite()) {
            return Err(ValidationError::NonPositiveSize { size });
        }

        if resolution < MIN_RESOLUTION {
            return Err(ValidationError::ResolutionBelowMinimum {
                resolution,
                minimum: MIN_RESOLUTION,
            });
        }

        if iteration_base < MIN_ITERATION_BASE {
            return Err(ValidationError::IterationBaseBelowMinimum {
                iteration_base,
                minimum: MIN_ITERATION_BASE,
            });
        }

        Ok(Self {
            center_x,
            center_y,
            size,
            resolution,
            iteration_base,
            iteration_multiplier: DEFAULT_ITERATION_MULTIPLIER,
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

    #[must_use]
    pub fn iteration_multiplier(&self) -> f64 {
        self.iteration_multiplier
    }

    /// Moves the window centre. Non-finite coordinates leave that axis where
    /// it was.
    #[must_use]
    pub fn with_center(self, center_x: f64, center_y: f64) -> Self {
        Self {
            center_x: if center_x.is_finite() { center_x } else { self.center_x },
            center_y: if center_y.is_finite() { center_y } else { self.center_y },
            ..self
        }
    }

    /// Replaces the window size, keeping it inside the positive finite range.
    #[must_use]
    pub fn with_size(self, size: f64) -> Self {
        let size = if size.is_nan() {
            self.size
        } else {
            size.clamp(f64::MIN_POSITIVE, f64::MAX)
        };

        Self { size, ..self }
    }

    #[must_use]
    pub fn with_resolution(self, resolution: u32) -> Self {
        Self {
            resolution: clamp_resolution(resolution),
            ..self
        }
    }

    #[must_use]
    pub fn with_iteration_multiplier(self, iteration_multiplier: f64) -> Self {
        Self {
            iteration_multiplier: clamp_multiplier(iteration_multiplier),
            ..self
        }
    }
}

impl From<&SamplePoint> for ViewportState {
    fn from(point: &SamplePoint) -> Self {
        Self {
            center_x: point.center_x(),
            center_y: point.center_y(),
            size: point.size(),
            resolution: point.resolution(),
            iteration_base: point.iteration_base(),
            iteration_multiplier: DEFAULT_ITERATION_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_session_defaults() {
        let state = ViewportState::default();

        assert_eq!(state.center_x(), -0.5);
        assert_eq!(state.center_y(), 0.0);
        assert_eq!(state.size(), 3.0);
        assert_eq!(state.resolution(), 1000);
        assert_eq!(state.iteration_base(), 100);
        assert_eq!(state.iteration_multiplier(), 1.0);
    }

    #[test]
    fn new_rejects_resolution_below_minimum() {
        let result = ViewportState::new(0.0, 0.0, 1.0, 64, 100);

        assert_eq!(
            result,
            Err(ValidationError::ResolutionBelowMinimum {
                resolution: 64,
                minimum: 128
            })
        );
    }

    #[test]
    fn new_rejects_zero_iteration_base() {
        let result = ViewportState::new(0.0, 0.0, 1.0, 128, 0);

        assert_eq!(
            result,
            Err(ValidationError::IterationBaseBelowMinimum {
                iteration_base: 0,
                minimum: 1
            })
        );
    }

    #[test]
    fn new_rejects_non_positive_size() {
        assert!(matches!(
            ViewportState::new(0.0, 0.0, 0.0, 128, 1),
            Err(ValidationError::NonPositiveSize { .. })
        ));
        assert!(matches!(
            ViewportState::new(0.0, 0.0, -2.0, 128, 1),
            Err(ValidationError::NonPositiveSize { .. })
        ));
        assert!(matches!(
            ViewportState::new(0.0, 0.0, f64::INFINITY, 128, 1),
            Err(ValidationError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn new_rejects_non_finite_center() {
        assert!(matches!(
            ViewportState::new(f64::NAN, 0.0, 1.0, 128, 1),
            Err(ValidationError::NonFiniteCenter { .. })
        ));
    }

    #[test]
    fn with_resolution_clamps_to_minimum() {
        let state = ViewportState::default().with_resolution(10);

        assert_eq!(state.resolution(), MIN_RESOLUTION);
    }

    #[test]
    fn with_iteration_multiplier_clamps_to_minimum() {
        let state = ViewportState::default().with_iteration_multiplier(-3.0);

        assert_eq!(state.iteration_multiplier(), MIN_ITERATION_MULTIPLIER);
    }

    #[test]
    fn with_size_stays_positive_and_finite() {
        let tiny = ViewportState::default().with_size(0.0);
        let huge = ViewportState::default().with_size(f64::INFINITY);
        let nan = ViewportState::default().with_size(f64::NAN);

        assert!(tiny.size() > 0.0);
        assert!(huge.size().is_finite());
        assert_eq!(nan.size(), DEFAULT_SIZE);
    }

    #[test]
    fn seeding_from_sample_point_resets_multiplier() {
        let point = SamplePoint::new(-0.759856, 0.125547, 3.0 / 64.0, 1500, 600).unwrap();
        let state = ViewportState::from(&point);

        assert_eq!(state.center_x(), -0.759856);
        assert_eq!(state.center_y(), 0.125547);
        assert_eq!(state.size(), 3.0 / 64.0);
        assert_eq!(state.resolution(), 1500);
        assert_eq!(state.iteration_base(), 600);
        assert_eq!(state.iteration_multiplier(), 1.0);
    }
}
