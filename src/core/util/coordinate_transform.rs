//! Pure conversions between grid cells, the complex plane and iteration budgets.

use crate::core::data::complex::Complex;
use crate::core::data::viewport_state::{
    MIN_ITERATION_MULTIPLIER, MIN_RESOLUTION, ViewportState,
};

/// Maps a grid cell to the complex plane for the given viewport.
///
/// `py` is measured from the top of the grid, increasing downward. This is
/// the only place the vertical axis is flipped into mathematical orientation.
#[must_use]
pub fn pixel_to_complex(px: f64, py: f64, state: &ViewportState) -> Complex {
    let resolution = f64::from(state.resolution());
    let dist_per_pixel = state.size() / resolution;
    let flipped_py = resolution - py;
    let dx = px - resolution / 2.0;
    let dy = flipped_py - resolution / 2.0;

    Complex {
        real: state.center_x() + dx * dist_per_pixel,
        imag: state.center_y() + dy * dist_per_pixel,
    }
}

/// Iteration budget for the viewport's zoom depth.
///
/// Each halving of the window relative to `default_size` adds one more
/// multiple of the base budget; views at or above the default size use the
/// base budget. Both roundings are half-to-even.
#[must_use]
pub fn iterations_for_current_zoom(state: &ViewportState, default_size: f64) -> u32 {
    let zoom_factor = (default_size / state.size())
        .log2()
        .round_ties_even()
        .max(1.0);

    let iterations =
        f64::from(state.iteration_base()) * zoom_factor * state.iteration_multiplier();

    // saturating float-to-int conversion
    iterations.round_ties_even() as u32
}

#[must_use]
pub fn clamp_resolution(resolution: u32) -> u32 {
    resolution.max(MIN_RESOLUTION)
}

#[must_use]
pub fn clamp_multiplier(multiplier: f64) -> f64 {
    multiplier.max(MIN_ITERATION_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport_state::DEFAULT_SIZE;
    use proptest::prelude::*;

    fn state(size: f64, resolution: u32, iteration_base: u32) -> ViewportState {
        ViewportState::new(-0.5, 0.0, size, resolution, iteration_base).unwrap()
    }

    #[test]
    fn test_grid_center_maps_to_viewport_center() {
        let state = ViewportState::default();
        let c = pixel_to_complex(500.0, 500.0, &state);

        assert_eq!(c.real, -0.5);
        assert_eq!(c.imag, 0.0);
    }

    #[test]
    fn test_top_left_maps_to_upper_left_corner() {
        let state = ViewportState::default();
        let c = pixel_to_complex(0.0, 0.0, &state);

        assert_eq!(c.real, -2.0);
        assert_eq!(c.imag, 1.5);
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        let state = ViewportState::default();
        let above = pixel_to_complex(500.0, 250.0, &state);
        let below = pixel_to_complex(500.0, 750.0, &state);

        assert!(above.imag > 0.0);
        assert!(below.imag < 0.0);
        assert_eq!(above.imag, -below.imag);
    }

    #[test]
    fn test_iterations_at_default_size_use_base() {
        assert_eq!(
            iterations_for_current_zoom(&ViewportState::default(), DEFAULT_SIZE),
            100
        );
    }

    #[test]
    fn test_iterations_scale_with_zoom_depth() {
        assert_eq!(iterations_for_current_zoom(&state(1.5, 1000, 100), 3.0), 100);
        assert_eq!(iterations_for_current_zoom(&state(0.75, 1000, 100), 3.0), 200);
        assert_eq!(iterations_for_current_zoom(&state(3.0 / 1024.0, 1000, 100), 3.0), 1000);
    }

    #[test]
    fn test_iterations_for_zoomed_out_view_use_base() {
        assert_eq!(iterations_for_current_zoom(&state(24.0, 1000, 100), 3.0), 100);
    }

    #[test]
    fn test_iterations_apply_multiplier() {
        let state = state(0.75, 1000, 100).with_iteration_multiplier(1.25);

        assert_eq!(iterations_for_current_zoom(&state, 3.0), 250);
    }

    #[test]
    fn test_iterations_can_round_to_zero_for_tiny_budget() {
        let state = state(3.0, 128, 1).with_iteration_multiplier(0.25);

        assert_eq!(iterations_for_current_zoom(&state, 3.0), 0);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_resolution(64), 128);
        assert_eq!(clamp_resolution(128), 128);
        assert_eq!(clamp_resolution(2000), 2000);
        assert_eq!(clamp_multiplier(0.0), 0.25);
        assert_eq!(clamp_multiplier(0.5), 0.5);
        assert_eq!(clamp_multiplier(f64::NAN), 0.25);
    }

    proptest! {
        #[test]
        fn iterations_never_decrease_as_size_shrinks(
            exponent in -20i32..60,
            shrink in 1.0f64..64.0,
            base in 1u32..5000,
            steps in 0u32..12,
        ) {
            let larger = state(3.0 * 2f64.powi(-exponent), 1000, base)
                .with_iteration_multiplier(0.25 * f64::from(steps + 1));
            let smaller = larger.with_size(larger.size() / shrink);

            prop_assert!(
                iterations_for_current_zoom(&smaller, DEFAULT_SIZE)
                    >= iterations_for_current_zoom(&larger, DEFAULT_SIZE)
            );
        }

        #[test]
        fn recentering_on_grid_center_is_identity(
            x in -2.0f64..2.0,
            y in -2.0f64..2.0,
            resolution in 128u32..4096,
        ) {
            let state = ViewportState::new(x, y, 3.0, resolution, 100).unwrap();
            let half = f64::from(resolution) / 2.0;
            let c = pixel_to_complex(half, half, &state);

            prop_assert_eq!(c.real, x);
            prop_assert_eq!(c.imag, y);
        }
    }
}
