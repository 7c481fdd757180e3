//! The viewport state machine.
//!
//! [`transition`] is pure: it maps the current state and one input event to
//! the next state and the kind of redraw the new frame needs. Sampling and
//! drawing happen afterwards in the session controller.

use crate::controllers::interactive::input_event::{InputEvent, KeyCode, PointerButton};
use crate::core::data::viewport_state::{ITERATION_MULTIPLIER_STEP, ViewportState};
use crate::core::util::coordinate_transform::pixel_to_complex;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RedrawAction {
    /// Same grid shape: replace the samples on the open surface.
    UpdateInPlace,
    /// Grid shape changed: close the surface and open a new one.
    Rebuild,
}

#[must_use]
pub fn transition(state: ViewportState, event: InputEvent) -> (ViewportState, RedrawAction) {
    match event {
        InputEvent::Pointer { button, px, py } => {
            let center = pixel_to_complex(px, py, &state);
            let recentred = state.with_center(center.real, center.imag);

            let next = match button {
                PointerButton::Primary => recentred.with_size(state.size() / 2.0),
                PointerButton::Secondary => recentred.with_size(state.size() * 2.0),
                PointerButton::Auxiliary => recentred,
            };

            (next, RedrawAction::UpdateInPlace)
        }
        InputEvent::Key { code } => match code {
            KeyCode::Up => (
                state.with_iteration_multiplier(
                    state.iteration_multiplier() + ITERATION_MULTIPLIER_STEP,
                ),
                RedrawAction::UpdateInPlace,
            ),
            KeyCode::Down => (
                state.with_iteration_multiplier(
                    state.iteration_multiplier() - ITERATION_MULTIPLIER_STEP,
                ),
                RedrawAction::UpdateInPlace,
            ),
            KeyCode::Right => (
                state.with_resolution(state.resolution().saturating_mul(2)),
                RedrawAction::Rebuild,
            ),
            KeyCode::Left => (
                state.with_resolution(state.resolution().div_ceil(2)),
                RedrawAction::Rebuild,
            ),
        },
    }
}
