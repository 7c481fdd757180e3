//! Translates winit input into session events.

use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::controllers::interactive::input_event::{KeyCode, PointerButton};

#[must_use]
pub fn map_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Auxiliary),
        _ => None,
    }
}

#[must_use]
pub fn map_physical_key(key: PhysicalKey) -> Option<KeyCode> {
    match key {
        PhysicalKey::Code(WinitKeyCode::ArrowUp) => Some(KeyCode::Up),
        PhysicalKey::Code(WinitKeyCode::ArrowDown) => Some(KeyCode::Down),
        PhysicalKey::Code(WinitKeyCode::ArrowLeft) => Some(KeyCode::Left),
        PhysicalKey::Code(WinitKeyCode::ArrowRight) => Some(KeyCode::Right),
        _ => None,
    }
}

/// Key presses only; auto-repeat is dropped so a held key does not queue
/// a rebuild per repeat.
#[must_use]
pub fn map_key_event(event: &KeyEvent) -> Option<KeyCode> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }

    map_physical_key(event.physical_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_buttons_are_mapped() {
        assert_eq!(map_button(MouseButton::Left), Some(PointerButton::Primary));
        assert_eq!(map_button(MouseButton::Right), Some(PointerButton::Secondary));
        assert_eq!(map_button(MouseButton::Middle), Some(PointerButton::Auxiliary));
        assert_eq!(map_button(MouseButton::Back), None);
    }

    #[test]
    fn test_only_arrow_keys_are_mapped() {
        assert_eq!(
            map_physical_key(PhysicalKey::Code(WinitKeyCode::ArrowRight)),
            Some(KeyCode::Right)
        );
        assert_eq!(map_physical_key(PhysicalKey::Code(WinitKeyCode::KeyW)), None);
    }
}
