//! Discrete input delivered by a render surface.
//!
//! Pointer coordinates are raw grid cells with the origin at the top-left
//! corner and `py` increasing downward.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Pointer {
        button: PointerButton,
        px: f64,
        py: f64,
    },
    Key {
        code: KeyCode,
    },
}

impl InputEvent {
    #[must_use]
    pub fn pointer(button: PointerButton, px: f64, py: f64) -> Self {
        Self::Pointer { button, px, py }
    }

    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::Key { code }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer { button, px, py } => write!(f, "{button:?} click at ({px}, {py})"),
            Self::Key { code } => write!(f, "key {code:?}"),
        }
    }
}
