/// Input events as seen by camera controllers.

use serde::{Deserialize, Serialize};

/// Keyboard keys the sandbox can bind.
///
/// Serialized by variant name so TOML bindings stay readable
/// (`source = { key = "LeftShift" }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    Unknown,
}

/// Press state of a key or mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonState {
    Pressed,
    Released,
    /// Auto-repeat while held
    Repeat,
}

impl ButtonState {
    /// Pressed or repeating.
    pub fn is_down(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Repeat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// One window-system event, reduced to what the camera layer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: ButtonState },
    /// Absolute cursor position in window pixels (origin top-left)
    CursorMoved { x: f64, y: f64 },
    MouseButton { button: MouseButton, state: ButtonState },
    /// Scroll offsets in lines (positive y = away from the user)
    Scroll { x_offset: f64, y_offset: f64 },
    /// New framebuffer size in pixels
    Resized { width: u32, height: u32 },
}
