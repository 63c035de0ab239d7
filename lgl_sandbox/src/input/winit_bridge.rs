/// Translation from winit window events to sandbox input events.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::event::{ButtonState, InputEvent, Key, MouseButton};

/// Pixels of touchpad travel treated as one scroll line.
const PIXELS_PER_LINE: f64 = 20.0;

impl Key {
    /// Map a physical winit key code. Unmapped codes become `Key::Unknown`.
    pub fn from_key_code(code: KeyCode) -> Key {
        match code {
            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,
            KeyCode::Digit0 => Key::Digit0,
            KeyCode::Digit1 => Key::Digit1,
            KeyCode::Digit2 => Key::Digit2,
            KeyCode::Digit3 => Key::Digit3,
            KeyCode::Digit4 => Key::Digit4,
            KeyCode::Digit5 => Key::Digit5,
            KeyCode::Digit6 => Key::Digit6,
            KeyCode::Digit7 => Key::Digit7,
            KeyCode::Digit8 => Key::Digit8,
            KeyCode::Digit9 => Key::Digit9,
            KeyCode::Space => Key::Space,
            KeyCode::Enter => Key::Enter,
            KeyCode::Escape => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::ShiftLeft => Key::LeftShift,
            KeyCode::ShiftRight => Key::RightShift,
            KeyCode::ControlLeft => Key::LeftControl,
            KeyCode::ControlRight => Key::RightControl,
            KeyCode::AltLeft => Key::LeftAlt,
            KeyCode::AltRight => Key::RightAlt,
            _ => Key::Unknown,
        }
    }
}

impl MouseButton {
    pub fn from_winit(button: winit::event::MouseButton) -> MouseButton {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Back => MouseButton::Other(3),
            winit::event::MouseButton::Forward => MouseButton::Other(4),
            winit::event::MouseButton::Other(id) => MouseButton::Other(id),
        }
    }
}

fn button_state(state: ElementState, repeat: bool) -> ButtonState {
    match (state, repeat) {
        (ElementState::Pressed, true) => ButtonState::Repeat,
        (ElementState::Pressed, false) => ButtonState::Pressed,
        (ElementState::Released, _) => ButtonState::Released,
    }
}

/// Reduce a winit window event to an [`InputEvent`].
///
/// Returns `None` for events the camera layer ignores (focus, redraw, ...).
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(code) => Key::from_key_code(code),
                PhysicalKey::Unidentified(_) => Key::Unknown,
            };
            Some(InputEvent::Key { key, state: button_state(event.state, event.repeat) })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::MouseButton {
            button: MouseButton::from_winit(*button),
            state: button_state(*state, false),
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let (x_offset, y_offset) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x as f64, *y as f64),
                MouseScrollDelta::PixelDelta(pos) => (pos.x / PIXELS_PER_LINE, pos.y / PIXELS_PER_LINE),
            };
            Some(InputEvent::Scroll { x_offset, y_offset })
        }
        WindowEvent::Resized(size) => Some(InputEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "winit_bridge_tests.rs"]
mod tests;
