use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::KeyCode;
use super::*;

#[test]
fn test_movement_keys_map() {
    assert_eq!(Key::from_key_code(KeyCode::KeyW), Key::W);
    assert_eq!(Key::from_key_code(KeyCode::KeyA), Key::A);
    assert_eq!(Key::from_key_code(KeyCode::Space), Key::Space);
    assert_eq!(Key::from_key_code(KeyCode::ControlLeft), Key::LeftControl);
    assert_eq!(Key::from_key_code(KeyCode::AltLeft), Key::LeftAlt);
}

#[test]
fn test_unmapped_key_is_unknown() {
    assert_eq!(Key::from_key_code(KeyCode::F12), Key::Unknown);
}

#[test]
fn test_mouse_buttons_map() {
    assert_eq!(MouseButton::from_winit(winit::event::MouseButton::Left), MouseButton::Left);
    assert_eq!(MouseButton::from_winit(winit::event::MouseButton::Other(9)), MouseButton::Other(9));
}

#[test]
fn test_button_state_repeat() {
    assert_eq!(button_state(ElementState::Pressed, true), ButtonState::Repeat);
    assert_eq!(button_state(ElementState::Pressed, false), ButtonState::Pressed);
    assert_eq!(button_state(ElementState::Released, true), ButtonState::Released);
}

#[test]
fn test_resize_translates() {
    let event = WindowEvent::Resized(PhysicalSize::new(800, 600));
    assert_eq!(
        translate_window_event(&event),
        Some(InputEvent::Resized { width: 800, height: 600 })
    );
}

#[test]
fn test_ignored_events() {
    assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
    assert_eq!(translate_window_event(&WindowEvent::RedrawRequested), None);
}
