use glam::Vec3;
use crate::camera::CameraView;
use super::*;

// ============================================================================
// ActionState
// ============================================================================

#[test]
fn test_action_state_tracks_keys() {
    let mut state = ActionState::new(FirstPersonController::default_bindings());
    state.apply_key(Key::W, ButtonState::Pressed);
    assert!(state.is_held(CameraAction::MoveForward));
    state.apply_key(Key::W, ButtonState::Released);
    assert!(!state.is_held(CameraAction::MoveForward));
    // unbound key changes nothing
    state.apply_key(Key::Q, ButtonState::Pressed);
    assert!((0..CameraAction::COUNT).all(|i| !state.held[i]));
}

#[test]
fn test_look_offsets() {
    let (yaw, pitch) = look_offsets((100.0, 100.0), 110.0, 80.0, 0.5);
    assert_eq!(yaw, 5.0);
    assert_eq!(pitch, 10.0);
}

// ============================================================================
// handle_event dispatch
// ============================================================================

#[test]
fn test_handle_event_dispatches() {
    let mut controller = FirstPersonController::default();
    let mut camera = Camera::default();
    camera.spatial_mut().set_position(Vec3::ZERO);

    assert!(controller.handle_event(
        &mut camera,
        &InputEvent::Key { key: Key::W, state: ButtonState::Pressed },
    ));
    controller.update(&mut camera, 1.0);
    assert!((camera.position() - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-4);

    assert!(controller.handle_event(&mut camera, &InputEvent::Scroll { x_offset: 0.0, y_offset: 1.0 }));
    assert_eq!(camera.settings().field_of_view, 43.0);
}

#[test]
fn test_handle_event_ignores_resize() {
    let mut controller = OrbitalController::default();
    let mut camera = Camera::default();
    assert!(!controller.handle_event(&mut camera, &InputEvent::Resized { width: 10, height: 10 }));
}

#[test]
fn test_controllers_are_object_safe() {
    let controllers: Vec<Box<dyn CameraController>> = vec![
        Box::new(FirstPersonController::default()),
        Box::new(OrbitalController::default()),
    ];
    assert!(!controllers[0].cursor_enabled());
    assert!(controllers[1].cursor_enabled());
}
