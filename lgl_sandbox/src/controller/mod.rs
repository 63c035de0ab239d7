//! Controller module — turns input events into camera motion.
//!
//! A controller never owns the camera. Every handler borrows it for the
//! duration of the call, so one camera can be handed between controllers
//! (see [`CameraSystem::set_controller`](crate::camera_system::CameraSystem::set_controller)).

mod first_person;
mod orbital;

pub use first_person::FirstPersonController;
pub use orbital::OrbitalController;

use crate::camera::Camera;
use crate::input::{
    BindingMap, ButtonState, CameraAction, InputBinding, InputEvent, Key, MouseButton,
};

/// Input-driven camera behaviour.
pub trait CameraController {
    /// Apply held actions. `dt` is in seconds.
    fn update(&mut self, camera: &mut Camera, dt: f32);

    fn handle_key(&mut self, camera: &mut Camera, key: Key, state: ButtonState);

    /// Cursor position in window pixels.
    fn handle_mouse_move(&mut self, camera: &mut Camera, x: f64, y: f64);

    fn handle_mouse_button(&mut self, camera: &mut Camera, button: MouseButton, state: ButtonState);

    fn handle_scroll(&mut self, camera: &mut Camera, x_offset: f64, y_offset: f64);

    /// Replace all bindings. Held actions are released.
    fn set_bindings(&mut self, bindings: Vec<InputBinding>);

    fn bindings(&self) -> &[InputBinding];

    /// True when the OS cursor should be visible and free.
    fn cursor_enabled(&self) -> bool;

    /// Dispatch one event. Returns false for events controllers don't use.
    fn handle_event(&mut self, camera: &mut Camera, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Key { key, state } => self.handle_key(camera, key, state),
            InputEvent::CursorMoved { x, y } => self.handle_mouse_move(camera, x, y),
            InputEvent::MouseButton { button, state } => {
                self.handle_mouse_button(camera, button, state)
            }
            InputEvent::Scroll { x_offset, y_offset } => {
                self.handle_scroll(camera, x_offset, y_offset)
            }
            InputEvent::Resized { .. } => return false,
        }
        true
    }
}

/// Binding list, its lookup map and the held state of every action.
#[derive(Debug, Clone)]
pub(crate) struct ActionState {
    bindings: Vec<InputBinding>,
    map: BindingMap,
    held: [bool; CameraAction::COUNT],
}

impl ActionState {
    pub(crate) fn new(bindings: Vec<InputBinding>) -> Self {
        let map = BindingMap::from_bindings(&bindings);
        Self { bindings, map, held: [false; CameraAction::COUNT] }
    }

    pub(crate) fn set_bindings(&mut self, bindings: Vec<InputBinding>) {
        *self = Self::new(bindings);
    }

    pub(crate) fn bindings(&self) -> &[InputBinding] {
        &self.bindings
    }

    pub(crate) fn map(&self) -> &BindingMap {
        &self.map
    }

    pub(crate) fn is_held(&self, action: CameraAction) -> bool {
        self.held[action.index()]
    }

    pub(crate) fn set_held(&mut self, action: CameraAction, held: bool) {
        self.held[action.index()] = held;
    }

    /// Update the held state of whatever `key` is bound to.
    pub(crate) fn apply_key(&mut self, key: Key, state: ButtonState) {
        if let Some(action) = self.map.key_action(key) {
            self.set_held(action, state.is_down());
        }
    }

    pub(crate) fn apply_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        if let Some(action) = self.map.mouse_button_action(button) {
            self.set_held(action, state.is_down());
        }
    }
}

/// Rotation offsets (yaw, pitch) in degrees for a cursor move.
///
/// Moving right turns right; moving up looks up (window y grows downward).
pub(crate) fn look_offsets(last: (f64, f64), x: f64, y: f64, sensitivity: f32) -> (f32, f32) {
    let yaw = (x - last.0) as f32 * sensitivity;
    let pitch = (last.1 - y) as f32 * sensitivity;
    (yaw, pitch)
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
