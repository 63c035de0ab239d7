/// FirstPersonController — WASD movement and mouse look.
///
/// Two flavours share this type:
/// - first-person: up/down move along the spatial's world up
/// - free-fly: up/down move along the camera's own up

use crate::camera::Camera;
use crate::config::ControllerSettings;
use crate::input::{ButtonState, CameraAction, InputBinding, InputSource, Key, MouseButton};
use super::{look_offsets, ActionState, CameraController};

#[derive(Debug, Clone)]
pub struct FirstPersonController {
    actions: ActionState,
    last_cursor: Option<(f64, f64)>,
    cursor_enabled: bool,
    cursor_toggle_key: Key,
    zoom_step: f32,
    free_fly: bool,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new(&ControllerSettings::default())
    }
}

impl FirstPersonController {
    pub fn new(settings: &ControllerSettings) -> Self {
        let bindings = settings.bindings.clone().unwrap_or_else(Self::default_bindings);
        Self {
            actions: ActionState::new(bindings),
            last_cursor: None,
            cursor_enabled: false,
            cursor_toggle_key: settings.cursor_toggle_key,
            zoom_step: settings.zoom_step,
            free_fly: false,
        }
    }

    /// Vertical movement follows the camera's up vector.
    pub fn free_fly(settings: &ControllerSettings) -> Self {
        Self { free_fly: true, ..Self::new(settings) }
    }

    /// WASD, Space up, LeftControl down, mouse look, scroll zoom.
    pub fn default_bindings() -> Vec<InputBinding> {
        use CameraAction::*;
        vec![
            InputBinding::new(InputSource::Key(Key::W), MoveForward),
            InputBinding::new(InputSource::Key(Key::S), MoveBackward),
            InputBinding::new(InputSource::Key(Key::A), MoveLeft),
            InputBinding::new(InputSource::Key(Key::D), MoveRight),
            InputBinding::new(InputSource::Key(Key::Space), MoveUp),
            InputBinding::new(InputSource::Key(Key::LeftControl), MoveDown),
            InputBinding::new(InputSource::MouseMovement, RotateCamera),
            InputBinding::new(InputSource::ScrollWheel, Zoom),
        ]
    }

    pub fn is_free_fly(&self) -> bool {
        self.free_fly
    }

    /// Show or hide the cursor. Mouse look is suspended while it is shown.
    pub fn set_cursor_enabled(&mut self, enabled: bool) {
        self.cursor_enabled = enabled;
        // The next sample after re-capture must not produce a jump
        self.last_cursor = None;
    }

    pub fn is_held(&self, action: CameraAction) -> bool {
        self.actions.is_held(action)
    }
}

impl CameraController for FirstPersonController {
    fn update(&mut self, camera: &mut Camera, dt: f32) {
        let spatial = camera.spatial_mut();
        let velocity = spatial.movement_speed() * dt;
        let held = |action| self.actions.is_held(action);

        if held(CameraAction::MoveForward) {
            spatial.move_forward(velocity);
        }
        if held(CameraAction::MoveBackward) {
            spatial.move_forward(-velocity);
        }
        if held(CameraAction::MoveLeft) {
            spatial.move_right(-velocity);
        }
        if held(CameraAction::MoveRight) {
            spatial.move_right(velocity);
        }

        let vertical = match (held(CameraAction::MoveUp), held(CameraAction::MoveDown)) {
            (true, false) => velocity,
            (false, true) => -velocity,
            _ => 0.0,
        };
        if vertical != 0.0 {
            if self.free_fly {
                spatial.move_up(vertical);
            } else {
                let up = spatial.world_up();
                spatial.move_in_direction(up, vertical);
            }
        }
    }

    fn handle_key(&mut self, _camera: &mut Camera, key: Key, state: ButtonState) {
        if key == self.cursor_toggle_key && state == ButtonState::Pressed {
            self.set_cursor_enabled(!self.cursor_enabled);
            crate::lgl_debug!(
                "lgl::FirstPersonController",
                "Cursor {}", if self.cursor_enabled { "released" } else { "captured" }
            );
        }
        self.actions.apply_key(key, state);
    }

    fn handle_mouse_move(&mut self, camera: &mut Camera, x: f64, y: f64) {
        if self.cursor_enabled {
            return;
        }
        let Some(last) = self.last_cursor.replace((x, y)) else { return };
        if self.actions.map().mouse_movement_action() != Some(CameraAction::RotateCamera) {
            return;
        }
        let (yaw, pitch) = look_offsets(last, x, y, camera.mouse_sensitivity());
        camera.spatial_mut().rotate(yaw, pitch);
    }

    fn handle_mouse_button(&mut self, _camera: &mut Camera, button: MouseButton, state: ButtonState) {
        self.actions.apply_mouse_button(button, state);
    }

    fn handle_scroll(&mut self, camera: &mut Camera, _x_offset: f64, y_offset: f64) {
        if self.actions.map().scroll_action() != Some(CameraAction::Zoom) {
            return;
        }
        let fov = camera.settings().field_of_view - y_offset as f32 * self.zoom_step;
        camera.set_field_of_view(fov);
    }

    fn set_bindings(&mut self, bindings: Vec<InputBinding>) {
        self.actions.set_bindings(bindings);
    }

    fn bindings(&self) -> &[InputBinding] {
        self.actions.bindings()
    }

    fn cursor_enabled(&self) -> bool {
        self.cursor_enabled
    }
}

#[cfg(test)]
#[path = "first_person_tests.rs"]
mod tests;
