/// OrbitalController — drag to orbit, scroll to change distance.

use crate::camera::Camera;
use crate::config::ControllerSettings;
use crate::input::{ButtonState, CameraAction, InputBinding, InputSource, Key, MouseButton};
use super::{look_offsets, ActionState, CameraController};

#[derive(Debug, Clone)]
pub struct OrbitalController {
    actions: ActionState,
    last_cursor: Option<(f64, f64)>,
    orbit_zoom_step: f32,
}

impl Default for OrbitalController {
    fn default() -> Self {
        Self::new(&ControllerSettings::default())
    }
}

impl OrbitalController {
    pub fn new(settings: &ControllerSettings) -> Self {
        let bindings = settings.bindings.clone().unwrap_or_else(Self::default_bindings);
        Self {
            actions: ActionState::new(bindings),
            last_cursor: None,
            orbit_zoom_step: settings.orbit_zoom_step,
        }
    }

    /// Left mouse button rotates, scroll wheel zooms.
    pub fn default_bindings() -> Vec<InputBinding> {
        vec![
            InputBinding::new(InputSource::MouseButton(MouseButton::Left), CameraAction::RotateCamera),
            InputBinding::new(InputSource::ScrollWheel, CameraAction::Zoom),
        ]
    }

    /// Force the rotate action on or off (e.g. from a UI toggle).
    pub fn set_rotating(&mut self, rotating: bool) {
        self.actions.set_held(CameraAction::RotateCamera, rotating);
    }

    pub fn is_rotating(&self) -> bool {
        self.actions.is_held(CameraAction::RotateCamera)
    }
}

impl CameraController for OrbitalController {
    /// Orbiting reacts to events only.
    fn update(&mut self, _camera: &mut Camera, _dt: f32) {}

    fn handle_key(&mut self, _camera: &mut Camera, key: Key, state: ButtonState) {
        self.actions.apply_key(key, state);
    }

    fn handle_mouse_move(&mut self, camera: &mut Camera, x: f64, y: f64) {
        let last = self.last_cursor.replace((x, y));
        if let (Some(last), true) = (last, self.is_rotating()) {
            let (yaw, pitch) = look_offsets(last, x, y, camera.mouse_sensitivity());
            camera.spatial_mut().rotate(yaw, pitch);
        }
    }

    fn handle_mouse_button(&mut self, _camera: &mut Camera, button: MouseButton, state: ButtonState) {
        self.actions.apply_mouse_button(button, state);
    }

    fn handle_scroll(&mut self, camera: &mut Camera, _x_offset: f64, y_offset: f64) {
        if self.actions.map().scroll_action() != Some(CameraAction::Zoom) {
            return;
        }
        let distance = camera.orbit_distance() - y_offset as f32 * self.orbit_zoom_step;
        camera.set_orbit_distance(distance);
    }

    fn set_bindings(&mut self, bindings: Vec<InputBinding>) {
        self.actions.set_bindings(bindings);
    }

    fn bindings(&self) -> &[InputBinding] {
        self.actions.bindings()
    }

    /// The cursor stays visible so it can grab and drag.
    fn cursor_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "orbital_tests.rs"]
mod tests;
