//! CameraSystem — one camera, one controller and a frame clock.
//!
//! The window loop feeds translated [`InputEvent`]s to
//! [`CameraSystem::handle_event`] and calls [`CameraSystem::tick`] once per
//! frame. Afterwards it reads [`CameraSystem::cursor_mode`] to grab or
//! release the OS cursor.

use glam::Vec3;
use crate::camera::{Camera, CameraMode};
use crate::config::{ControllerSettings, SandboxConfig};
use crate::controller::{CameraController, FirstPersonController, OrbitalController};
use crate::input::{InputBinding, InputEvent};
use crate::time::FrameClock;

/// What the window should do with the OS cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Visible and free
    Normal,
    /// Hidden and captured for mouse look
    Disabled,
}

pub struct CameraSystem {
    camera: Camera,
    controller: Box<dyn CameraController>,
    controller_settings: ControllerSettings,
    clock: FrameClock,
}

impl Default for CameraSystem {
    fn default() -> Self {
        Self::new(&SandboxConfig::default())
    }
}

impl CameraSystem {
    /// Build the camera and the controller matching `config.camera.mode`.
    pub fn new(config: &SandboxConfig) -> Self {
        let mut camera = Camera::new(config.camera);
        camera.spatial_mut().set_movement_speed(config.controller.move_speed);
        let controller = controller_for_mode(&mut camera, config.camera.mode, &config.controller);

        crate::lgl_info!(
            "lgl::CameraSystem",
            "Camera system ready ({:?} mode, {:?} projection)",
            config.camera.mode, config.camera.projection
        );

        Self {
            camera,
            controller,
            controller_settings: config.controller.clone(),
            clock: FrameClock::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn controller(&self) -> &dyn CameraController {
        self.controller.as_ref()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Swap the controller. The camera keeps its current pose.
    pub fn set_controller(&mut self, controller: Box<dyn CameraController>) {
        self.controller = controller;
    }

    /// Switch camera mode and install the matching controller.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.camera.set_mode(mode);
        self.controller = controller_for_mode(&mut self.camera, mode, &self.controller_settings);
    }

    pub fn set_bindings(&mut self, bindings: Vec<InputBinding>) {
        self.controller.set_bindings(bindings);
    }

    /// Route one input event. Resizes update the aspect ratio; everything
    /// else goes to the controller. Returns true if the event was used.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Resized { width, height } => {
                let aspect_ratio = if width > 0 && height > 0 {
                    width as f32 / height as f32
                } else {
                    1.0
                };
                self.camera.set_aspect_ratio(aspect_ratio);
                true
            }
            _ => self.controller.handle_event(&mut self.camera, event),
        }
    }

    /// Apply held controller actions over `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.controller.update(&mut self.camera, dt);
    }

    /// Advance the frame clock and update with the measured delta.
    pub fn tick(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.update(dt);
        dt
    }

    pub fn cursor_mode(&self) -> CursorMode {
        if self.controller.cursor_enabled() {
            CursorMode::Normal
        } else {
            CursorMode::Disabled
        }
    }
}

fn controller_for_mode(
    camera: &mut Camera,
    mode: CameraMode,
    settings: &ControllerSettings,
) -> Box<dyn CameraController> {
    match mode {
        CameraMode::Orbital => {
            if camera.target().is_none() {
                camera.set_target(Vec3::ZERO);
            }
            Box::new(OrbitalController::new(settings))
        }
        CameraMode::FirstPerson => Box::new(FirstPersonController::new(settings)),
        CameraMode::Free => Box::new(FirstPersonController::free_fly(settings)),
    }
}

#[cfg(test)]
#[path = "camera_system_tests.rs"]
mod tests;
