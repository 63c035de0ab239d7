//! Sandbox configuration with TOML support.
//!
//! Every struct uses `#[serde(default)]`, so a partial file (e.g. only a
//! `[camera]` table overriding the field of view) is valid.

use std::path::Path;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::camera::{CameraMode, ProjectionType};
use crate::error::{Error, Result};
use crate::input::{InputBinding, Key};
use crate::utils::read_text_file;

/// Limits and defaults shared by cameras and controllers.
pub mod constants {
    use glam::Vec3;

    /// Narrowest field of view in degrees
    pub const MIN_FOV: f32 = 1.0;
    /// Widest field of view in degrees
    pub const MAX_FOV: f32 = 90.0;
    /// Pitch floor in degrees (keeps forward away from the world up axis)
    pub const MIN_PITCH: f32 = -89.0;
    /// Pitch ceiling in degrees
    pub const MAX_PITCH: f32 = 89.0;
    /// Closest an orbital camera may get to its target
    pub const MIN_ORBIT_DISTANCE: f32 = 0.1;
    pub const DEFAULT_ORBIT_DISTANCE: f32 = 10.0;
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
    /// -90 degrees faces down the negative Z axis
    pub const DEFAULT_YAW: f32 = -90.0;
    pub const DEFAULT_PITCH: f32 = 0.0;
    /// Units per second
    pub const DEFAULT_MOVEMENT_SPEED: f32 = 5.0;
    pub const WORLD_UP: Vec3 = Vec3::Y;
    pub const WORLD_RIGHT: Vec3 = Vec3::X;
    pub const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;
}

/// Camera projection and look parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    /// Viewport width / height.
    pub aspect_ratio: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
    /// Degrees of rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,
    /// Half height of the orthographic view volume.
    pub ortho_size: f32,
    pub projection: ProjectionType,
    pub mode: CameraMode,
    /// Initial eye position.
    pub position: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            field_of_view: 45.0,
            aspect_ratio: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            mouse_sensitivity: 0.1,
            ortho_size: 10.0,
            projection: ProjectionType::Perspective,
            mode: CameraMode::Free,
            position: constants::DEFAULT_POSITION,
        }
    }
}

impl CameraSettings {
    /// Check the values a projection matrix cannot tolerate.
    ///
    /// Every bound is written as "must hold", so NaN fails it.
    pub fn validate(&self) -> Result<()> {
        if !(constants::MIN_FOV..=constants::MAX_FOV).contains(&self.field_of_view) {
            return Err(Error::InvalidConfig(format!(
                "field_of_view {} outside [{}, {}]",
                self.field_of_view, constants::MIN_FOV, constants::MAX_FOV
            )));
        }
        if !is_positive(self.aspect_ratio) {
            return Err(Error::InvalidConfig(format!(
                "aspect_ratio must be positive and finite, got {}", self.aspect_ratio
            )));
        }
        if !is_positive(self.near_plane) {
            return Err(Error::InvalidConfig(format!(
                "near_plane must be positive and finite, got {}", self.near_plane
            )));
        }
        if !(is_positive(self.far_plane) && self.far_plane > self.near_plane) {
            return Err(Error::InvalidConfig(format!(
                "far_plane {} must be finite and exceed near_plane {}", self.far_plane, self.near_plane
            )));
        }
        if !is_positive(self.ortho_size) {
            return Err(Error::InvalidConfig(format!(
                "ortho_size must be positive and finite, got {}", self.ortho_size
            )));
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Controller movement and binding parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Units per second for keyboard movement.
    pub move_speed: f32,
    /// Degrees of field of view per scroll notch (first-person).
    pub zoom_step: f32,
    /// Orbit distance per scroll notch (orbital).
    pub orbit_zoom_step: f32,
    /// Key that frees the cursor and suspends mouse look.
    pub cursor_toggle_key: Key,
    /// Replaces the controller's default bindings when set.
    pub bindings: Option<Vec<InputBinding>>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            move_speed: constants::DEFAULT_MOVEMENT_SPEED,
            zoom_step: 2.0,
            orbit_zoom_step: 1.0,
            cursor_toggle_key: Key::LeftAlt,
            bindings: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub camera: CameraSettings,
    pub controller: ControllerSettings,
}

impl SandboxConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SandboxConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text_file(path)?;
        let config = Self::from_toml_str(&content)?;
        crate::lgl_info!("lgl::SandboxConfig", "Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        if !(self.controller.move_speed.is_finite() && self.controller.move_speed >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "move_speed must be finite and not negative, got {}", self.controller.move_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
