/// PerspectiveCamera — quaternion-oriented perspective camera.
///
/// Orientation is a unit quaternion, so there is no gimbal lock and no pitch
/// clamp. Caches are only dropped when a setter actually changes a value.

use std::cell::Cell;
use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::config::constants::{WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
use super::CameraView;

#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    position: Vec3,
    rotation: Quat,
    /// Vertical field of view in degrees
    fov: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
    view_cache: Cell<Option<Mat4>>,
    projection_cache: Cell<Option<Mat4>>,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

impl PerspectiveCamera {
    /// Camera at the origin looking down -Z.
    pub fn new(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov,
            aspect_ratio,
            near,
            far,
            view_cache: Cell::new(None),
            projection_cache: Cell::new(None),
        }
    }

    // ===== TRANSFORM =====

    pub fn set_position(&mut self, position: Vec3) {
        if self.position != position {
            self.position = position;
            self.view_cache.set(None);
        }
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Stored normalized.
    pub fn set_rotation(&mut self, rotation: Quat) {
        let rotation = rotation.normalize();
        if self.rotation != rotation {
            self.rotation = rotation;
            self.view_cache.set(None);
        }
    }

    /// Set orientation from (pitch, yaw, roll) in degrees, applied yaw first,
    /// then pitch, then roll.
    pub fn set_euler_angles(&mut self, angles: Vec3) {
        let (pitch, yaw, roll) = (angles.x.to_radians(), angles.y.to_radians(), angles.z.to_radians());
        self.set_rotation(Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll));
    }

    /// (pitch, yaw, roll) in degrees.
    pub fn euler_angles(&self) -> Vec3 {
        let (yaw, pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
    }

    // ===== PROJECTION =====

    pub fn set_perspective(&mut self, fov: f32, aspect_ratio: f32, near: f32, far: f32) {
        if (self.fov, self.aspect_ratio, self.near, self.far) != (fov, aspect_ratio, near, far) {
            self.fov = fov;
            self.aspect_ratio = aspect_ratio;
            self.near = near;
            self.far = far;
            self.projection_cache.set(None);
        }
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        if self.fov != fov {
            self.fov = fov;
            self.projection_cache.set(None);
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if self.aspect_ratio != aspect_ratio {
            self.aspect_ratio = aspect_ratio;
            self.projection_cache.set(None);
        }
    }

    pub fn near_plane(&self) -> f32 {
        self.near
    }

    pub fn set_near_plane(&mut self, near: f32) {
        if self.near != near {
            self.near = near;
            self.projection_cache.set(None);
        }
    }

    pub fn far_plane(&self) -> f32 {
        self.far
    }

    pub fn set_far_plane(&mut self, far: f32) {
        if self.far != far {
            self.far = far;
            self.projection_cache.set(None);
        }
    }
}

impl CameraView for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.rotation * WORLD_FORWARD
    }

    fn right(&self) -> Vec3 {
        self.rotation * WORLD_RIGHT
    }

    fn up(&self) -> Vec3 {
        self.rotation * WORLD_UP
    }

    fn view_matrix(&self) -> Mat4 {
        if let Some(matrix) = self.view_cache.get() {
            return matrix;
        }
        let matrix = Mat4::look_at_rh(self.position, self.position + self.forward(), self.up());
        self.view_cache.set(Some(matrix));
        matrix
    }

    fn projection_matrix(&self) -> Mat4 {
        if let Some(matrix) = self.projection_cache.get() {
            return matrix;
        }
        let matrix = Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect_ratio, self.near, self.far);
        self.projection_cache.set(Some(matrix));
        matrix
    }
}

#[cfg(test)]
#[path = "perspective_camera_tests.rs"]
mod tests;
