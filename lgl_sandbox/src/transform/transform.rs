/// Transform — position, rotation and scale in a single value.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::config::constants::{WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};

/// Local transform: translation, rotation (unit quaternion) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation: rotation.normalize(), scale }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    /// T * R * S
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * WORLD_FORWARD
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * WORLD_RIGHT
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * WORLD_UP
    }

    /// Rotate so that `forward()` points at `target`.
    ///
    /// No-op when `target` coincides with the position.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        if let Some(rotation) = look_rotation(target - self.position, up) {
            self.rotation = rotation;
        }
    }
}

/// Rotation whose forward (-Z) axis points along `direction`.
///
/// Returns `None` for a zero direction. When `direction` is parallel to
/// `up`, an arbitrary perpendicular right axis is chosen.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;
    let right = forward
        .cross(up)
        .try_normalize()
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let up = right.cross(forward);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize())
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
