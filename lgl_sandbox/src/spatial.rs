//! Spatial — a position plus Euler-angle orientation.
//!
//! Yaw, pitch and roll (degrees) are the source of truth. The forward, right
//! and up vectors are rebuilt from them after every change and always form an
//! orthonormal basis. Pitch stays inside [MIN_PITCH, MAX_PITCH] so forward
//! never lines up with the world up axis.
//!
//! Each mutation bumps [`Spatial::revision`]. Owners that cache matrices
//! derived from a Spatial compare revisions instead of hooking callbacks.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::config::constants::{
    DEFAULT_MOVEMENT_SPEED, DEFAULT_PITCH, DEFAULT_YAW, MAX_PITCH, MIN_PITCH, WORLD_UP,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Spatial {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,
    world_up: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    movement_speed: f32,
    revision: u64,
}

impl Default for Spatial {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Spatial {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut spatial = Self {
            position,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            roll: 0.0,
            world_up: WORLD_UP,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            revision: 0,
        };
        spatial.update_basis();
        spatial
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Orientation as a quaternion (forward maps to -Z, up to +Y).
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.right, self.up, -self.forward)).normalize()
    }

    /// Rotation then translation (no scale).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.touch();
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed.max(0.0);
        self.touch();
    }

    /// Set all three angles in degrees. Pitch is clamped.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(MIN_PITCH, MAX_PITCH);
        self.roll = roll;
        self.update_basis();
    }

    /// Add offsets (degrees) to yaw and pitch. Pitch is clamped.
    pub fn rotate(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.yaw += yaw_offset;
        self.pitch = (self.pitch + pitch_offset).clamp(MIN_PITCH, MAX_PITCH);
        self.update_basis();
    }

    /// Change the reference up axis. Forward is kept; right and up follow.
    ///
    /// A zero vector is ignored.
    pub fn set_world_up(&mut self, up: Vec3) {
        if let Some(up) = up.try_normalize() {
            self.world_up = up;
            self.update_basis();
        }
    }

    // ===== MOVEMENT =====

    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward * distance;
        self.touch();
    }

    pub fn move_right(&mut self, distance: f32) {
        self.position += self.right * distance;
        self.touch();
    }

    pub fn move_up(&mut self, distance: f32) {
        self.position += self.up * distance;
        self.touch();
    }

    /// Move `distance` units along `direction`. A zero direction does nothing.
    pub fn move_in_direction(&mut self, direction: Vec3, distance: f32) {
        if let Some(direction) = direction.try_normalize() {
            self.position += direction * distance;
            self.touch();
        }
    }

    /// Turn to face `target` (roll is reset). No-op if `target` is the position.
    pub fn look_at(&mut self, target: Vec3) {
        if let Some(direction) = (target - self.position).try_normalize() {
            self.face(direction);
        }
    }

    /// Orbit around `point` by `angle` degrees about `axis`.
    ///
    /// Both the position and the orientation are rotated.
    pub fn rotate_around(&mut self, point: Vec3, axis: Vec3, angle: f32) {
        let Some(axis) = axis.try_normalize() else { return };
        let rotation = Quat::from_axis_angle(axis, angle.to_radians());
        self.position = point + rotation * (self.position - point);
        self.set_from_basis(rotation * self.forward, rotation * self.up);
    }

    /// Place the spatial at parameter `t` along a polyline.
    ///
    /// `t` wraps into [0, 1) and is split evenly across segments. When a
    /// following segment exists the spatial turns to face along it.
    pub fn follow_path(&mut self, path: &[Vec3], t: f32) {
        match path.len() {
            0 => return,
            1 => {
                self.set_position(path[0]);
                return;
            }
            _ => {}
        }

        let t = t.rem_euclid(1.0);
        let segment_length = 1.0 / (path.len() - 1) as f32;
        let segment = ((t / segment_length) as usize).min(path.len() - 2);
        let segment_t = (t - segment as f32 * segment_length) / segment_length;

        let position = path[segment].lerp(path[segment + 1], segment_t);
        self.set_position(position);

        if segment + 2 < path.len() {
            let look_target = path[segment + 1].lerp(path[segment + 2], segment_t);
            if let Some(direction) = (look_target - position).try_normalize() {
                self.face(direction);
            }
        }
    }

    /// Blend toward `target`: position is lerped and orientation slerped.
    ///
    /// `t` is clamped to [0, 1].
    pub fn interpolate_to(&mut self, target: &Spatial, t: f32) {
        let t = t.clamp(0.0, 1.0);
        self.position = self.position.lerp(target.position, t);
        let rotation = self.rotation().slerp(target.rotation(), t);
        self.set_from_basis(rotation * Vec3::NEG_Z, rotation * Vec3::Y);
    }

    // ===== INTERNAL =====

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Point forward along `direction` with no roll.
    fn face(&mut self, direction: Vec3) {
        self.yaw = direction.z.atan2(direction.x).to_degrees();
        self.pitch = direction.y.clamp(-1.0, 1.0).asin().to_degrees().clamp(MIN_PITCH, MAX_PITCH);
        self.roll = 0.0;
        self.update_basis();
    }

    /// Recover yaw, pitch and roll from a forward/up pair.
    fn set_from_basis(&mut self, forward: Vec3, up: Vec3) {
        let Some(forward) = forward.try_normalize() else {
            self.touch();
            return;
        };
        self.face(forward);
        // `face` left the roll-free basis in place; measure roll against it.
        let roll = self.up.cross(up).dot(self.forward).atan2(self.up.dot(up));
        if roll.abs() > 1e-6 {
            self.roll = roll.to_degrees();
            self.update_basis();
        }
    }

    /// Rebuild forward/right/up from the Euler angles.
    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let forward = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        let right = forward
            .cross(self.world_up)
            .try_normalize()
            .unwrap_or_else(|| forward.any_orthonormal_vector());
        let up = right.cross(forward).normalize();

        let (right, up) = if self.roll != 0.0 {
            let roll = Quat::from_axis_angle(forward, self.roll.to_radians());
            (roll * right, roll * up)
        } else {
            (right, up)
        };

        self.forward = forward;
        self.right = right;
        self.up = up;
        self.touch();
    }
}

#[cfg(test)]
#[path = "spatial_tests.rs"]
mod tests;
