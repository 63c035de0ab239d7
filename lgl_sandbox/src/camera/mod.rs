//! Camera module — view/projection cameras, frustum and GPU uniform.
//!
//! Two cameras share the [`CameraView`] interface:
//! - [`Camera`] keeps Euler angles (via [`Spatial`](crate::spatial::Spatial))
//!   and supports first-person, orbital and free modes
//! - [`PerspectiveCamera`] keeps a quaternion and only does perspective
//!
//! Both cache their matrices and rebuild them only after a change.

mod camera;
mod frustum;
mod perspective_camera;
mod ray;
mod uniform;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

pub use camera::Camera;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use perspective_camera::PerspectiveCamera;
pub use ray::Ray;
pub use uniform::CameraUniform;

/// Projection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionType {
    #[default]
    Perspective,
    Orthographic,
}

/// How the camera is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Walk on the ground plane: vertical motion follows world up
    FirstPerson,
    /// Circle a target at a fixed distance
    Orbital,
    /// Fly: vertical motion follows the camera's own up
    #[default]
    Free,
}

/// Read side shared by every camera type.
pub trait CameraView {
    fn position(&self) -> Vec3;
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
    fn up(&self) -> Vec3;
    fn view_matrix(&self) -> Mat4;
    fn projection_matrix(&self) -> Mat4;

    /// projection * view
    fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    fn uniform(&self) -> CameraUniform {
        CameraUniform::new(self.view_matrix(), self.projection_matrix(), self.position())
    }
}
