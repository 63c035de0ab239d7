/// CameraUniform — plain-data camera block for a uniform buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// GPU-ready camera matrices, laid out for std140.
///
/// Matrices are column-major, as OpenGL expects. `eye_position.w` is 1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    pub eye_position: [f32; 4],
}

impl CameraUniform {
    pub fn new(view: Mat4, projection: Mat4, eye: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (projection * view).to_cols_array_2d(),
            eye_position: eye.extend(1.0).to_array(),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}
