/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is a Vec4 (A, B, C, D):
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside when dot(plane, P_homogeneous) >= 0 for all planes

use glam::{Mat4, Vec3, Vec4};
use crate::bounds::Aabb;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann method. Expects OpenGL clip space (z in [-w, w]).
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Planes come from rows of the VP matrix; m[col][row]
        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        // The far normal is only 2n/(f-n) long, so any non-zero normal is scaled
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Plane by index (see the `PLANE_*` constants). `None` past 5.
    pub fn plane(&self, index: usize) -> Option<Vec4> {
        self.planes.get(index).copied()
    }

    /// Signed distance of `point` to every plane is >= 0.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }

    /// Sphere is inside or touching the frustum.
    ///
    /// Conservative near corners: may report a sphere just outside a corner.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(center) + plane.w >= -radius)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, the box corner
    /// furthest along the normal. If that corner is outside, so is the box.
    /// May return false positives, never false negatives.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(positive_vertex(aabb, normal)) + plane.w >= 0.0
        })
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - p-vertex outside any plane → `Outside` (early out)
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &Aabb) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(positive_vertex(aabb, normal)) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            if normal.dot(negative_vertex(aabb, normal)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

/// Corner most aligned with `normal`.
fn positive_vertex(aabb: &Aabb, normal: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
        if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
        if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
    )
}

/// Corner least aligned with `normal`.
fn negative_vertex(aabb: &Aabb, normal: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
        if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
        if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
    )
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
