/// Camera — Euler-angle camera with cached view and projection matrices.
///
/// The view matrix is cached against the [`Spatial`] revision it was built
/// from, so moving or turning the camera through `spatial_mut()` invalidates
/// it without any callback. Target, orbit distance and mode changes drop the
/// cache explicitly. The projection matrix is dropped by its own setters.

use std::cell::Cell;
use std::fmt;
use glam::{Mat4, Vec2, Vec3};
use crate::config::constants::{
    DEFAULT_ORBIT_DISTANCE, DEFAULT_PITCH, DEFAULT_YAW, MAX_FOV, MIN_FOV, MIN_ORBIT_DISTANCE,
};
use crate::config::CameraSettings;
use crate::spatial::Spatial;
use super::ray::Ray;
use super::{CameraMode, CameraView, ProjectionType};

#[derive(Debug, Clone, Copy)]
struct CachedView {
    revision: u64,
    matrix: Mat4,
}

#[derive(Debug, Clone)]
pub struct Camera {
    spatial: Spatial,
    settings: CameraSettings,
    target: Option<Vec3>,
    orbit_distance: f32,
    view_cache: Cell<Option<CachedView>>,
    projection_cache: Cell<Option<Mat4>>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera {
    /// Camera at `settings.position` facing -Z.
    pub fn new(settings: CameraSettings) -> Self {
        let settings = CameraSettings {
            field_of_view: settings.field_of_view.clamp(MIN_FOV, MAX_FOV),
            ..settings
        };
        Self {
            spatial: Spatial::new(settings.position, DEFAULT_YAW, DEFAULT_PITCH),
            settings,
            target: None,
            orbit_distance: DEFAULT_ORBIT_DISTANCE,
            view_cache: Cell::new(None),
            projection_cache: Cell::new(None),
        }
    }

    /// Default camera at `position` facing `target`, with `up` as world up.
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut camera = Self::new(CameraSettings { position, ..CameraSettings::default() });
        camera.spatial.set_world_up(up);
        camera.spatial.look_at(target);
        camera
    }

    // ===== SPATIAL =====

    pub fn spatial(&self) -> &Spatial {
        &self.spatial
    }

    /// Mutable orientation/position. The view cache notices changes by revision.
    pub fn spatial_mut(&mut self) -> &mut Spatial {
        &mut self.spatial
    }

    /// Where the eye actually is: the orbit position when orbiting a target,
    /// otherwise the spatial position.
    pub fn eye_position(&self) -> Vec3 {
        match (self.settings.mode, self.target) {
            (CameraMode::Orbital, Some(target)) => {
                target - self.spatial.forward() * self.orbit_distance
            }
            _ => self.spatial.position(),
        }
    }

    // ===== TARGET / ORBIT =====

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = Some(target);
        self.invalidate_view();
    }

    pub fn clear_target(&mut self) {
        self.target = None;
        self.invalidate_view();
    }

    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    /// Clamped to at least `MIN_ORBIT_DISTANCE`.
    pub fn set_orbit_distance(&mut self, distance: f32) {
        self.orbit_distance = distance.max(MIN_ORBIT_DISTANCE);
        self.invalidate_view();
    }

    // ===== SETTINGS =====

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Clamped to [MIN_FOV, MAX_FOV] degrees.
    pub fn set_field_of_view(&mut self, fov: f32) {
        self.settings.field_of_view = fov.clamp(MIN_FOV, MAX_FOV);
        self.invalidate_projection();
    }

    /// Non-positive or non-finite ratios are ignored.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            crate::lgl_warn!("lgl::Camera", "Ignoring invalid aspect ratio {}", aspect_ratio);
            return;
        }
        self.settings.aspect_ratio = aspect_ratio;
        self.invalidate_projection();
    }

    pub fn set_near_plane(&mut self, near_plane: f32) {
        self.settings.near_plane = near_plane;
        self.invalidate_projection();
    }

    pub fn set_far_plane(&mut self, far_plane: f32) {
        self.settings.far_plane = far_plane;
        self.invalidate_projection();
    }

    /// Half height of the orthographic volume.
    pub fn set_ortho_size(&mut self, ortho_size: f32) {
        self.settings.ortho_size = ortho_size;
        self.invalidate_projection();
    }

    pub fn set_projection_type(&mut self, projection: ProjectionType) {
        if self.settings.projection != projection {
            crate::lgl_debug!("lgl::Camera", "Projection changed to {:?}", projection);
        }
        self.settings.projection = projection;
        self.invalidate_projection();
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.settings.mode != mode {
            crate::lgl_debug!("lgl::Camera", "Mode changed to {:?}", mode);
        }
        self.settings.mode = mode;
        self.invalidate_view();
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.settings.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.settings.mouse_sensitivity = sensitivity;
    }

    // ===== PICKING =====

    /// Unit world-space direction through a window pixel.
    ///
    /// `screen_pos` is in pixels with the origin at the top-left corner.
    /// An empty `screen_size` yields the forward vector.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec3 {
        match self.unproject(screen_pos, screen_size) {
            Some((near, far)) => (far - near).try_normalize().unwrap_or(self.spatial.forward()),
            None => self.spatial.forward(),
        }
    }

    /// Picking ray through a window pixel.
    ///
    /// Perspective rays start at the eye. Orthographic rays are parallel, so
    /// they start on the near plane under the pixel.
    pub fn ray_from_screen(&self, screen_pos: Vec2, screen_size: Vec2) -> Ray {
        let direction = self.screen_to_world(screen_pos, screen_size);
        let origin = match (self.settings.projection, self.unproject(screen_pos, screen_size)) {
            (ProjectionType::Orthographic, Some((near, _))) => near,
            _ => self.eye_position(),
        };
        Ray::new(origin, direction)
    }

    /// World points on the near and far planes under a pixel.
    fn unproject(&self, screen_pos: Vec2, screen_size: Vec2) -> Option<(Vec3, Vec3)> {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(
            2.0 * screen_pos.x / screen_size.x - 1.0,
            1.0 - 2.0 * screen_pos.y / screen_size.y,
        );
        let inverse = self.view_projection_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(-1.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        (near.is_finite() && far.is_finite()).then_some((near, far))
    }

    // ===== INTERPOLATION =====

    /// Blend position, orientation, field of view and clip planes toward `target`.
    ///
    /// `t` is clamped to [0, 1].
    pub fn interpolate_to(&mut self, target: &Camera, t: f32) {
        let t = t.clamp(0.0, 1.0);
        self.spatial.interpolate_to(&target.spatial, t);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        self.settings.field_of_view = lerp(self.settings.field_of_view, target.settings.field_of_view);
        self.settings.near_plane = lerp(self.settings.near_plane, target.settings.near_plane);
        self.settings.far_plane = lerp(self.settings.far_plane, target.settings.far_plane);
        self.invalidate_projection();
    }

    // ===== CACHE =====

    fn invalidate_view(&self) {
        self.view_cache.set(None);
    }

    fn invalidate_projection(&self) {
        self.projection_cache.set(None);
    }

    fn build_projection(&self) -> Mat4 {
        let s = &self.settings;
        match s.projection {
            ProjectionType::Perspective => Mat4::perspective_rh_gl(
                s.field_of_view.to_radians(),
                s.aspect_ratio,
                s.near_plane,
                s.far_plane,
            ),
            ProjectionType::Orthographic => {
                let half_height = s.ortho_size;
                let half_width = half_height * s.aspect_ratio;
                Mat4::orthographic_rh_gl(
                    -half_width, half_width,
                    -half_height, half_height,
                    s.near_plane, s.far_plane,
                )
            }
        }
    }
}

impl CameraView for Camera {
    fn position(&self) -> Vec3 {
        self.eye_position()
    }

    fn forward(&self) -> Vec3 {
        self.spatial.forward()
    }

    fn right(&self) -> Vec3 {
        self.spatial.right()
    }

    fn up(&self) -> Vec3 {
        self.spatial.up()
    }

    fn view_matrix(&self) -> Mat4 {
        let revision = self.spatial.revision();
        if let Some(cached) = self.view_cache.get() {
            if cached.revision == revision {
                return cached.matrix;
            }
        }
        let eye = self.eye_position();
        let matrix = Mat4::look_at_rh(eye, eye + self.spatial.forward(), self.spatial.up());
        self.view_cache.set(Some(CachedView { revision, matrix }));
        matrix
    }

    fn projection_matrix(&self) -> Mat4 {
        if let Some(matrix) = self.projection_cache.get() {
            return matrix;
        }
        let matrix = self.build_projection();
        self.projection_cache.set(Some(matrix));
        matrix
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.spatial.position();
        writeln!(f, "Camera:")?;
        writeln!(f, "  Position: {}, {}, {}", p.x, p.y, p.z)?;
        writeln!(
            f,
            "  Orientation: {}, {}, {}",
            self.spatial.yaw(), self.spatial.pitch(), self.spatial.roll()
        )?;
        writeln!(f, "  FOV: {}", self.settings.field_of_view)?;
        write!(f, "  Near/Far: {}/{}", self.settings.near_plane, self.settings.far_plane)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
