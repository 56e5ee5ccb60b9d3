//! Screen-derived containment volume.
//!
//! The box is a slice of the camera frustum at the z=0 plane, shrunk by a
//! safety margin so bouncing models never clip the viewport edge. It must be
//! recomputed whenever the viewport or camera changes; a stale box clamps
//! entities to an out-of-date screen.

use crate::camera::Camera;
use crate::constants::{BOUNDS_Z_MAX, BOUNDS_Z_MIN, FRUSTUM_MARGIN};
use glam::Vec3;

/// Axis-aligned containment box centered on the X/Y origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ScreenBounds {
    /// Derive bounds from camera geometry.
    ///
    /// `visible_height = 2 * tan(fov/2) * distance`, width follows from the
    /// aspect ratio. X/Y are shrunk by [`FRUSTUM_MARGIN`]; Z limits are fixed
    /// constants independent of the camera.
    pub fn from_camera(fov_degrees: f32, aspect: f32, distance: f32) -> Self {
        let visible_height = 2.0 * (fov_degrees.to_radians() / 2.0).tan() * distance;
        let visible_width = visible_height * aspect;
        let half_w = visible_width / 2.0 * (1.0 - FRUSTUM_MARGIN);
        let half_h = visible_height / 2.0 * (1.0 - FRUSTUM_MARGIN);
        Self {
            min: Vec3::new(-half_w, -half_h, BOUNDS_Z_MIN),
            max: Vec3::new(half_w, half_h, BOUNDS_Z_MAX),
        }
    }

    /// Bounds for the given camera at its focus-plane distance.
    pub fn for_camera(camera: &Camera) -> Self {
        Self::from_camera(
            camera.fovy_radians.to_degrees(),
            camera.aspect,
            camera.distance_to_focus_plane(),
        )
    }

    /// Clamp a point independently per axis. In-bounds points pass unchanged.
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        self.clamp(p) == p
    }
}
