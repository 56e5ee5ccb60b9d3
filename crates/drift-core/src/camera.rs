//! Camera description used for picking rays and screen-bound derivation.
//!
//! Kept free of platform APIs so the same type serves native and web hosts.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the origin from `(0, 0, z)`, the scene's default pose.
    pub fn facing_origin(fovy_degrees: f32, aspect: f32, z: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Distance from the eye to the z=0 plane the models float on.
    pub fn distance_to_focus_plane(&self) -> f32 {
        self.eye.z.abs()
    }

    /// Compute a world-space ray from normalized device coordinates.
    ///
    /// Unprojects the far-plane point for the given NDC and aims from the eye
    /// through it. Returns `(ray_origin, ray_direction)` in world space.
    pub fn ndc_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }
}
