//! The viewer.
//!
//! The pipeline only reads the camera. Its rotation is changed by input
//! handling between ticks and never advances on its own.

use crate::math::vec3::Vec3;

pub const DEFAULT_FOV_FACTOR: f32 = 640.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Per-axis orbit angles in radians, applied x then y then z.
    pub rotation: Vec3,
    /// Stands in for focal length: projected offsets scale by `fov_factor / z`.
    pub fov_factor: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_FOV_FACTOR)
    }
}

impl Camera {
    pub fn new(position: Vec3, fov_factor: f32) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            fov_factor,
        }
    }

    pub fn rotate_x(&mut self, delta: f32) {
        self.rotation.x += delta;
    }

    pub fn rotate_y(&mut self, delta: f32) {
        self.rotation.y += delta;
    }

    pub fn rotate_z(&mut self, delta: f32) {
        self.rotation.z += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_sits_at_origin() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.rotation, Vec3::ZERO);
        assert_relative_eq!(camera.fov_factor, DEFAULT_FOV_FACTOR);
    }

    #[test]
    fn rotation_only_changes_the_named_axis() {
        let mut camera = Camera::default();
        camera.rotate_y(0.25);
        camera.rotate_y(-0.05);
        camera.rotate_z(1.0);
        assert_relative_eq!(camera.rotation.y, 0.2, epsilon = 1e-6);
        assert_eq!(camera.rotation.x, 0.0);
        assert_eq!(camera.rotation.z, 1.0);
    }
}
