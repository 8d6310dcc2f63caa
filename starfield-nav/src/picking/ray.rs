use glam::{Vec2, Vec3};

use crate::engine::camera::CameraPose;
use crate::engine::config::ViewportConfig;

/// World-space picking ray with a normalised direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PickRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Build the ray under a viewport pixel for the given camera pose.
    ///
    /// Symmetric-frustum perspective projection; pixel (0, 0) is the top
    /// left corner, matching pointer coordinates.
    pub fn through_pixel(pose: &CameraPose, viewport: &ViewportConfig, pixel: Vec2) -> Self {
        let ndc_x = 2.0 * pixel.x / viewport.width - 1.0;
        let ndc_y = 1.0 - 2.0 * pixel.y / viewport.height;
        let tan_half_fov = (viewport.vertical_fov * 0.5).tan();
        let aspect = viewport.width / viewport.height;

        let orientation = pose.orientation;
        let direction = orientation.right() * (ndc_x * tan_half_fov * aspect)
            + orientation.up() * (ndc_y * tan_half_fov)
            + orientation.forward();
        Self::new(pose.position, direction)
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
