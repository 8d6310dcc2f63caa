use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera orientation as Euler angles in radians.
///
/// Yaw 0 faces +Z, positive yaw turns toward +X, positive pitch looks down.
/// Roll is carried for completeness but nothing in the core produces a
/// non-zero roll.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Unit view direction for this orientation.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            -self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Unit strafe direction, horizontal regardless of pitch.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Unit camera-up direction, orthogonal to forward and right.
    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }

    /// Orientation that looks from `from` toward `to`, with no roll.
    ///
    /// Returns `None` when the two points coincide and no direction exists.
    pub fn looking_at(from: Vec3, to: Vec3) -> Option<Self> {
        let dir = to - from;
        if dir.length_squared() <= f32::EPSILON {
            return None;
        }
        let dir = dir.normalize();
        Some(Self {
            yaw: dir.x.atan2(dir.z),
            pitch: (-dir.y).asin(),
            roll: 0.0,
        })
    }
}

/// Camera position and orientation.
///
/// Exactly one controller mutates the pose on any given frame; see
/// [`crate::engine::core::NavEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_orientation_faces_positive_z() {
        let o = Orientation::default();
        assert_relative_eq!(o.forward().z, 1.0);
        assert_relative_eq!(o.right().x, 1.0);
        assert_relative_eq!(o.up().y, 1.0);
    }

    #[test]
    fn basis_is_orthonormal_under_rotation() {
        let o = Orientation::new(1.2, -0.7, 0.0);
        assert_relative_eq!(o.forward().length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(o.forward().dot(o.right()), 0.0, epsilon = 1e-6);
        assert_relative_eq!(o.forward().dot(o.up()), 0.0, epsilon = 1e-6);
        assert_relative_eq!(o.right().dot(o.up()), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn looking_at_reproduces_direction() {
        let from = Vec3::new(4.0, -2.0, 7.0);
        let to = Vec3::new(-3.0, 9.0, 1.0);
        let o = Orientation::looking_at(from, to).unwrap();
        let expected = (to - from).normalize();
        let fwd = o.forward();
        assert_relative_eq!(fwd.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(fwd.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(fwd.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn looking_at_coincident_points_is_none() {
        let p = Vec3::splat(3.0);
        assert!(Orientation::looking_at(p, p).is_none());
    }
}
