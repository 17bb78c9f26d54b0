//! Rotation of the point group between frames

use crate::point::Point3d;
use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

/// Accumulated Euler rotation applied to the whole point group.
///
/// Each frame spins the group around Y by the rotation speed and around X by
/// half of it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupRotation {
    pub x: f64,
    pub y: f64,
}

impl GroupRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame at `speed` radians per frame
    pub fn advance(&mut self, speed: f64) {
        self.y += speed;
        self.x += speed * 0.5;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotation matrix, X applied before Y
    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.x, self.y, 0.0)
    }

    /// Rotate a point in scene space
    pub fn apply(&self, point: &Point3d) -> Point3d {
        self.to_rotation() * point
    }
}
