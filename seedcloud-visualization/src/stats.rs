//! Display fields shown next to the scene

use seedcloud_core::{SceneDescription, Seed};
use serde::Serialize;
use std::fmt;

/// Seed echo, point count and rotation speed of the live scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayStats {
    pub seed: Seed,
    pub point_count: usize,
    pub rotation_speed: f64,
}

impl DisplayStats {
    pub fn from_scene(scene: &SceneDescription) -> Self {
        Self {
            seed: scene.seed,
            point_count: scene.point_count(),
            rotation_speed: scene.rotation_speed,
        }
    }
}

impl fmt::Display for DisplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed: {}", self.seed)?;
        writeln!(f, "Points: {}", self.point_count)?;
        write!(f, "Rotation Speed: {:.5}", self.rotation_speed)
    }
}
