//! Core traits for seedcloud

use crate::{point::*, scene::SceneDescription};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3d, Point3d);

    /// Get the center point of the object
    fn center(&self) -> Point3d {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

impl Drawable for SceneDescription {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        let mut positions = self.positions();
        let Some(first) = positions.next() else {
            return (Point3d::origin(), Point3d::origin());
        };

        positions.fold((first, first), |(min, max), p| {
            (min.inf(&p), max.sup(&p))
        })
    }
}
