//! Core data structures and traits for seedcloud
//!
//! This crate provides the fundamental types shared by the generator and the
//! renderer seam: validated seeds, scene points and colours, connections,
//! the wireframe boundary, complete scene descriptions, and the group rotation.

pub mod point;
pub mod seed;
pub mod scene;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use seed::*;
pub use scene::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Rotation3};
