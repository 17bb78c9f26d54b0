//! # SeedCloud Algorithms
//!
//! Deterministic layout generation for seedcloud scenes.
//!
//! This crate provides the sine-based seeded sequence, spherical sampling,
//! the layout policies and their configuration, the scene generator itself,
//! and the nearest-neighbor search used to connect points.

pub mod sequence;
pub mod sampling;
pub mod config;
pub mod layout;
pub mod grid;
pub mod nearest_neighbor;
pub mod connections;

// Re-export commonly used items
pub use sequence::*;
pub use sampling::*;
pub use config::*;
pub use layout::*;
pub use grid::*;
pub use nearest_neighbor::*;
pub use connections::*;
