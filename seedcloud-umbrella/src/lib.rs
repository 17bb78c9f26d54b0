//! # SeedCloud
//!
//! Deterministic 3D point-cloud scenes generated from 5-digit seeds.
//!
//! This is the umbrella crate that provides convenient access to all seedcloud
//! functionality. Use the individual crates for more granular control over
//! dependencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use seedcloud::prelude::*;
//!
//! let seed = Seed::parse("12345").unwrap();
//! let scene = LayoutGenerator::for_policy(LayoutPolicy::SurfaceWithNeighbors { k: 3 })
//!     .generate(&seed);
//! assert_eq!(scene.point_count(), 51);
//! assert!(scene.has_boundary());
//! ```
//!
//! ## Feature Flags
//!
//! - `algorithms`: seeded sequence, layout policies and generator
//! - `visualization`: renderer seam, render loop and scene controller

// Re-export core functionality
pub use seedcloud_core::*;

#[cfg(feature = "algorithms")]
pub use seedcloud_algorithms as algorithms;

#[cfg(feature = "visualization")]
pub use seedcloud_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use seedcloud_core::*;

    #[cfg(feature = "algorithms")]
    pub use seedcloud_algorithms::*;

    #[cfg(feature = "visualization")]
    pub use seedcloud_visualization::*;
}
