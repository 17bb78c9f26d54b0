//! Visualization plumbing for seedcloud scenes
//!
//! The drawing backend itself is an external collaborator. This crate provides:
//! - the [`Renderer`] trait it implements, plus a headless implementation
//! - GPU-ready vertex buffers built from a scene
//! - a cancellable render loop
//! - the [`SceneController`] that owns the single live scene

pub mod buffers;
pub mod renderer;
pub mod render_loop;
pub mod controller;
pub mod stats;

pub use buffers::*;
pub use renderer::*;
pub use render_loop::*;
pub use controller::*;
pub use stats::*;
