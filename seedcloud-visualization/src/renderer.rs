//! Renderer collaborator seam
//!
//! The drawing backend is external. It only has to build resources for a
//! scene, draw them under a group rotation, and release them when the scene is
//! replaced.

use crate::buffers::SceneBuffers;
use seedcloud_core::{GroupRotation, Result, SceneDescription};
use tracing::trace;

/// A backend that displays scene descriptions
pub trait Renderer {
    /// Visual resources owned by one live scene (geometry and material buffers)
    type Resources;

    /// Build the resources for `scene`
    fn build(&mut self, scene: &SceneDescription) -> Result<Self::Resources>;

    /// Draw one frame of a live scene
    fn draw(&mut self, resources: &Self::Resources, rotation: &GroupRotation) -> Result<()>;

    /// Free the resources of a scene that is being discarded
    fn release(&mut self, resources: Self::Resources);
}

/// Resources of the headless renderer
#[derive(Debug)]
pub struct HeadlessResources {
    id: u64,
    buffers: SceneBuffers,
}

impl HeadlessResources {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn buffers(&self) -> &SceneBuffers {
        &self.buffers
    }
}

/// Renderer that packs vertex buffers but never touches a GPU.
///
/// It tracks what a real backend would allocate, which makes resource leaks
/// across scene swaps visible.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_id: u64,
    live: Vec<u64>,
    live_bytes: usize,
    frames_drawn: u64,
    released: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resource sets built and not yet released
    pub fn live_resources(&self) -> usize {
        self.live.len()
    }

    /// Bytes held by unreleased resource sets
    pub fn live_bytes(&self) -> usize {
        self.live_bytes
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn released(&self) -> u64 {
        self.released
    }
}

impl Renderer for HeadlessRenderer {
    type Resources = HeadlessResources;

    fn build(&mut self, scene: &SceneDescription) -> Result<Self::Resources> {
        let buffers = SceneBuffers::from_scene(scene);
        self.next_id += 1;
        self.live.push(self.next_id);
        self.live_bytes += buffers.byte_len();
        Ok(HeadlessResources {
            id: self.next_id,
            buffers,
        })
    }

    fn draw(&mut self, resources: &Self::Resources, rotation: &GroupRotation) -> Result<()> {
        if !self.live.contains(&resources.id) {
            return Err(seedcloud_core::Error::Render(format!(
                "resources {} were already released",
                resources.id
            )));
        }
        self.frames_drawn += 1;
        trace!(resources = resources.id, x = rotation.x, y = rotation.y, "frame");
        Ok(())
    }

    fn release(&mut self, resources: Self::Resources) {
        self.live.retain(|id| *id != resources.id);
        self.live_bytes = self.live_bytes.saturating_sub(resources.buffers.byte_len());
        self.released += 1;
    }
}
