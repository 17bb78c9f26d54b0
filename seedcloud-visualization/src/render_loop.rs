//! Cancellable repeating frame task
//!
//! The host drives frames (a window event loop, a browser animation callback,
//! a test). The loop only decides whether the next frame should run, and
//! guarantees that at most one handle is active at a time.

use std::cell::Cell;
use std::rc::Rc;

/// Handle to one started render loop.
///
/// Clones share the same cancellation flag. The handle is `!Send`: rendering
/// is single-threaded.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    generation: u64,
    active: Rc<Cell<bool>>,
}

impl AnimationHandle {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Stop scheduling further frames. Idempotent.
    pub fn cancel(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// How many loops were started before this one
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owner of the single active [`AnimationHandle`]
#[derive(Debug, Default)]
pub struct RenderLoop {
    started: u64,
    current: Option<AnimationHandle>,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new loop, cancelling the previous one first
    pub fn start(&mut self) -> AnimationHandle {
        self.stop();
        let handle = AnimationHandle::new(self.started);
        self.started += 1;
        self.current = Some(handle.clone());
        handle
    }

    /// Cancel the running loop, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }

    /// Whether a frame should be rendered now
    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(AnimationHandle::is_active)
    }

    pub fn current(&self) -> Option<&AnimationHandle> {
        self.current.as_ref()
    }

    /// Total number of loops started
    pub fn started(&self) -> u64 {
        self.started
    }
}
