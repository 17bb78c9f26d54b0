//! Scene controller
//!
//! Owns everything that used to be shared mutable state: the renderer, the
//! one live scene with its resources, the group rotation, and the render loop.
//! Replacing the scene is a single `submit` call that either fully succeeds or
//! leaves the previous scene on screen.

use crate::render_loop::{AnimationHandle, RenderLoop};
use crate::renderer::Renderer;
use crate::stats::DisplayStats;
use seedcloud_algorithms::{GeneratorConfig, LayoutGenerator};
use seedcloud_core::{GroupRotation, Result, SceneDescription, Seed};
use tracing::{info, warn};

struct LiveScene<R> {
    scene: SceneDescription,
    resources: R,
    stats: DisplayStats,
}

/// Controller holding the single live scene
pub struct SceneController<R: Renderer> {
    renderer: R,
    generator: LayoutGenerator,
    live: Option<LiveScene<R::Resources>>,
    rotation: GroupRotation,
    render_loop: RenderLoop,
}

impl<R: Renderer> SceneController<R> {
    /// Create a controller with nothing displayed yet
    pub fn new(renderer: R, config: GeneratorConfig) -> Result<Self> {
        Ok(Self {
            renderer,
            generator: LayoutGenerator::new(config)?,
            live: None,
            rotation: GroupRotation::new(),
            render_loop: RenderLoop::new(),
        })
    }

    /// Create a controller already showing [`Seed::DEFAULT`] with its loop running
    pub fn start(renderer: R, config: GeneratorConfig) -> Result<Self> {
        let mut controller = Self::new(renderer, config)?;
        controller.show(&Seed::DEFAULT)?;
        Ok(controller)
    }

    /// Validate `input` and replace the live scene with a freshly generated one.
    ///
    /// Invalid input returns [`seedcloud_core::Error::InvalidSeedFormat`] and
    /// leaves the live scene, its stats and the render loop untouched.
    pub fn submit(&mut self, input: &str) -> Result<&DisplayStats> {
        let seed = match Seed::parse(input) {
            Ok(seed) => seed,
            Err(err) => {
                warn!(input, "rejected seed input");
                return Err(err);
            }
        };
        self.show(&seed)
    }

    /// Replace the live scene with the scene for `seed`.
    ///
    /// The running loop is cancelled and the old resources are released before
    /// anything new is built. If the renderer then fails to build, no scene is
    /// live afterwards.
    pub fn show(&mut self, seed: &Seed) -> Result<&DisplayStats> {
        self.render_loop.stop();
        if let Some(old) = self.live.take() {
            self.renderer.release(old.resources);
        }

        let scene = self.generator.generate(seed);
        let resources = self.renderer.build(&scene)?;
        let stats = DisplayStats::from_scene(&scene);
        info!(
            seed = %seed,
            points = stats.point_count,
            rotation_speed = stats.rotation_speed,
            "scene replaced"
        );

        self.rotation.reset();
        self.render_loop.start();
        let live = self.live.insert(LiveScene {
            scene,
            resources,
            stats,
        });
        Ok(&live.stats)
    }

    /// Render one frame if the loop is running.
    ///
    /// Returns whether a frame was drawn.
    pub fn frame(&mut self) -> Result<bool> {
        if !self.render_loop.is_running() {
            return Ok(false);
        }
        let Some(live) = self.live.as_ref() else {
            return Ok(false);
        };
        self.rotation.advance(live.scene.rotation_speed);
        self.renderer.draw(&live.resources, &self.rotation)?;
        Ok(true)
    }

    /// Stop the render loop without discarding the scene
    pub fn pause(&mut self) {
        self.render_loop.stop();
    }

    /// Cancel the loop and release the live scene's resources
    pub fn clear(&mut self) {
        self.render_loop.stop();
        if let Some(old) = self.live.take() {
            self.renderer.release(old.resources);
        }
    }

    pub fn scene(&self) -> Option<&SceneDescription> {
        self.live.as_ref().map(|live| &live.scene)
    }

    pub fn stats(&self) -> Option<&DisplayStats> {
        self.live.as_ref().map(|live| &live.stats)
    }

    pub fn rotation(&self) -> &GroupRotation {
        &self.rotation
    }

    pub fn animation(&self) -> Option<&AnimationHandle> {
        self.render_loop.current()
    }

    pub fn is_animating(&self) -> bool {
        self.render_loop.is_running()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn generator(&self) -> &LayoutGenerator {
        &self.generator
    }
}

impl<R: Renderer> Drop for SceneController<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HeadlessRenderer;
    use seedcloud_algorithms::LayoutPolicy;

    fn controller(policy: LayoutPolicy) -> SceneController<HeadlessRenderer> {
        SceneController::new(HeadlessRenderer::new(), GeneratorConfig::for_policy(policy)).unwrap()
    }

    #[test]
    fn test_nothing_live_initially() {
        let mut controller = controller(LayoutPolicy::VolumetricFill);
        assert!(controller.scene().is_none());
        assert!(!controller.is_animating());
        assert!(!controller.frame().unwrap());
    }

    #[test]
    fn test_start_shows_default_seed() {
        let mut controller =
            SceneController::start(HeadlessRenderer::new(), GeneratorConfig::default()).unwrap();
        assert!(controller.scene().is_some());
        assert!(controller.is_animating());
        assert_eq!(
            controller.stats().unwrap().to_string(),
            "Seed: 12345\nPoints: 51\nRotation Speed: 0.00050"
        );
        assert_eq!(controller.renderer().live_resources(), 1);
        assert!(controller.frame().unwrap());
    }

    #[test]
    fn test_submit_and_frames() {
        let mut controller = controller(LayoutPolicy::VolumetricFill);
        let stats = controller.submit("12345").unwrap().clone();
        assert_eq!(stats.point_count, 51);
        assert_eq!(stats.rotation_speed, 0.0005);

        for _ in 0..4 {
            assert!(controller.frame().unwrap());
        }
        assert!((controller.rotation().y - 0.002).abs() < 1e-12);
        assert!((controller.rotation().x - 0.001).abs() < 1e-12);
        assert_eq!(controller.renderer().frames_drawn(), 4);
    }

    #[test]
    fn test_pause_stops_frames() {
        let mut controller = controller(LayoutPolicy::SurfaceShell);
        controller.submit("11111").unwrap();
        controller.pause();
        assert!(!controller.frame().unwrap());
        assert!(controller.scene().is_some());
    }

    #[test]
    fn test_clear_releases_resources() {
        let mut controller = controller(LayoutPolicy::SurfaceShell);
        controller.submit("11111").unwrap();
        controller.clear();
        assert!(controller.scene().is_none());
        assert_eq!(controller.renderer().live_resources(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GeneratorConfig::default();
        config.saturation = 2.0;
        assert!(SceneController::new(HeadlessRenderer::new(), config).is_err());
    }
}
