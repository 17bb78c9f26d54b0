//! Seeded layout generation
//!
//! Turns a validated [`Seed`] into a [`SceneDescription`]. Every random choice
//! is drawn from a fresh [`SeededSequence`] in a fixed order, so the same seed
//! and configuration always produce the same scene:
//!
//! 1. point count (one draw)
//! 2. per point: position (radius for volumetric fill, then theta and phi),
//!    then hue jitter (one draw)
//! 3. nearest-neighbor connections, boundary and rotation speed (no draws)
//!
//! The grid lattice is the exception and reads the digits directly.

use crate::config::{GeneratorConfig, LayoutPolicy};
use crate::connections::nearest_neighbor_connections;
use crate::grid::GridParams;
use crate::sampling::{draw_in_ball, draw_on_sphere, draw_point_count};
use crate::sequence::SeededSequence;
use seedcloud_core::{Hsl, Point3d, Result, SceneDescription, ScenePoint, Seed, WireframeSphere};
use tracing::debug;

/// Base hue of a seed, `(seed mod 360) / 360`
pub fn hue_base(seed: &Seed) -> f64 {
    f64::from(seed.value() % 360) / 360.0
}

/// Generates scenes for one configuration
#[derive(Debug, Clone, Default)]
pub struct LayoutGenerator {
    config: GeneratorConfig,
}

impl LayoutGenerator {
    /// Create a generator after validating `config`
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generator with the default configuration of `policy`
    pub fn for_policy(policy: LayoutPolicy) -> Self {
        Self {
            config: GeneratorConfig::for_policy(policy),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn policy(&self) -> LayoutPolicy {
        self.config.policy
    }

    /// Run one generation pass.
    ///
    /// # Example
    /// ```rust
    /// use seedcloud_core::Seed;
    /// use seedcloud_algorithms::{LayoutGenerator, LayoutPolicy};
    ///
    /// let generator = LayoutGenerator::for_policy(LayoutPolicy::VolumetricFill);
    /// let scene = generator.generate(&Seed::parse("12345").unwrap());
    /// assert_eq!(scene.point_count(), 51);
    /// ```
    pub fn generate(&self, seed: &Seed) -> SceneDescription {
        let config = &self.config;
        let points = match config.policy {
            LayoutPolicy::GridLattice => {
                GridParams::from_seed(seed).points(config.saturation, config.lightness, config.point_size)
            }
            LayoutPolicy::VolumetricFill => self.spherical_points(seed, |seq| draw_in_ball(seq, config.sphere_radius)),
            LayoutPolicy::SurfaceShell | LayoutPolicy::SurfaceWithNeighbors { .. } => {
                self.spherical_points(seed, |seq| draw_on_sphere(seq, config.sphere_radius))
            }
        };

        let connections = match config.policy.neighbors() {
            Some(k) => {
                let positions: Vec<Point3d> = points.iter().map(|p| p.position).collect();
                nearest_neighbor_connections(&positions, k)
            }
            None => Vec::new(),
        };

        let boundary = config
            .boundary
            .then(|| WireframeSphere::new(config.boundary_radius));

        let scene = SceneDescription {
            seed: *seed,
            policy: config.policy.to_string(),
            points,
            connections,
            boundary,
            rotation_speed: config.rotation_speed.resolve(seed),
        };

        debug!(
            seed = %seed,
            policy = %scene.policy,
            points = scene.point_count(),
            connections = scene.connection_count(),
            rotation_speed = scene.rotation_speed,
            "generated scene"
        );
        scene
    }

    fn spherical_points<F>(&self, seed: &Seed, mut position: F) -> Vec<ScenePoint>
    where
        F: FnMut(&mut SeededSequence) -> Point3d,
    {
        let mut seq = SeededSequence::new(seed.value());
        let total = draw_point_count(&mut seq);
        let base = hue_base(seed);

        (0..total)
            .map(|_| {
                let p = position(&mut seq);
                let hue = (base + seq.next_value()) % 1.0;
                ScenePoint::new(
                    p,
                    Hsl::new(hue, self.config.saturation, self.config.lightness),
                    self.config.point_size,
                )
            })
            .collect()
    }
}
