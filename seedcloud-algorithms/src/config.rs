//! Layout policies and generator configuration

use crate::grid::last_digit_speed;
use seedcloud_core::{Error, Result, Seed};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Neighbor count used when a policy name gives none
pub const DEFAULT_NEIGHBORS: usize = 3;

/// How a seed is turned into point positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LayoutPolicy {
    /// Uniform density inside the sphere
    #[default]
    VolumetricFill,
    /// Points exactly on the sphere surface
    SurfaceShell,
    /// Surface points, each joined to its `k` nearest neighbors
    SurfaceWithNeighbors { k: usize },
    /// Rectangular lattice sized by the digits
    GridLattice,
}

impl LayoutPolicy {
    /// Every policy with its default parameters
    pub const ALL: [LayoutPolicy; 4] = [
        LayoutPolicy::VolumetricFill,
        LayoutPolicy::SurfaceShell,
        LayoutPolicy::SurfaceWithNeighbors { k: DEFAULT_NEIGHBORS },
        LayoutPolicy::GridLattice,
    ];

    /// Neighbor count if the policy draws connections
    pub fn neighbors(&self) -> Option<usize> {
        match self {
            LayoutPolicy::SurfaceWithNeighbors { k } => Some(*k),
            _ => None,
        }
    }
}

impl fmt::Display for LayoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutPolicy::VolumetricFill => f.write_str("volumetric"),
            LayoutPolicy::SurfaceShell => f.write_str("surface"),
            LayoutPolicy::SurfaceWithNeighbors { k } => write!(f, "neighbors:{k}"),
            LayoutPolicy::GridLattice => f.write_str("grid"),
        }
    }
}

impl FromStr for LayoutPolicy {
    type Err = Error;

    /// Accepts `volumetric`, `surface`, `neighbors`, `neighbors:<k>` and `grid`
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.split_once(':') {
            None => match name.as_str() {
                "volumetric" => Ok(LayoutPolicy::VolumetricFill),
                "surface" => Ok(LayoutPolicy::SurfaceShell),
                "neighbors" => Ok(LayoutPolicy::SurfaceWithNeighbors { k: DEFAULT_NEIGHBORS }),
                "grid" => Ok(LayoutPolicy::GridLattice),
                _ => Err(Error::UnknownPolicy(s.to_string())),
            },
            Some(("neighbors", k)) => k
                .parse::<usize>()
                .ok()
                .filter(|k| *k > 0)
                .map(|k| LayoutPolicy::SurfaceWithNeighbors { k })
                .ok_or_else(|| Error::UnknownPolicy(s.to_string())),
            Some(_) => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Where the rotation speed of a scene comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSpeed {
    /// Same speed for every seed
    Fixed(f64),
    /// `digit4 * 0.005 + 0.005`
    FromLastDigit,
}

impl RotationSpeed {
    pub fn resolve(&self, seed: &Seed) -> f64 {
        match self {
            RotationSpeed::Fixed(speed) => *speed,
            RotationSpeed::FromLastDigit => last_digit_speed(seed.digit(4)),
        }
    }
}

/// Generator configuration.
///
/// Missing fields in a config file fall back to the volumetric defaults;
/// use [`GeneratorConfig::for_policy`] for the defaults of another policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub policy: LayoutPolicy,
    /// Radius of the sampled sphere
    pub sphere_radius: f64,
    /// Marker radius of each point
    pub point_size: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Draw the wireframe boundary sphere
    pub boundary: bool,
    pub boundary_radius: f64,
    pub rotation_speed: RotationSpeed,
}

impl GeneratorConfig {
    pub const SPHERE_RADIUS: f64 = 15.0;
    pub const SATURATION: f64 = 0.8;

    /// Defaults for `policy`
    pub fn for_policy(policy: LayoutPolicy) -> Self {
        let base = Self {
            policy,
            sphere_radius: Self::SPHERE_RADIUS,
            point_size: 0.3,
            saturation: Self::SATURATION,
            lightness: 0.6,
            boundary: true,
            boundary_radius: Self::SPHERE_RADIUS,
            rotation_speed: RotationSpeed::FromLastDigit,
        };

        match policy {
            LayoutPolicy::VolumetricFill => Self {
                point_size: 0.4,
                lightness: 0.5,
                boundary: false,
                rotation_speed: RotationSpeed::Fixed(0.0005),
                ..base
            },
            LayoutPolicy::SurfaceShell => Self {
                rotation_speed: RotationSpeed::Fixed(0.0015),
                ..base
            },
            LayoutPolicy::SurfaceWithNeighbors { .. } => base,
            LayoutPolicy::GridLattice => Self {
                lightness: 0.5,
                boundary: false,
                ..base
            },
        }
    }

    pub fn with_policy(mut self, policy: LayoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check ranges; generation assumes a validated config
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!("{name} must be positive and finite, got {value}")))
            }
        }
        fn unit(name: &str, value: f64) -> Result<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!("{name} must be within [0, 1], got {value}")))
            }
        }

        positive("sphere_radius", self.sphere_radius)?;
        positive("point_size", self.point_size)?;
        unit("saturation", self.saturation)?;
        unit("lightness", self.lightness)?;
        if self.boundary {
            positive("boundary_radius", self.boundary_radius)?;
        }
        if let Some(0) = self.policy.neighbors() {
            return Err(Error::InvalidConfig("neighbor count must be at least 1".to_string()));
        }
        if let RotationSpeed::Fixed(speed) = self.rotation_speed {
            if !speed.is_finite() || speed < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "rotation speed must be non-negative and finite, got {speed}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_policy(LayoutPolicy::default())
    }
}
