//! Scene descriptions produced by one generation pass

use crate::error::Error;
use crate::point::{Point3d, ScenePoint};
use crate::seed::Seed;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// An undirected edge between two points of a scene.
///
/// The pair is stored in canonical order (`a < b`), so `(i, j)` and `(j, i)`
/// produce the same connection and self-loops cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "ConnectionFields")]
pub struct Connection {
    a: usize,
    b: usize,
}

impl Connection {
    /// Create the canonical connection between `i` and `j`, or `None` if `i == j`
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lower index
    pub fn a(&self) -> usize {
        self.a
    }

    /// Higher index
    pub fn b(&self) -> usize {
        self.b
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Whether `index` is one of the two endpoints
    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }
}

#[derive(Deserialize)]
struct ConnectionFields {
    a: usize,
    b: usize,
}

impl TryFrom<ConnectionFields> for Connection {
    type Error = Error;

    fn try_from(fields: ConnectionFields) -> Result<Self, Error> {
        Connection::new(fields.a, fields.b)
            .ok_or_else(|| Error::InvalidScene(format!("self-connection on point {}", fields.a)))
    }
}

/// Static wireframe sphere drawn around a scene.
///
/// It does not depend on the seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireframeSphere {
    pub radius: f64,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl WireframeSphere {
    pub const DEFAULT_SEGMENTS: u32 = 16;

    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            width_segments: Self::DEFAULT_SEGMENTS,
            height_segments: Self::DEFAULT_SEGMENTS,
        }
    }

    fn vertex(&self, ix: u32, iy: u32) -> Point3d {
        let u = ix as f64 / self.width_segments as f64;
        let v = iy as f64 / self.height_segments as f64;
        let (sin_v, cos_v) = (v * PI).sin_cos();
        let (sin_u, cos_u) = (u * 2.0 * PI).sin_cos();
        Point3d::new(
            -self.radius * cos_u * sin_v,
            self.radius * cos_v,
            self.radius * sin_u * sin_v,
        )
    }

    /// Latitude rings and longitude meridians as line segments.
    ///
    /// Rings at the poles collapse to a point and are skipped.
    pub fn line_segments(&self) -> Vec<(Point3d, Point3d)> {
        let w = self.width_segments.max(3);
        let h = self.height_segments.max(2);
        let sphere = Self {
            width_segments: w,
            height_segments: h,
            ..*self
        };

        let mut segments = Vec::with_capacity((w * (2 * h - 1)) as usize);
        for iy in 1..h {
            for ix in 0..w {
                segments.push((sphere.vertex(ix, iy), sphere.vertex(ix + 1, iy)));
            }
        }
        for ix in 0..w {
            for iy in 0..h {
                segments.push((sphere.vertex(ix, iy), sphere.vertex(ix, iy + 1)));
            }
        }
        segments
    }
}

/// The complete output of one generation pass.
///
/// Deserialization rejects connections that refer to missing points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SceneFields")]
pub struct SceneDescription {
    pub seed: Seed,
    /// Name of the layout policy that produced the scene
    pub policy: String,
    pub points: Vec<ScenePoint>,
    /// Deduplicated, in insertion order
    pub connections: Vec<Connection>,
    pub boundary: Option<WireframeSphere>,
    pub rotation_speed: f64,
}

#[derive(Deserialize)]
struct SceneFields {
    seed: Seed,
    policy: String,
    points: Vec<ScenePoint>,
    connections: Vec<Connection>,
    boundary: Option<WireframeSphere>,
    rotation_speed: f64,
}

impl TryFrom<SceneFields> for SceneDescription {
    type Error = Error;

    fn try_from(fields: SceneFields) -> Result<Self, Error> {
        let count = fields.points.len();
        if let Some(c) = fields.connections.iter().find(|c| c.b() >= count) {
            return Err(Error::InvalidScene(format!(
                "connection {}-{} refers past the last of {count} points",
                c.a(),
                c.b()
            )));
        }
        Ok(Self {
            seed: fields.seed,
            policy: fields.policy,
            points: fields.points,
            connections: fields.connections,
            boundary: fields.boundary,
            rotation_speed: fields.rotation_speed,
        })
    }
}

impl SceneDescription {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary.is_some()
    }

    /// Positions in point order
    pub fn positions(&self) -> impl Iterator<Item = Point3d> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// End positions of every connection
    pub fn connection_segments(&self) -> impl Iterator<Item = (Point3d, Point3d)> + '_ {
        self.connections
            .iter()
            .map(|c| (self.points[c.a()].position, self.points[c.b()].position))
    }

    /// Number of connections touching each point
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.points.len()];
        for c in &self.connections {
            degrees[c.a()] += 1;
            degrees[c.b()] += 1;
        }
        degrees
    }
}
