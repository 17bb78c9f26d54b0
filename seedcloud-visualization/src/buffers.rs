//! GPU-ready vertex buffers for a scene

use bytemuck::{Pod, Zeroable};
use seedcloud_core::{Point3d, SceneDescription};

/// Colour of connection lines
pub const CONNECTION_COLOR: [f32; 3] = [0.85, 0.85, 0.85];

/// Colour of the boundary wireframe
pub const BOUNDARY_COLOR: [f32; 3] = [0.35, 0.35, 0.45];

/// Vertex data for point markers
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub size: f32,
}

/// Vertex data for line segments, two per segment
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

fn to_f32(point: &Point3d) -> [f32; 3] {
    [point.x as f32, point.y as f32, point.z as f32]
}

impl LineVertex {
    fn segment(start: &Point3d, end: &Point3d, color: [f32; 3]) -> [Self; 2] {
        [
            Self {
                position: to_f32(start),
                color,
            },
            Self {
                position: to_f32(end),
                color,
            },
        ]
    }
}

/// Every vertex array needed to draw one scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneBuffers {
    pub points: Vec<PointVertex>,
    pub connection_lines: Vec<LineVertex>,
    pub boundary_lines: Vec<LineVertex>,
}

impl SceneBuffers {
    pub fn from_scene(scene: &SceneDescription) -> Self {
        let points = scene
            .points
            .iter()
            .map(|p| PointVertex {
                position: to_f32(&p.position),
                color: p.color.to_rgb().to_array(),
                size: p.size as f32,
            })
            .collect();

        let connection_lines = scene
            .connection_segments()
            .flat_map(|(a, b)| LineVertex::segment(&a, &b, CONNECTION_COLOR))
            .collect();

        let boundary_lines = scene
            .boundary
            .map(|sphere| {
                sphere
                    .line_segments()
                    .iter()
                    .flat_map(|(a, b)| LineVertex::segment(a, b, BOUNDARY_COLOR))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            points,
            connection_lines,
            boundary_lines,
        }
    }

    /// Point vertices as raw bytes for upload
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Connection and boundary vertices as raw bytes for upload
    pub fn line_bytes(&self) -> (&[u8], &[u8]) {
        (
            bytemuck::cast_slice(&self.connection_lines),
            bytemuck::cast_slice(&self.boundary_lines),
        )
    }

    /// Total size of all buffers in bytes
    pub fn byte_len(&self) -> usize {
        let (connections, boundary) = self.line_bytes();
        self.point_bytes().len() + connections.len() + boundary.len()
    }
}
