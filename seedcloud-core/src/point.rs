//! Point types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A colour in hue/saturation/lightness form, every component in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// A linear RGB colour, every channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB.
    ///
    /// Hue wraps into `[0, 1)`; saturation and lightness are clamped to `[0, 1]`.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = l as f32;
            return Rgb { r: v, g: v, b: v };
        }

        let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let low = 2.0 * l - high;

        Rgb {
            r: hue_to_channel(low, high, h + 1.0 / 3.0) as f32,
            g: hue_to_channel(low, high, h) as f32,
            b: hue_to_channel(low, high, h - 1.0 / 3.0) as f32,
        }
    }
}

fn hue_to_channel(low: f64, high: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}

impl Rgb {
    /// Quantize to 8-bit channels
    pub fn to_bytes(&self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// One marker in a generated scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub position: Point3d,
    pub color: Hsl,
    /// Radius of the marker drawn at `position`
    pub size: f64,
}

impl ScenePoint {
    pub fn new(position: Point3d, color: Hsl, size: f64) -> Self {
        Self {
            position,
            color,
            size,
        }
    }

    /// Distance from the scene origin
    pub fn radius(&self) -> f64 {
        self.position.coords.norm()
    }
}

impl From<ScenePoint> for Point3d {
    fn from(point: ScenePoint) -> Self {
        point.position
    }
}
