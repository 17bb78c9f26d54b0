//! Grid lattice layout
//!
//! The five digits map straight onto lattice parameters; no pseudo-random
//! draws are involved.

use seedcloud_core::{Hsl, Point3d, ScenePoint, Seed};

/// Hue step per unit of `x + y + z`, in degrees
const HUE_STEP_DEGREES: u32 = 5;

/// Hue offset per unit of the last digit, in degrees
const COLOR_OFFSET_STEP_DEGREES: u32 = 36;

/// Lattice parameters derived from a seed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub x_count: usize,
    pub y_count: usize,
    pub z_count: usize,
    pub spacing: f64,
    /// Hue offset in degrees
    pub color_offset: u32,
    pub rotation_speed: f64,
}

impl GridParams {
    /// Digits 0-2 give the extents (at least 1), digit 3 the spacing (0 becomes 1),
    /// digit 4 the rotation speed and hue offset.
    pub fn from_seed(seed: &Seed) -> Self {
        let [dx, dy, dz, ds, dr] = seed.digits();
        Self {
            x_count: usize::from(dx.max(1)),
            y_count: usize::from(dy.max(1)),
            z_count: usize::from(dz.max(1)),
            spacing: f64::from(if ds == 0 { 1 } else { ds }),
            color_offset: u32::from(dr) * COLOR_OFFSET_STEP_DEGREES,
            rotation_speed: last_digit_speed(dr),
        }
    }

    pub fn point_count(&self) -> usize {
        self.x_count * self.y_count * self.z_count
    }

    /// Hue in degrees for integer lattice coordinates
    pub fn hue_degrees(&self, x: usize, y: usize, z: usize) -> u32 {
        let sum = (x + y + z) as u32;
        (sum * HUE_STEP_DEGREES + self.color_offset) % 360
    }

    fn centered(index: usize, count: usize, spacing: f64) -> f64 {
        (index as f64 - (count as f64 - 1.0) / 2.0) * spacing
    }

    /// Lattice points in x-major, then y, then z order
    pub fn points(&self, saturation: f64, lightness: f64, size: f64) -> Vec<ScenePoint> {
        let mut points = Vec::with_capacity(self.point_count());
        for x in 0..self.x_count {
            for y in 0..self.y_count {
                for z in 0..self.z_count {
                    let position = Point3d::new(
                        Self::centered(x, self.x_count, self.spacing),
                        Self::centered(y, self.y_count, self.spacing),
                        Self::centered(z, self.z_count, self.spacing),
                    );
                    let hue = f64::from(self.hue_degrees(x, y, z)) / 360.0;
                    points.push(ScenePoint::new(position, Hsl::new(hue, saturation, lightness), size));
                }
            }
        }
        points
    }
}

/// `digit * 0.005 + 0.005`
pub fn last_digit_speed(digit: u8) -> f64 {
    f64::from(digit) * 0.005 + 0.005
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_params_for_23104() {
        let params = GridParams::from_seed(&Seed::parse("23104").unwrap());
        assert_eq!((params.x_count, params.y_count, params.z_count), (2, 3, 1));
        assert_eq!(params.spacing, 1.0);
        assert_relative_eq!(params.rotation_speed, 0.025);
        assert_eq!(params.color_offset, 144);
        assert_eq!(params.point_count(), 6);
    }

    #[test]
    fn test_zero_digits_become_one() {
        let params = GridParams::from_seed(&Seed::parse("00000").unwrap());
        assert_eq!(params.point_count(), 1);
        assert_eq!(params.spacing, 1.0);
        assert_relative_eq!(params.rotation_speed, 0.005);
    }

    #[test]
    fn test_lattice_is_centered() {
        let params = GridParams::from_seed(&Seed::parse("35273").unwrap());
        let points = params.points(0.8, 0.5, 0.3);
        assert_eq!(points.len(), 3 * 5 * 2);

        let sum = points.iter().fold(Point3d::origin().coords, |acc, p| acc + p.position.coords);
        assert_relative_eq!(sum.norm(), 0.0, epsilon = 1e-9);

        // spacing 7 along every axis
        assert_relative_eq!(points[0].position, Point3d::new(-7.0, -14.0, -3.5));
        assert_relative_eq!(points[1].position, Point3d::new(-7.0, -14.0, 3.5));
    }

    #[test]
    fn test_hue_follows_index_sum() {
        let params = GridParams::from_seed(&Seed::parse("99919").unwrap());
        assert_eq!(params.color_offset, 324);
        assert_eq!(params.hue_degrees(0, 0, 0), 324);
        // (8 + 8 + 8) * 5 + 324 = 444 -> 84
        assert_eq!(params.hue_degrees(8, 8, 8), 84);
    }
}
