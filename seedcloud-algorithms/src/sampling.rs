//! Spherical sampling driven by a [`SeededSequence`]

use crate::sequence::SeededSequence;
use seedcloud_core::Point3d;
use std::f64::consts::PI;

/// Smallest number of points in a spherical layout
pub const MIN_POINTS: usize = 40;

/// Largest number of points in a spherical layout
pub const MAX_POINTS: usize = 80;

/// Draw the point count, `40 + floor(u * 41)`, in `[40, 80]`
pub fn draw_point_count(seq: &mut SeededSequence) -> usize {
    let span = (MAX_POINTS - MIN_POINTS + 1) as f64;
    let offset = (seq.next_value() * span).floor() as usize;
    MIN_POINTS + offset.min(MAX_POINTS - MIN_POINTS)
}

/// Convert spherical coordinates to Cartesian.
///
/// `theta` is the azimuth around Z, `phi` the polar angle from +Z.
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Point3d {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Point3d::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}

/// Draw a uniformly distributed direction: theta then phi.
///
/// `phi = acos(2u - 1)` keeps the density uniform over the sphere instead of
/// bunching points at the poles.
pub fn draw_angles(seq: &mut SeededSequence) -> (f64, f64) {
    let theta = seq.next_value() * PI * 2.0;
    let phi = (seq.next_value() * 2.0 - 1.0).acos();
    (theta, phi)
}

/// Draw a point uniformly inside a ball: radius, theta, phi.
///
/// The cube root on the radius draw keeps the volumetric density uniform.
pub fn draw_in_ball(seq: &mut SeededSequence, radius: f64) -> Point3d {
    let r = seq.next_value().cbrt() * radius;
    let (theta, phi) = draw_angles(seq);
    spherical_to_cartesian(r, theta, phi)
}

/// Draw a point uniformly on a sphere surface: theta, phi
pub fn draw_on_sphere(seq: &mut SeededSequence, radius: f64) -> Point3d {
    let (theta, phi) = draw_angles(seq);
    spherical_to_cartesian(radius, theta, phi)
}
