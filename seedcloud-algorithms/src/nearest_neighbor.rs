//! Nearest neighbor search implementations

use seedcloud_core::Point3d;

/// Simple brute force nearest neighbor search for small datasets.
///
/// Scenes never exceed a few hundred points, so the exhaustive O(n) scan per
/// query is the whole story. Results are ordered by distance, with ties broken
/// by the lower index so rankings are reproducible.
pub struct BruteForceSearch {
    points: Vec<Point3d>,
}

impl BruteForceSearch {
    pub fn new(points: &[Point3d]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn ranked<F>(&self, query: &Point3d, keep: F) -> Vec<(usize, f64)>
    where
        F: Fn(usize) -> bool,
    {
        let mut distances: Vec<(usize, f64)> = self
            .points
            .iter()
            .enumerate()
            .filter(|(idx, _)| keep(*idx))
            .map(|(idx, point)| (idx, nalgebra::distance(point, query)))
            .collect();

        distances.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        distances
    }

    /// The k nearest points to the point at `index`, excluding itself
    pub fn k_nearest_to_member(&self, index: usize, k: usize) -> Vec<(usize, f64)> {
        let Some(query) = self.points.get(index) else {
            return Vec::new();
        };
        let mut nearest = self.ranked(query, |idx| idx != index);
        nearest.truncate(k);
        nearest
    }
}
