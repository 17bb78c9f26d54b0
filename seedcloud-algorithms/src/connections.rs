//! k-nearest neighbor connection graphs

use crate::nearest_neighbor::BruteForceSearch;
use rayon::prelude::*;
use seedcloud_core::{Connection, Point3d};
use std::collections::HashSet;

/// Connect every point to its `k` nearest other points.
///
/// Distances are all-pairs Euclidean. Each edge is keyed by its canonical
/// `(min, max)` index pair, so a mutual nearest-neighbor pair yields one
/// connection rather than two. Connections come out in the order they are
/// first found: by source point, then by distance.
///
/// `k` is clamped to `n - 1`. For `n >= 2` and `k >= 1` every point ends up
/// with at least one connection, because its own nearest edge is either added
/// while visiting it or was already added from the other endpoint.
///
/// # Example
/// ```rust
/// use seedcloud_core::Point3d;
/// use seedcloud_algorithms::nearest_neighbor_connections;
///
/// let points = vec![
///     Point3d::new(0.0, 0.0, 0.0),
///     Point3d::new(1.0, 0.0, 0.0),
///     Point3d::new(5.0, 0.0, 0.0),
/// ];
/// let connections = nearest_neighbor_connections(&points, 1);
/// // 0 and 1 are mutual nearest neighbors and collapse to one edge
/// assert_eq!(connections.len(), 2);
/// ```
pub fn nearest_neighbor_connections(points: &[Point3d], k: usize) -> Vec<Connection> {
    if points.len() < 2 || k == 0 {
        return Vec::new();
    }
    let k = k.min(points.len() - 1);
    let search = BruteForceSearch::new(points);

    // collect() keeps index order, so the result does not depend on scheduling
    let rankings: Vec<Vec<(usize, f64)>> = (0..points.len())
        .into_par_iter()
        .map(|i| search.k_nearest_to_member(i, k))
        .collect();

    let mut seen = HashSet::with_capacity(points.len() * k);
    let mut connections = Vec::with_capacity(points.len() * k);
    for (i, neighbors) in rankings.into_iter().enumerate() {
        for (j, _) in neighbors {
            if let Some(connection) = Connection::new(i, j) {
                if seen.insert(connection) {
                    connections.push(connection);
                }
            }
        }
    }
    connections
}
