//! Integration tests for seedcloud-algorithms
//!
//! These tests check the layout invariants over many seeds sampled with a
//! fixed-seed RNG, for every policy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seedcloud_algorithms::*;
use seedcloud_core::{Seed, SceneDescription};
use std::collections::HashSet;

/// Sample `count` seeds reproducibly, always including the edges of the range
fn sample_seeds(count: usize) -> Vec<Seed> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut seeds = vec![
        Seed::parse("00000").unwrap(),
        Seed::parse("99999").unwrap(),
        Seed::parse("12345").unwrap(),
    ];
    seeds.extend((0..count).map(|_| {
        let value: u32 = rng.gen_range(0..100_000);
        Seed::parse(&format!("{value:05}")).unwrap()
    }));
    seeds
}

fn generate(policy: LayoutPolicy, seed: &Seed) -> SceneDescription {
    LayoutGenerator::for_policy(policy).generate(seed)
}

#[test]
fn test_generation_is_deterministic() {
    for policy in LayoutPolicy::ALL {
        for seed in sample_seeds(25) {
            let first = generate(policy, &seed);
            let second = generate(policy, &seed);
            assert_eq!(first, second, "policy {policy} seed {seed}");
        }
    }
}

#[test]
fn test_point_count_bounds() {
    let spherical = [
        LayoutPolicy::VolumetricFill,
        LayoutPolicy::SurfaceShell,
        LayoutPolicy::SurfaceWithNeighbors { k: 1 },
        LayoutPolicy::SurfaceWithNeighbors { k: 3 },
    ];
    for policy in spherical {
        for seed in sample_seeds(200) {
            let count = generate(policy, &seed).point_count();
            assert!((MIN_POINTS..=MAX_POINTS).contains(&count), "{count} points for {seed}");
        }
    }
}

#[test]
fn test_point_count_does_not_depend_on_policy() {
    for seed in sample_seeds(50) {
        let volumetric = generate(LayoutPolicy::VolumetricFill, &seed).point_count();
        let surface = generate(LayoutPolicy::SurfaceShell, &seed).point_count();
        assert_eq!(volumetric, surface);
    }
}

#[test]
fn test_surface_points_lie_on_sphere() {
    for seed in sample_seeds(100) {
        let scene = generate(LayoutPolicy::SurfaceShell, &seed);
        for point in &scene.points {
            assert!((point.radius() - GeneratorConfig::SPHERE_RADIUS).abs() < 1e-9);
        }
    }
}

#[test]
fn test_volumetric_points_inside_sphere() {
    for seed in sample_seeds(100) {
        let scene = generate(LayoutPolicy::VolumetricFill, &seed);
        for point in &scene.points {
            assert!(point.radius() <= GeneratorConfig::SPHERE_RADIUS + 1e-9);
        }
    }
}

#[test]
fn test_hues_stay_in_unit_interval() {
    for policy in LayoutPolicy::ALL {
        for seed in sample_seeds(50) {
            for point in generate(policy, &seed).points {
                assert!((0.0..1.0).contains(&point.color.h));
            }
        }
    }
}

#[test]
fn test_connections_are_deduplicated() {
    for k in [1, 2, 3, 5] {
        for seed in sample_seeds(60) {
            let scene = generate(LayoutPolicy::SurfaceWithNeighbors { k }, &seed);
            let mut seen = HashSet::new();
            for c in &scene.connections {
                let (a, b) = c.indices();
                assert!(a < b, "self or reversed connection {a}-{b}");
                assert!(b < scene.point_count());
                assert!(seen.insert((a, b)), "duplicate connection {a}-{b}");
                assert!(!seen.contains(&(b, a)));
            }
        }
    }
}

#[test]
fn test_every_point_has_a_connection() {
    for k in [1, 3] {
        for seed in sample_seeds(100) {
            let scene = generate(LayoutPolicy::SurfaceWithNeighbors { k }, &seed);
            let degrees = scene.degrees();
            assert!(degrees.iter().all(|&d| d >= 1), "isolated point for {seed} with k={k}");
        }
    }
}

#[test]
fn test_connection_count_bounds() {
    for k in [1, 3] {
        for seed in sample_seeds(50) {
            let scene = generate(LayoutPolicy::SurfaceWithNeighbors { k }, &seed);
            let n = scene.point_count();
            // each point adds at most k edges; mutual pairs can at most halve that
            assert!(scene.connection_count() <= n * k);
            assert!(scene.connection_count() * 2 >= n);
        }
    }
}

#[test]
fn test_nearest_neighbor_is_connected() {
    let search_scene = generate(LayoutPolicy::SurfaceWithNeighbors { k: 1 }, &Seed::parse("31415").unwrap());
    let positions: Vec<_> = search_scene.positions().collect();
    let search = BruteForceSearch::new(&positions);
    for i in 0..positions.len() {
        let (j, _) = search.k_nearest_to_member(i, 1)[0];
        let expected = seedcloud_core::Connection::new(i, j).unwrap();
        assert!(search_scene.connections.contains(&expected));
    }
}

#[test]
fn test_grid_sizing() {
    let seed = Seed::parse("23104").unwrap();
    let params = GridParams::from_seed(&seed);
    assert_eq!((params.x_count, params.y_count, params.z_count), (2, 3, 1));
    assert_eq!(params.spacing, 1.0);

    let scene = generate(LayoutPolicy::GridLattice, &seed);
    assert_eq!(scene.point_count(), params.x_count * params.y_count * params.z_count);
    assert!((scene.rotation_speed - 0.025).abs() < 1e-12);

    for seed in sample_seeds(50) {
        let params = GridParams::from_seed(&seed);
        assert_eq!(generate(LayoutPolicy::GridLattice, &seed).point_count(), params.point_count());
    }
}

#[test]
fn test_scene_json_round_trip() {
    let scene = generate(LayoutPolicy::SurfaceWithNeighbors { k: 3 }, &Seed::parse("27182").unwrap());
    let json = serde_json::to_string(&scene).unwrap();
    let back: SceneDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seed, scene.seed);
    assert_eq!(back.connections, scene.connections);
    assert_eq!(back.point_count(), scene.point_count());
}
