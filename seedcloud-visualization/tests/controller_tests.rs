//! Integration tests for seedcloud-visualization
//!
//! These tests drive the controller the way a host would: submit seeds,
//! render frames, and check that scene swaps neither leak resources nor
//! disturb the live scene on bad input.

use seedcloud_algorithms::{GeneratorConfig, LayoutPolicy};
use seedcloud_core::Error;
use seedcloud_visualization::{HeadlessRenderer, SceneController};

fn controller(policy: LayoutPolicy) -> SceneController<HeadlessRenderer> {
    SceneController::new(HeadlessRenderer::new(), GeneratorConfig::for_policy(policy)).unwrap()
}

#[test]
fn test_invalid_input_keeps_current_scene() {
    let mut controller = controller(LayoutPolicy::SurfaceWithNeighbors { k: 3 });
    controller.submit("12345").unwrap();
    controller.frame().unwrap();

    let scene_before = controller.scene().cloned();
    let stats_before = controller.stats().cloned();
    let rotation_before = *controller.rotation();
    let generation_before = controller.animation().map(|h| h.generation());

    for input in ["1234", "123456", "12a45", ""] {
        let err = controller.submit(input).unwrap_err();
        assert_eq!(err, Error::InvalidSeedFormat(input.to_string()));
    }

    assert_eq!(controller.scene().cloned(), scene_before);
    assert_eq!(controller.stats().cloned(), stats_before);
    assert_eq!(*controller.rotation(), rotation_before);
    assert_eq!(controller.animation().map(|h| h.generation()), generation_before);
    assert!(controller.is_animating());
    assert_eq!(controller.renderer().live_resources(), 1);
}

#[test]
fn test_invalid_first_input_shows_nothing() {
    let mut controller = controller(LayoutPolicy::VolumetricFill);
    assert!(controller.submit("abcde").is_err());
    assert!(controller.scene().is_none());
    assert_eq!(controller.renderer().live_resources(), 0);
}

#[test]
fn test_repeated_submissions_do_not_leak() {
    let mut controller = controller(LayoutPolicy::SurfaceWithNeighbors { k: 3 });
    for value in 0..40u32 {
        controller.submit(&format!("{:05}", value * 2477)).unwrap();
        for _ in 0..3 {
            controller.frame().unwrap();
        }
        assert_eq!(controller.renderer().live_resources(), 1);
    }
    assert_eq!(controller.renderer().released(), 39);
    assert_eq!(controller.renderer().frames_drawn(), 120);
}

#[test]
fn test_only_one_loop_is_active() {
    let mut controller = controller(LayoutPolicy::GridLattice);
    controller.submit("23104").unwrap();
    let first = controller.animation().cloned().unwrap();

    controller.submit("99999").unwrap();
    let second = controller.animation().cloned().unwrap();

    assert!(!first.is_active());
    assert!(second.is_active());
    assert_eq!(second.generation(), first.generation() + 1);
}

#[test]
fn test_new_scene_resets_rotation() {
    let mut controller = controller(LayoutPolicy::GridLattice);
    controller.submit("23104").unwrap();
    for _ in 0..10 {
        controller.frame().unwrap();
    }
    assert!((controller.rotation().y - 0.25).abs() < 1e-9);

    let stats = controller.submit("23100").unwrap();
    assert!((stats.rotation_speed - 0.005).abs() < 1e-12);
    assert_eq!(controller.rotation().y, 0.0);
}

#[test]
fn test_stats_echo_seed() {
    let mut controller = controller(LayoutPolicy::VolumetricFill);
    let stats = controller.submit(" 12345 ").unwrap();
    assert_eq!(stats.to_string(), "Seed: 12345\nPoints: 51\nRotation Speed: 0.00050");
}

#[test]
fn test_external_cancel_stops_frames() {
    let mut controller = controller(LayoutPolicy::SurfaceShell);
    controller.submit("55555").unwrap();
    controller.animation().unwrap().cancel();
    assert!(!controller.frame().unwrap());
    assert_eq!(controller.renderer().frames_drawn(), 0);
}

#[test]
fn test_start_then_invalid_input_keeps_default_scene() {
    let mut controller =
        SceneController::start(HeadlessRenderer::new(), GeneratorConfig::default()).unwrap();
    assert_eq!(controller.scene().map(|s| s.seed.as_str()), Some("12345"));

    assert!(controller.submit("9x999").is_err());
    assert_eq!(
        controller.stats().map(|s| s.to_string()).as_deref(),
        Some("Seed: 12345\nPoints: 51\nRotation Speed: 0.00050")
    );
    assert!(controller.is_animating());

    controller.submit("00000").unwrap();
    assert_eq!(controller.scene().map(|s| s.point_count()), Some(40));
    assert_eq!(controller.renderer().live_resources(), 1);
    assert_eq!(controller.renderer().released(), 1);
}
