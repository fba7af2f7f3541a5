// Host-side tests for the per-frame update and the project tween driver.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod animation {
        include!("../src/core/animation.rs");
    }
}

use crate::core::animation::*;
use crate::core::clock::ManualClock;
use crate::core::constants::*;
use crate::core::scene::{MouseNdc, SceneState};
use crate::core::tween::project_target;
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

fn loaded_scene() -> SceneState {
    SceneState::new(16.0 / 9.0)
}

#[test]
fn particle_rotation_is_absolute_in_time() {
    let mut scene = loaded_scene();
    let mut animator = Animator::default();
    let t = 1_700_000_000.25;
    assert!(animator.step(&mut scene, true, t, &mut None));
    assert_eq!(scene.particles.rotation.x, t * 0.1);
    assert_eq!(scene.particles.rotation.y, t * 0.05);

    // Skipping frames does not change the pose at a given time
    let mut other = loaded_scene();
    animator.step(&mut other, true, t - 3.0, &mut None);
    animator.step(&mut other, true, t, &mut None);
    assert_eq!(other.particles.rotation, scene.particles.rotation);
}

#[test]
fn geometry_spin_rates_grow_with_index() {
    let mut scene = loaded_scene();
    let t = 12.5;
    advance(&mut scene, t);
    for (i, g) in scene.geometries.iter().enumerate() {
        let i = i as f64;
        assert!((g.transform.rotation.x - t * (0.5 + i * 0.1)).abs() < EPS);
        assert!((g.transform.rotation.y - t * (0.3 + i * 0.05)).abs() < EPS);
    }
}

#[test]
fn geometry_drift_accumulates_per_frame() {
    let mut scene = loaded_scene();
    let times = [0.0, 0.016, 0.033, 0.05, 1.0, 2.5];
    let mut expected: Vec<f64> = GEOMETRY_POSITIONS.iter().map(|p| p.y).collect();
    for &t in &times {
        advance(&mut scene, t);
        for (i, y) in expected.iter_mut().enumerate() {
            *y += (t + i as f64).sin() * 0.001;
        }
    }
    for (g, y) in scene.geometries.iter().zip(expected) {
        assert!((g.transform.position.y - y).abs() < EPS);
    }
    // x and z never move
    for (g, p) in scene.geometries.iter().zip(GEOMETRY_POSITIONS) {
        assert_eq!(g.transform.position.x, p.x);
        assert_eq!(g.transform.position.z, p.z);
    }
}

#[test]
fn camera_follows_mouse_with_damping() {
    let mut scene = loaded_scene();
    scene.mouse = MouseNdc { x: 1.0, y: -0.5 };
    scene.camera.transform.position.x = 0.2;
    advance(&mut scene, 0.0);
    let p = scene.camera.transform.position;
    assert_eq!(p.x, 0.2 + (0.5 - 0.2) * 0.05);
    assert_eq!(p.y, 0.0 + (-0.25 - 0.0) * 0.05);

    // Converges to mouse * 0.5 over many frames
    for _ in 0..2000 {
        advance(&mut scene, 0.0);
    }
    let p = scene.camera.transform.position;
    assert!((p.x - 0.5).abs() < 1e-6);
    assert!((p.y + 0.25).abs() < 1e-6);
}

#[test]
fn damp_toward_moves_five_percent_of_the_gap() {
    assert_eq!(damp_toward(0.0, 1.0), 0.05);
    assert_eq!(damp_toward(1.0, 1.0), 1.0);
    assert!((damp_toward(2.0, 0.0) - 1.9).abs() < EPS);
}

#[test]
fn nothing_moves_before_load_and_queued_project_waits() {
    let mut scene = loaded_scene();
    scene.mouse = MouseNdc { x: 1.0, y: 1.0 };
    let before = scene.clone();
    let mut animator = Animator::default();
    let mut queued = Some(project_target(1));

    assert!(!animator.step(&mut scene, false, 5.0, &mut queued));
    assert_eq!(scene.particles, before.particles);
    assert_eq!(scene.camera.transform, before.camera.transform);
    assert!(queued.is_some());
    assert!(!animator.is_tweening());

    assert!(animator.step(&mut scene, true, 5.0, &mut queued));
    assert!(queued.is_none());
    assert!(animator.is_tweening());
}

#[test]
fn project_tween_lands_on_target_after_duration() {
    let clock = ManualClock::new(100.0);
    let mut scene = loaded_scene();
    let mut animator = Animator::default();
    let mut queued = Some(project_target(2));

    animator.step_with_clock(&mut scene, true, &clock, &mut queued);
    // First frame samples progress 0: the camera still holds its start pose
    assert_eq!(scene.camera.transform.rotation.y, 0.0);
    assert_eq!(scene.camera.transform.position.z, CAMERA_BASE_Z);

    let mut last_yaw = scene.camera.transform.rotation.y;
    for _ in 0..14 {
        clock.advance(0.1);
        animator.step_with_clock(&mut scene, true, &clock, &mut queued);
        let yaw = scene.camera.transform.rotation.y;
        assert!(yaw > last_yaw);
        last_yaw = yaw;
    }
    assert!(animator.is_tweening());

    clock.set(101.5);
    animator.step_with_clock(&mut scene, true, &clock, &mut queued);
    let cam = scene.camera.transform;
    assert!((cam.rotation.x - 0.2 * PI).abs() < EPS);
    assert!((cam.rotation.y - 0.4 * PI).abs() < EPS);
    assert_eq!(cam.rotation.z, 0.0);
    assert_eq!(cam.position.z, 5.0);
    assert!(!animator.is_tweening());
}

#[test]
fn new_project_replaces_running_tween() {
    let clock = ManualClock::new(10.0);
    let mut scene = loaded_scene();
    let mut animator = Animator::default();

    animator.step_with_clock(&mut scene, true, &clock, &mut Some(project_target(3)));
    clock.advance(0.75);
    animator.step_with_clock(&mut scene, true, &clock, &mut None);
    let mid_z = scene.camera.transform.position.z;
    assert!(mid_z > CAMERA_BASE_Z && mid_z < 6.0);

    animator.step_with_clock(&mut scene, true, &clock, &mut Some(project_target(0)));
    clock.advance(PROJECT_TWEEN_SECS);
    animator.step_with_clock(&mut scene, true, &clock, &mut None);
    assert_eq!(scene.camera.transform.position.z, 3.0);
    assert_eq!(scene.camera.transform.rotation.x, 0.0);
    assert!(!animator.is_tweening());
}
