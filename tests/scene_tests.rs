// Host-side tests for scene construction, camera matrices and mouse mapping.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::constants::*;
use crate::core::scene::*;
use glam::{DVec3, Vec4};

#[test]
fn scene_starts_with_three_solids_in_order() {
    let scene = SceneState::new(2.0);
    let solids: Vec<Solid> = scene.geometries.iter().map(|g| g.solid).collect();
    assert_eq!(solids, [Solid::Torus, Solid::Icosahedron, Solid::Octahedron]);
    for (i, g) in scene.geometries.iter().enumerate() {
        assert_eq!(g.transform.position, GEOMETRY_POSITIONS[i]);
        assert_eq!(g.transform.rotation, DVec3::ZERO);
        assert_eq!(g.color, GEOMETRY_COLORS[i]);
        assert_eq!(g.opacity, GEOMETRY_OPACITY[i]);
    }
    assert_eq!(scene.camera.transform.position, DVec3::new(0.0, 0.0, 5.0));
    assert_eq!(scene.camera.fovy_degrees, 75.0);
    assert_eq!(scene.current_section, 0);
}

#[test]
fn viewport_updates_ignore_degenerate_sizes() {
    let mut camera = PerspectiveCamera::new(1.0);
    camera.set_viewport(1920.0, 1080.0);
    assert_eq!(camera.aspect, 1920.0 / 1080.0);
    camera.set_viewport(0.0, 1080.0);
    camera.set_viewport(1920.0, 0.0);
    assert_eq!(camera.aspect, 1920.0 / 1080.0);
}

#[test]
fn view_matrix_places_origin_in_front_of_camera() {
    let camera = PerspectiveCamera::new(1.0);
    let p = camera.view_matrix().transform_point3(DVec3::ZERO);
    assert!((p - DVec3::new(0.0, 0.0, -5.0)).length() < 1e-12);
}

#[test]
fn euler_order_is_x_then_y_then_z() {
    let t = Transform {
        position: DVec3::ZERO,
        rotation: DVec3::new(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2, 0.0),
    };
    // Ry first turns +x into -z, then Rx turns -z into +y
    let v = t.matrix().transform_vector3(DVec3::X);
    assert!((v - DVec3::Y).length() < 1e-12);
}

#[test]
fn snapshot_narrows_matrices_for_upload() {
    let mut scene = SceneState::new(1.0);
    scene.particles.rotation.y = 0.25;
    let snap = scene.snapshot();
    let origin = snap.view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin.z + 5.0).abs() < 1e-6);
    let g0 = snap.geometries[0] * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((g0.x + 3.0).abs() < 1e-6 && (g0.y - 2.0).abs() < 1e-6);
    // Points in front of the camera project inside the depth range
    let clip = snap.proj * origin;
    let ndc_z = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&ndc_z));
}

#[test]
fn mouse_maps_client_pixels_to_ndc_with_y_up() {
    let (w, h) = (800.0, 600.0);
    assert_eq!(MouseNdc::from_client(0.0, 0.0, w, h), MouseNdc { x: -1.0, y: 1.0 });
    assert_eq!(MouseNdc::from_client(400.0, 300.0, w, h), MouseNdc { x: 0.0, y: 0.0 });
    assert_eq!(MouseNdc::from_client(800.0, 600.0, w, h), MouseNdc { x: 1.0, y: -1.0 });
}
