// Scene state owned by the page context.
//
// Transforms are kept in f64: the frame clock is epoch seconds and the spin
// angles are `t * rate`, which would lose all sub-radian precision in f32.
// Matrices are narrowed only when a `RenderSnapshot` is taken for upload.

use super::constants::*;
use glam::{DMat4, DVec3, Mat4};

/// Position plus XYZ Euler rotation (applied as `Rx * Ry * Rz`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DVec3,
}

impl Transform {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DVec3::ZERO,
        }
    }

    /// Local-to-world matrix `T * Rx * Ry * Rz`.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.position)
            * DMat4::from_rotation_x(self.rotation.x)
            * DMat4::from_rotation_y(self.rotation.y)
            * DMat4::from_rotation_z(self.rotation.z)
    }
}

/// Perspective camera with a free transform, mirroring a scene-graph camera node.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub transform: Transform,
    pub fovy_degrees: f64,
    pub aspect: f64,
    pub znear: f64,
    pub zfar: f64,
}

impl PerspectiveCamera {
    pub fn new(aspect: f64) -> Self {
        Self {
            transform: Transform::at(DVec3::new(0.0, 0.0, CAMERA_BASE_Z)),
            fovy_degrees: CAMERA_FOV_DEG,
            aspect,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Aspect updates ignore degenerate sizes (minimized windows report 0).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_matrix(&self) -> DMat4 {
        self.transform.matrix().inverse()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solid {
    Torus,
    Icosahedron,
    Octahedron,
}

/// One of the wireframe solids floating in front of the particle cloud.
#[derive(Clone, Debug)]
pub struct FloatingGeometry {
    pub solid: Solid,
    pub transform: Transform,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Mouse position in normalized device coordinates, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseNdc {
    pub x: f64,
    pub y: f64,
}

impl MouseNdc {
    /// Map client pixel coordinates to [-1, 1] with y pointing up.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: (client_x / width) * 2.0 - 1.0,
            y: -(client_y / height) * 2.0 + 1.0,
        }
    }
}

/// Everything the frame loop and the DOM handlers mutate.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: PerspectiveCamera,
    pub particles: Transform,
    pub geometries: [FloatingGeometry; 3],
    pub mouse: MouseNdc,
    pub current_section: usize,
}

impl SceneState {
    pub fn new(aspect: f64) -> Self {
        let solids = [Solid::Torus, Solid::Icosahedron, Solid::Octahedron];
        let geometries = std::array::from_fn(|i| FloatingGeometry {
            solid: solids[i],
            transform: Transform::at(GEOMETRY_POSITIONS[i]),
            color: GEOMETRY_COLORS[i],
            opacity: GEOMETRY_OPACITY[i],
        });
        Self {
            camera: PerspectiveCamera::new(aspect),
            particles: Transform::default(),
            geometries,
            mouse: MouseNdc::default(),
            current_section: 0,
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            view: narrow(&self.camera.view_matrix()),
            proj: narrow(&self.camera.projection_matrix()),
            particles: narrow(&self.particles.matrix()),
            geometries: std::array::from_fn(|i| narrow(&self.geometries[i].transform.matrix())),
        }
    }
}

/// Single-precision matrices for one frame, ready for upload.
#[derive(Clone, Copy, Debug)]
pub struct RenderSnapshot {
    pub view: Mat4,
    pub proj: Mat4,
    pub particles: Mat4,
    pub geometries: [Mat4; 3],
}

#[inline]
fn narrow(m: &DMat4) -> Mat4 {
    Mat4::from_cols_array(&m.to_cols_array().map(|v| v as f32))
}
