use super::constants::*;
use super::scene::Solid;
use fnv::FnvHashSet;
use rand::Rng;
use std::f32::consts::TAU;

/// Per-instance particle data: position and vertex color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Scatter `count` particles uniformly in a cube of edge `spread` centred on the
/// origin. Colors run from cyan to white-ish blue: r random, g in [0.5, 1), b = 1.
pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, count: usize, spread: f32) -> Vec<ParticleVertex> {
    (0..count)
        .map(|_| ParticleVertex {
            position: [
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            ],
            color: [rng.gen::<f32>(), rng.gen::<f32>() * 0.5 + 0.5, 1.0],
        })
        .collect()
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed line list made of the unique edges of a triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct WireMesh {
    pub vertices: Vec<LineVertex>,
    pub indices: Vec<u32>,
}

impl WireMesh {
    #[allow(dead_code)]
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Collect the unique undirected edges of `triangles`, in first-seen order.
pub fn unique_edges(triangles: &[[u32; 3]]) -> Vec<u32> {
    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut out = Vec::with_capacity(triangles.len() * 3);
    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                out.push(a);
                out.push(b);
            }
        }
    }
    out
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> WireMesh {
    let mut vertices = Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = [ring * u.cos(), ring * u.sin(), tube * v.sin()];
            let center = [radius * u.cos(), radius * u.sin(), 0.0];
            vertices.push(LineVertex {
                position: p,
                normal: normalize([p[0] - center[0], p[1] - center[1], p[2] - center[2]]),
            });
        }
    }
    let stride = tubular_segments + 1;
    let mut triangles = Vec::with_capacity((radial_segments * tubular_segments * 2) as usize);
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }
    WireMesh {
        vertices,
        indices: unique_edges(&triangles),
    }
}

#[rustfmt::skip]
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

#[rustfmt::skip]
const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4], [0, 4, 3], [0, 3, 5], [0, 5, 2],
    [1, 2, 5], [1, 5, 3], [1, 3, 4], [1, 4, 2],
];

pub fn icosahedron(radius: f32) -> WireMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = [
        [-1.0, t, 0.0], [1.0, t, 0.0], [-1.0, -t, 0.0], [1.0, -t, 0.0],
        [0.0, -1.0, t], [0.0, 1.0, t], [0.0, -1.0, -t], [0.0, 1.0, -t],
        [t, 0.0, -1.0], [t, 0.0, 1.0], [-t, 0.0, -1.0], [-t, 0.0, 1.0],
    ];
    polyhedron(&corners, &ICOSAHEDRON_FACES, radius)
}

pub fn octahedron(radius: f32) -> WireMesh {
    let corners = [
        [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0], [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0], [0.0, 0.0, -1.0],
    ];
    polyhedron(&corners, &OCTAHEDRON_FACES, radius)
}

// Corners are projected onto the sphere of `radius`; normals point outward.
fn polyhedron(corners: &[[f32; 3]], faces: &[[u32; 3]], radius: f32) -> WireMesh {
    let vertices = corners
        .iter()
        .map(|c| {
            let n = normalize(*c);
            LineVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            }
        })
        .collect();
    WireMesh {
        vertices,
        indices: unique_edges(faces),
    }
}

/// Wireframe for one of the page's solids at its configured size.
pub fn solid_mesh(solid: Solid) -> WireMesh {
    match solid {
        Solid::Torus => torus(
            TORUS_RADIUS,
            TORUS_TUBE,
            TORUS_RADIAL_SEGMENTS,
            TORUS_TUBULAR_SEGMENTS,
        ),
        Solid::Icosahedron => icosahedron(ICOSAHEDRON_RADIUS),
        Solid::Octahedron => octahedron(OCTAHEDRON_RADIUS),
    }
}

#[inline]
fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}
