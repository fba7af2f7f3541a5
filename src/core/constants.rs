use glam::DVec3;

// Shared scene/animation tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOV_DEG: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 1000.0;
pub const CAMERA_BASE_Z: f64 = 5.0; // resting depth at the top of the page

// Mouse follow: camera approaches mouse * reach by `damping` of the gap per frame
pub const CAMERA_MOUSE_REACH: f64 = 0.5;
pub const CAMERA_DAMPING: f64 = 0.05;

// Scroll mapping
pub const SCROLL_DEPTH_SPAN: f64 = 10.0; // z travelled from top to bottom of the page
pub const SCROLL_TILT_SPAN: f64 = 0.5; // rotation.x (radians) at the bottom of the page
pub const FOCUS_BAND_TOP: f64 = 0.4; // fraction of viewport height
pub const FOCUS_BAND_BOTTOM: f64 = 0.6;

// Particle cloud
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SPREAD: f32 = 20.0; // edge length of the cube particles are scattered in
pub const PARTICLE_SIZE: f32 = 0.02;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const PARTICLE_SPIN_X: f64 = 0.1; // radians per second
pub const PARTICLE_SPIN_Y: f64 = 0.05;

// Floating geometries: per-index spin is base + index * step
pub const GEOMETRY_SPIN_X_BASE: f64 = 0.5;
pub const GEOMETRY_SPIN_X_STEP: f64 = 0.1;
pub const GEOMETRY_SPIN_Y_BASE: f64 = 0.3;
pub const GEOMETRY_SPIN_Y_STEP: f64 = 0.05;
pub const GEOMETRY_DRIFT: f64 = 0.001; // y offset added per frame, scaled by sin(t + index)

pub const GEOMETRY_POSITIONS: [DVec3; 3] = [
    DVec3::new(-3.0, 2.0, -2.0),
    DVec3::new(3.0, -2.0, -1.0),
    DVec3::new(0.0, 3.0, -3.0),
];
pub const GEOMETRY_COLORS: [[f32; 3]; 3] = [
    [0.0, 1.0, 0.533],   // #00ff88
    [0.0, 0.533, 1.0],   // #0088ff
    [1.0, 0.0, 0.533],   // #ff0088
];
pub const GEOMETRY_OPACITY: [f32; 3] = [0.7, 0.6, 0.5];

// Solid dimensions
pub const TORUS_RADIUS: f32 = 0.5;
pub const TORUS_TUBE: f32 = 0.2;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;
pub const ICOSAHEDRON_RADIUS: f32 = 0.8;
pub const OCTAHEDRON_RADIUS: f32 = 0.6;

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [0.251, 0.251, 0.251]; // #404040
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const POINT_LIGHT_COLOR: [f32; 3] = [0.0, 1.0, 0.533]; // #00ff88
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_RANGE: f32 = 100.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Project tween
pub const PROJECT_TWEEN_SECS: f64 = 1.5;
pub const PROJECT_PITCH_PER_ID: f64 = 0.1; // multiples of PI
pub const PROJECT_YAW_PER_ID: f64 = 0.2; // multiples of PI
pub const PROJECT_BASE_Z: f64 = 3.0;
