use super::constants::*;
use super::clock::Clock;
use super::scene::{FloatingGeometry, PerspectiveCamera, SceneState, Transform};
use super::tween::{CameraTween, ProjectTarget};

/// Spin of the particle cloud at time `t` (absolute, not accumulated).
#[inline]
pub fn particle_rotation(t: f64) -> (f64, f64) {
    (t * PARTICLE_SPIN_X, t * PARTICLE_SPIN_Y)
}

/// Spin of the floating geometry at `index` at time `t`.
#[inline]
pub fn geometry_rotation(t: f64, index: usize) -> (f64, f64) {
    let i = index as f64;
    (
        t * (GEOMETRY_SPIN_X_BASE + i * GEOMETRY_SPIN_X_STEP),
        t * (GEOMETRY_SPIN_Y_BASE + i * GEOMETRY_SPIN_Y_STEP),
    )
}

/// Per-frame y offset for the geometry at `index`. Summed every frame and never
/// re-centred, so the solids wander slowly over a long session.
#[inline]
pub fn geometry_drift(t: f64, index: usize) -> f64 {
    (t + index as f64).sin() * GEOMETRY_DRIFT
}

/// One step of the frame-rate dependent smoothing filter.
#[inline]
pub fn damp_toward(current: f64, target: f64) -> f64 {
    current + (target - current) * CAMERA_DAMPING
}

pub fn spin_particles(particles: &mut Transform, t: f64) {
    let (rx, ry) = particle_rotation(t);
    particles.rotation.x = rx;
    particles.rotation.y = ry;
}

pub fn float_geometries(geometries: &mut [FloatingGeometry], t: f64) {
    for (i, g) in geometries.iter_mut().enumerate() {
        let (rx, ry) = geometry_rotation(t, i);
        g.transform.rotation.x = rx;
        g.transform.rotation.y = ry;
        g.transform.position.y += geometry_drift(t, i);
    }
}

pub fn follow_mouse(camera: &mut PerspectiveCamera, mouse_x: f64, mouse_y: f64) {
    let p = &mut camera.transform.position;
    p.x = damp_toward(p.x, mouse_x * CAMERA_MOUSE_REACH);
    p.y = damp_toward(p.y, mouse_y * CAMERA_MOUSE_REACH);
}

/// Advance every time-dependent field of the scene to time `t`.
pub fn advance(scene: &mut SceneState, t: f64) {
    spin_particles(&mut scene.particles, t);
    float_geometries(&mut scene.geometries, t);
    let mouse = scene.mouse;
    follow_mouse(&mut scene.camera, mouse.x, mouse.y);
}

/// Frame-to-frame state that is not shared with the DOM handlers: the running
/// project tween.
#[derive(Debug, Default)]
pub struct Animator {
    tween: Option<CameraTween>,
}

impl Animator {
    #[allow(dead_code)]
    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    /// Run one frame at time `t`. Nothing moves (and `queued` is left in
    /// place) until `loaded`. A queued project replaces any running tween and
    /// starts from the camera as it is after this frame's mouse follow.
    /// Returns true when a frame should be submitted.
    pub fn step(
        &mut self,
        scene: &mut SceneState,
        loaded: bool,
        t: f64,
        queued: &mut Option<ProjectTarget>,
    ) -> bool {
        if !loaded {
            return false;
        }
        advance(scene, t);
        if let Some(target) = queued.take() {
            self.tween = Some(CameraTween::toward(&scene.camera.transform, target, t));
        }
        if let Some(tween) = &self.tween {
            if tween.apply(&mut scene.camera.transform, t) {
                self.tween = None;
            }
        }
        true
    }

    pub fn step_with_clock<C: Clock + ?Sized>(
        &mut self,
        scene: &mut SceneState,
        loaded: bool,
        clock: &C,
        queued: &mut Option<ProjectTarget>,
    ) -> bool {
        self.step(scene, loaded, clock.now_secs(), queued)
    }
}
