use super::constants::*;
use super::scene::Transform;
use glam::DVec3;
use std::f64::consts::PI;

/// Named easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    #[allow(dead_code)]
    Linear,
    /// Cubic ease-in-out ("power2.inOut" in GSAP naming).
    Power2InOut,
}

impl Ease {
    /// Map linear progress in [0, 1] to eased progress.
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power2InOut => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    let q = -2.0 * p + 2.0;
                    1.0 - q * q * q / 2.0
                }
            }
        }
    }
}

/// Interpolates one scalar field between two values over a time window.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Value at `now`; exactly `to` once the window has elapsed.
    pub fn sample(&self, now: f64) -> f64 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(p)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Camera pose a project card points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectTarget {
    pub rotation: DVec3,
    pub position_z: f64,
}

pub fn project_target(project_id: u32) -> ProjectTarget {
    let id = project_id as f64;
    ProjectTarget {
        rotation: DVec3::new(PI * PROJECT_PITCH_PER_ID * id, PI * PROJECT_YAW_PER_ID * id, 0.0),
        position_z: PROJECT_BASE_Z + id,
    }
}

/// Parse the `data-project` attribute of a card.
pub fn parse_project_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Rotation (all three axes) and depth tween toward a `ProjectTarget`.
#[derive(Clone, Copy, Debug)]
pub struct CameraTween {
    rotation: [Tween; 3],
    position_z: Tween,
}

impl CameraTween {
    /// Start values are captured from `camera` at `start`.
    pub fn toward(camera: &Transform, target: ProjectTarget, start: f64) -> Self {
        let d = PROJECT_TWEEN_SECS;
        let ease = Ease::Power2InOut;
        let r = camera.rotation;
        Self {
            rotation: [
                Tween::new(r.x, target.rotation.x, start, d, ease),
                Tween::new(r.y, target.rotation.y, start, d, ease),
                Tween::new(r.z, target.rotation.z, start, d, ease),
            ],
            position_z: Tween::new(camera.position.z, target.position_z, start, d, ease),
        }
    }

    /// Write the tweened fields into `camera`; returns true once finished.
    pub fn apply(&self, camera: &mut Transform, now: f64) -> bool {
        camera.rotation.x = self.rotation[0].sample(now);
        camera.rotation.y = self.rotation[1].sample(now);
        camera.rotation.z = self.rotation[2].sample(now);
        camera.position.z = self.position_z.sample(now);
        self.position_z.is_finished(now)
    }
}
