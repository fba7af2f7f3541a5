pub mod animation;
pub mod clock;
pub mod constants;
pub mod form;
pub mod geometry;
pub mod scene;
pub mod scroll;
pub mod tween;

pub use animation::*;
pub use clock::*;
pub use constants::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
