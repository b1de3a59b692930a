pub mod behaviors;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod fog;
pub mod geometry;
pub mod input;
pub mod intro;
pub mod lifecycle;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod transform;
pub mod tween;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use behaviors::{behavior_for, PopulateContext, SceneBehavior};
pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use fog::*;
pub use geometry::*;
pub use input::*;
pub use intro::*;
pub use lifecycle::*;
pub use scene::*;
pub use session::*;
pub use transform::*;
pub use tween::*;
