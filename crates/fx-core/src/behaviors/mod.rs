//! Per-scene populate/animate strategies plugged into `SceneController`.
//!
//! Rotation rates were authored as per-frame increments at 60 Hz; behaviours
//! scale them by `FrameTime::frames()` so motion speed does not depend on the
//! display refresh rate.

use crate::camera::Camera;
use crate::config::{SceneConfig, SceneKind};
use crate::constants::FRAME_REFERENCE_HZ;
use crate::input::{InputState, Viewport};
use crate::lifecycle::FrameTime;
use crate::scene::SceneGraph;
use rand::RngCore;

mod about;
mod contact;
mod helix;
mod hero;
mod loader;

pub use about::AboutParticles;
pub use contact::Contact;
pub use helix::AboutHelix;
pub use hero::Hero;
pub use loader::Loader;

/// Inputs available while building a scene.
pub struct PopulateContext<'a> {
    pub config: &'a SceneConfig,
    pub viewport: Viewport,
    pub rng: &'a mut dyn RngCore,
}

pub trait SceneBehavior {
    /// Fill `graph` once and place the camera.
    fn populate(&mut self, ctx: PopulateContext<'_>, graph: &mut SceneGraph, camera: &mut Camera);

    /// Mutate transforms for one frame. Reads only `time` and `input`.
    fn animate(&mut self, graph: &mut SceneGraph, camera: &mut Camera, time: FrameTime, input: &InputState);
}

pub fn behavior_for(kind: SceneKind) -> Box<dyn SceneBehavior> {
    match kind {
        SceneKind::Hero => Box::new(Hero::default()),
        SceneKind::AboutParticles => Box::new(AboutParticles::default()),
        SceneKind::AboutHelix => Box::new(AboutHelix::default()),
        SceneKind::Contact => Box::new(Contact::default()),
        SceneKind::Loader => Box::new(Loader::default()),
    }
}

/// Scene clock advancing 0.01 per reference frame.
#[inline]
pub(crate) fn frame_clock(time: FrameTime) -> f32 {
    time.elapsed * FRAME_REFERENCE_HZ * 0.01
}
