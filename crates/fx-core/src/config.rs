//! Per-scene configuration presets.
//!
//! A `SceneConfig` is built once when a scene is mounted and never mutated.
//! The presets reproduce the five backgrounds the site ships.

use crate::color::Palette;
use crate::constants::*;
use crate::fog::Fog;
use crate::input::{PointerFrame, PointerMapping, PointerRange};
use glam::Vec3;

/// Which background a canvas hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Hero,
    AboutParticles,
    AboutHelix,
    Contact,
    Loader,
}

impl SceneKind {
    pub fn all() -> &'static [SceneKind] {
        &[
            SceneKind::Hero,
            SceneKind::AboutParticles,
            SceneKind::AboutHelix,
            SceneKind::Contact,
            SceneKind::Loader,
        ]
    }

    /// Parse a `data-scene` attribute or a `mount_scene` kind string.
    pub fn from_attr(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Some(SceneKind::Hero),
            "particles" | "about-particles" => Some(SceneKind::AboutParticles),
            "helix" | "about-helix" | "dna" => Some(SceneKind::AboutHelix),
            "contact" => Some(SceneKind::Contact),
            "loader" | "preloader" => Some(SceneKind::Loader),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SceneKind::Hero => "hero",
            SceneKind::AboutParticles => "about-particles",
            SceneKind::AboutHelix => "about-helix",
            SceneKind::Contact => "contact",
            SceneKind::Loader => "loader",
        }
    }

    pub fn config(&self) -> SceneConfig {
        match self {
            SceneKind::Hero => SceneConfig::hero(),
            SceneKind::AboutParticles => SceneConfig::about_particles(),
            SceneKind::AboutHelix => SceneConfig::about_helix(),
            SceneKind::Contact => SceneConfig::contact(),
            SceneKind::Loader => SceneConfig::loader(),
        }
    }
}

/// Perspective camera parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl CameraConfig {
    pub const fn at_z(fov_degrees: f32, z: f32) -> Self {
        Self {
            fov_degrees,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, z),
        }
    }
}

/// Where the drawable size comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeSource {
    /// `window.innerWidth/innerHeight` (fullscreen backgrounds).
    Window,
    /// The canvas element's client size.
    Element,
}

/// Immutable per-instantiation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub kind: SceneKind,
    pub particle_count: usize,
    /// Full edge length of the particle box.
    pub spread: f32,
    pub palette: Palette,
    pub camera: CameraConfig,
    pub fog: Option<Fog>,
    pub pointer: PointerMapping,
    pub size_source: SizeSource,
    pub max_pixel_ratio: Option<f32>,
}

impl SceneConfig {
    pub fn hero() -> Self {
        Self {
            kind: SceneKind::Hero,
            particle_count: 4000,
            spread: 180.0,
            palette: Palette::from_hex(&[CYAN]),
            camera: CameraConfig::at_z(75.0, 40.0),
            fog: Some(Fog::exp2(NIGHT, 0.003)),
            pointer: PointerMapping::new(PointerRange::Centered, PointerFrame::Window).scaled(0.001),
            size_source: SizeSource::Window,
            max_pixel_ratio: Some(DEFAULT_MAX_PIXEL_RATIO),
        }
    }

    pub fn about_particles() -> Self {
        Self {
            kind: SceneKind::AboutParticles,
            particle_count: 700,
            spread: 40.0,
            palette: Palette::from_hex(&[CYAN]),
            camera: CameraConfig::at_z(75.0, 15.0),
            fog: None,
            pointer: PointerMapping::new(PointerRange::Centered, PointerFrame::Window),
            size_source: SizeSource::Window,
            max_pixel_ratio: None,
        }
    }

    pub fn about_helix() -> Self {
        Self {
            kind: SceneKind::AboutHelix,
            particle_count: 800,
            spread: 100.0,
            palette: Palette::from_hex(&[CYAN, VIOLET]),
            camera: CameraConfig {
                fov_degrees: 75.0,
                near: 0.1,
                far: 1000.0,
                position: Vec3::new(0.0, 20.0, 50.0),
            },
            fog: Some(Fog::linear(DEEP_NIGHT, 50.0, 200.0)),
            pointer: PointerMapping::new(PointerRange::Signed, PointerFrame::Window),
            size_source: SizeSource::Window,
            max_pixel_ratio: Some(DEFAULT_MAX_PIXEL_RATIO),
        }
    }

    pub fn contact() -> Self {
        Self {
            kind: SceneKind::Contact,
            particle_count: 1000,
            spread: 100.0,
            palette: Palette::from_hex(&[WHITE]),
            camera: CameraConfig::at_z(75.0, 30.0),
            fog: Some(Fog::exp2(BLACK, 0.002)),
            pointer: PointerMapping::new(PointerRange::Signed, PointerFrame::Element),
            size_source: SizeSource::Element,
            max_pixel_ratio: Some(DEFAULT_MAX_PIXEL_RATIO),
        }
    }

    pub fn loader() -> Self {
        Self {
            kind: SceneKind::Loader,
            particle_count: 1500,
            spread: 20.0,
            palette: Palette::from_hex(&[CYAN, PINK]),
            camera: CameraConfig::at_z(60.0, INTRO_CAMERA_Z),
            fog: None,
            pointer: PointerMapping::new(PointerRange::Signed, PointerFrame::Window),
            size_source: SizeSource::Window,
            max_pixel_ratio: Some(DEFAULT_MAX_PIXEL_RATIO),
        }
    }
}
