//! Scene lifecycle: `Uninitialized -> Running -> Disposed`.
//!
//! A `SceneController` owns the camera, the scene graph, the behaviour that
//! animates them and the render target that draws them. The browser layer
//! drives it from `requestAnimationFrame` and resize events; tests drive it
//! with a recording target.

use crate::behaviors::{PopulateContext, SceneBehavior};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::constants::{FRAME_REFERENCE_HZ, MAX_FRAME_DT_SEC};
use crate::fog::Fog;
use crate::input::{InputState, Viewport};
use crate::scene::SceneGraph;
use rand::RngCore;
use std::fmt::Debug;

/// Drawing capability consumed by the controller.
pub trait RenderTarget {
    type Error: Debug;

    /// Upload the (immutable) geometry of every object once after populate.
    fn upload(&mut self, graph: &SceneGraph) -> Result<(), Self::Error>;

    /// Reconfigure for a new backing-store size in physical pixels.
    fn resize(&mut self, width: u32, height: u32);

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;

    /// Free GPU-side resources. Called once on dispose.
    fn release(&mut self) {}
}

/// Everything a render target needs to draw one frame.
pub struct FrameView<'a> {
    pub graph: &'a SceneGraph,
    pub camera: &'a Camera,
    pub fog: Option<&'a Fog>,
    pub elapsed: f32,
}

/// Elapsed scene time and the step since the previous update, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub dt: f32,
}

impl FrameTime {
    /// The step expressed in reference frames, for per-frame tuned constants.
    #[inline]
    pub fn frames(&self) -> f32 {
        self.dt * FRAME_REFERENCE_HZ
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Running,
    Disposed,
}

pub struct SceneController<T: RenderTarget> {
    config: SceneConfig,
    behavior: Box<dyn SceneBehavior>,
    graph: SceneGraph,
    camera: Camera,
    viewport: Viewport,
    target: Option<T>,
    state: LifecycleState,
    last_elapsed: Option<f32>,
}

impl<T: RenderTarget> SceneController<T> {
    pub fn new(config: SceneConfig, behavior: Box<dyn SceneBehavior>) -> Self {
        let cam = &config.camera;
        let camera = Camera::new(cam.fov_degrees, 1.0, cam.near, cam.far, cam.position);
        Self {
            config,
            behavior,
            graph: SceneGraph::default(),
            camera,
            viewport: Viewport::default(),
            target: None,
            state: LifecycleState::Uninitialized,
            last_elapsed: None,
        }
    }

    /// Build the scene and take ownership of `target`.
    ///
    /// An absent target, or one that fails to accept the geometry, leaves the
    /// controller `Uninitialized`: the effect is decorative, so this only logs.
    pub fn initialize(&mut self, target: Option<T>, viewport: Viewport, rng: &mut dyn RngCore) -> LifecycleState {
        if self.state != LifecycleState::Uninitialized {
            log::warn!(
                "[scene] {}: initialize called in state {:?}; ignoring",
                self.config.kind.name(),
                self.state
            );
            return self.state;
        }
        let Some(mut target) = target else {
            log::warn!(
                "[scene] {}: render target unavailable; effect skipped",
                self.config.kind.name()
            );
            return self.state;
        };

        self.viewport = viewport;
        self.camera.set_viewport(viewport.width, viewport.height);
        self.camera.look_at(glam::Vec3::ZERO);
        self.behavior.populate(
            PopulateContext {
                config: &self.config,
                viewport,
                rng,
            },
            &mut self.graph,
            &mut self.camera,
        );

        let (w, h) = viewport.physical_size();
        target.resize(w, h);
        if let Err(e) = target.upload(&self.graph) {
            log::warn!(
                "[scene] {}: geometry upload failed: {:?}",
                self.config.kind.name(),
                e
            );
            self.graph = SceneGraph::default();
            return self.state;
        }
        self.target = Some(target);
        self.state = LifecycleState::Running;
        log::info!(
            "[scene] {} running: objects={} vertices={}",
            self.config.kind.name(),
            self.graph.objects.len(),
            self.graph.vertex_count()
        );
        self.state
    }

    /// Advance the behaviour to `elapsed` seconds and draw one frame.
    pub fn update(&mut self, elapsed: f32, input: &InputState) {
        if self.state != LifecycleState::Running {
            return;
        }
        let dt = match self.last_elapsed {
            Some(prev) => (elapsed - prev).clamp(0.0, MAX_FRAME_DT_SEC),
            None => 0.0,
        };
        self.last_elapsed = Some(elapsed);
        self.behavior.animate(
            &mut self.graph,
            &mut self.camera,
            FrameTime { elapsed, dt },
            input,
        );
        if let Some(target) = self.target.as_mut() {
            let view = FrameView {
                graph: &self.graph,
                camera: &self.camera,
                fog: self.config.fog.as_ref(),
                elapsed,
            };
            if let Err(e) = target.render(&view) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Recompute the projection and the target size. Safe to call at any
    /// rate; a zero-sized viewport keeps the previous aspect.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.state != LifecycleState::Running {
            return;
        }
        self.viewport = viewport;
        self.camera.set_viewport(viewport.width, viewport.height);
        let (w, h) = viewport.physical_size();
        if let Some(target) = self.target.as_mut() {
            target.resize(w, h);
        }
    }

    /// Release the render target. Idempotent.
    pub fn dispose(&mut self) {
        if self.state == LifecycleState::Disposed {
            return;
        }
        if let Some(mut target) = self.target.take() {
            target.release();
        }
        self.graph = SceneGraph::default();
        self.state = LifecycleState::Disposed;
        log::info!("[scene] {} disposed", self.config.kind.name());
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Direct camera access for collaborators outside the behaviour, such as
    /// the intro flythrough tween.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }
}

impl<T: RenderTarget> Drop for SceneController<T> {
    fn drop(&mut self) {
        if self.state == LifecycleState::Running {
            self.dispose();
        }
    }
}
