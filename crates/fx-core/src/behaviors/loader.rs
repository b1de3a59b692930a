use super::{frame_clock, PopulateContext, SceneBehavior};
use crate::camera::Camera;
use crate::constants::{AQUA, MOBILE_BREAKPOINT_PX, VIOLET};
use crate::geometry::generate_spiral_disc;
use crate::input::{InputState, Viewport};
use crate::lifecycle::FrameTime;
use crate::scene::{GroupId, Material, ObjectId, SceneGraph, SceneObject};
use crate::shapes::icosahedron_edges;
use crate::transform::pulse;
use glam::Vec3;
use std::sync::Arc;

pub const CORE_RADIUS: f32 = 4.0;
pub const CORE_RADIUS_MOBILE: f32 = 2.5;
const SHELL_RADIUS: f32 = 10.0;
const DISC_INNER_RADIUS: f32 = 12.0;
const DISC_THICKNESS: f32 = 4.0;
const CAMERA_ORBIT: f32 = 5.0;

/// Core radius for the current viewport width.
pub fn core_radius(viewport: &Viewport) -> f32 {
    if viewport.width < MOBILE_BREAKPOINT_PX {
        CORE_RADIUS_MOBILE
    } else {
        CORE_RADIUS
    }
}

/// Pulsing wireframe core inside a counter-rotating shell and a spiral
/// particle disc. Camera z is left alone so the intro flythrough can own it.
#[derive(Default)]
pub struct Loader {
    group: Option<GroupId>,
    core: Option<ObjectId>,
    shell: Option<ObjectId>,
    disc: Option<ObjectId>,
}

impl SceneBehavior for Loader {
    fn populate(&mut self, ctx: PopulateContext<'_>, graph: &mut SceneGraph, camera: &mut Camera) {
        let cfg = ctx.config;
        let group = graph.add_group(Default::default());

        let core = Arc::new(icosahedron_edges(core_radius(&ctx.viewport), 2));
        self.core = Some(graph.add(SceneObject::lines("core", core, Material::wire(AQUA, 0.3)).in_group(group)));

        let shell = Arc::new(icosahedron_edges(SHELL_RADIUS, 1));
        self.shell = Some(graph.add(SceneObject::lines("shell", shell, Material::wire(VIOLET, 0.15)).in_group(group)));

        let disc = generate_spiral_disc(
            cfg.particle_count,
            DISC_INNER_RADIUS,
            cfg.spread,
            DISC_THICKNESS,
            &cfg.palette,
            ctx.rng,
        );
        self.disc = Some(graph.add(
            SceneObject::points("orbit", disc, Material::vertex_colored_points(0.15, 0.8)).in_group(group),
        ));
        self.group = Some(group);

        camera.eye = cfg.camera.position;
    }

    fn animate(&mut self, graph: &mut SceneGraph, camera: &mut Camera, time: FrameTime, _input: &InputState) {
        let f = time.frames();
        let clock = frame_clock(time);

        if let Some(id) = self.core {
            let tr = graph.transform_mut(id);
            tr.rotation.y += 0.02 * f;
            tr.rotation.z += 0.01 * f;
            tr.set_uniform_scale(pulse(1.0, 0.2, 3.0, clock));
        }
        if let Some(id) = self.shell {
            let tr = graph.transform_mut(id);
            tr.rotation.y -= 0.005 * f;
            tr.rotation.x += 0.005 * f;
        }
        if let Some(id) = self.disc {
            graph.transform_mut(id).rotation.y = -clock * 0.2;
        }

        camera.eye.x = (clock * 0.5).sin() * CAMERA_ORBIT;
        camera.eye.y = (clock * 0.5).cos() * CAMERA_ORBIT;
        camera.look_at(Vec3::ZERO);
    }
}
