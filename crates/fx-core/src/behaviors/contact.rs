use super::{PopulateContext, SceneBehavior};
use crate::camera::Camera;
use crate::constants::{CYAN, POINTER_FOLLOW_FACTOR, VIOLET};
use crate::geometry::{generate_point_cloud, VolumeBounds};
use crate::input::InputState;
use crate::lifecycle::FrameTime;
use crate::scene::{Blending, Material, ObjectId, PointLight, SceneGraph, SceneObject};
use crate::shapes::{icosahedron_edges, ring_edges};
use crate::transform::{approach, Transform};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};
use std::sync::Arc;

const CORE_RADIUS: f32 = 10.0;
const RING_RADIUS: f32 = 18.0;
const RING_SEGMENTS: usize = 100;
const CORE_TINT: u32 = 0x333333;

// Per-frame (x, y) spin of each orbit ring
const RING_SPIN: [(f32, f32); 3] = [(0.005, 0.005), (0.005, 0.006), (0.005, 0.004)];

/// Wireframe core inside three orbit rings; the core and the camera ease
/// toward the pointer.
#[derive(Default)]
pub struct Contact {
    core: Option<ObjectId>,
    rings: Vec<ObjectId>,
    particles: Option<ObjectId>,
}

impl SceneBehavior for Contact {
    fn populate(&mut self, ctx: PopulateContext<'_>, graph: &mut SceneGraph, camera: &mut Camera) {
        let cfg = ctx.config;

        graph.ambient = 0.5;
        graph.add_light(PointLight::new(CYAN, 2.0, 50.0, Vec3::new(10.0, 10.0, 10.0)));
        graph.add_light(PointLight::new(VIOLET, 2.0, 50.0, Vec3::new(-10.0, -10.0, 10.0)));

        let core = Arc::new(icosahedron_edges(CORE_RADIUS, 1));
        self.core = Some(graph.add(SceneObject::lines("core", core, Material::wire(CORE_TINT, 1.0).lit())));

        let ring = Arc::new(ring_edges(RING_RADIUS, RING_SEGMENTS));
        self.rings = [0.0, FRAC_PI_3, -FRAC_PI_3]
            .into_iter()
            .map(|tilt| {
                let tr = Transform::default().with_rotation(Vec3::new(FRAC_PI_2, tilt, 0.0));
                graph.add(SceneObject::lines("ring", ring.clone(), Material::wire(CYAN, 0.3)).with_transform(tr))
            })
            .collect();

        let cloud = generate_point_cloud(cfg.particle_count, VolumeBounds::cube(cfg.spread), &cfg.palette, ctx.rng);
        self.particles = Some(graph.add(SceneObject::points(
            "particles",
            cloud,
            Material::vertex_colored_points(0.1, 0.5).with_blending(Blending::Normal),
        )));

        camera.eye = cfg.camera.position;
    }

    fn animate(&mut self, graph: &mut SceneGraph, camera: &mut Camera, time: FrameTime, input: &InputState) {
        let f = time.frames();
        let p = input.pointer;

        if let Some(id) = self.core {
            let tr = graph.transform_mut(id);
            tr.rotation.x += 0.002 * f;
            tr.rotation.y += 0.002 * f;
            tr.position.x = approach(tr.position.x, p.x * 5.0, POINTER_FOLLOW_FACTOR);
            tr.position.y = approach(tr.position.y, p.y * 5.0, POINTER_FOLLOW_FACTOR);
        }
        for (id, (sx, sy)) in self.rings.iter().zip(RING_SPIN) {
            let tr = graph.transform_mut(*id);
            tr.rotation.x += sx * f;
            tr.rotation.y += sy * f;
        }
        if let Some(id) = self.particles {
            graph.transform_mut(id).rotation.y -= 0.001 * f;
        }

        camera.eye.x = approach(camera.eye.x, p.x * 2.0, POINTER_FOLLOW_FACTOR);
        camera.eye.y = approach(camera.eye.y, -p.y * 2.0, POINTER_FOLLOW_FACTOR);
        camera.look_at(Vec3::ZERO);
    }
}
