use super::{PopulateContext, SceneBehavior};
use crate::camera::Camera;
use crate::constants::{CYAN, VIOLET};
use crate::geometry::{generate_point_cloud, GeometryBuffer, VolumeBounds};
use crate::input::InputState;
use crate::lifecycle::FrameTime;
use crate::scene::{Blending, GroupId, Material, ObjectId, PointLight, SceneGraph, SceneObject};
use crate::transform::pulse;
use glam::Vec3;

const ORB_COUNT: usize = 7;
const ORB_SPACING: f32 = 3.0;
const ORB_TINT: u32 = 0x83dbea; // white body, cyan emissive

/// Drifting particle field with a row of glowing orbs and two swinging lights.
#[derive(Default)]
pub struct Hero {
    cloud: Option<ObjectId>,
    orbs: Option<GroupId>,
}

impl SceneBehavior for Hero {
    fn populate(&mut self, ctx: PopulateContext<'_>, graph: &mut SceneGraph, camera: &mut Camera) {
        let cfg = ctx.config;
        let cloud = generate_point_cloud(cfg.particle_count, VolumeBounds::cube(cfg.spread), &cfg.palette, ctx.rng);
        self.cloud = Some(graph.add(SceneObject::points(
            "particles",
            cloud,
            Material::vertex_colored_points(0.18, 0.7),
        )));

        let group = graph.add_group(Default::default());
        let mut orbs = GeometryBuffer::with_capacity(ORB_COUNT, false);
        for i in 0..ORB_COUNT {
            let x = (i as f32 - 3.0) * ORB_SPACING;
            orbs.push(Vec3::new(x, (i as f32).sin() * 0.5, 0.0));
        }
        graph.add(
            SceneObject::points(
                "orbs",
                orbs,
                Material::points(ORB_TINT, 1.6, 0.9)
                    .with_blending(Blending::Normal)
                    .lit(),
            )
            .in_group(group),
        );
        self.orbs = Some(group);

        graph.ambient = 0.6;
        graph.add_light(PointLight::new(VIOLET, 2.0, 150.0, Vec3::new(30.0, 30.0, 30.0)));
        graph.add_light(PointLight::new(CYAN, 2.0, 150.0, Vec3::new(-30.0, -20.0, 30.0)));

        camera.eye = cfg.camera.position;
    }

    fn animate(&mut self, graph: &mut SceneGraph, _camera: &mut Camera, time: FrameTime, input: &InputState) {
        let t = time.elapsed;
        let p = input.pointer;
        if let Some(id) = self.cloud {
            let tr = graph.transform_mut(id);
            tr.rotation.y = t * 0.03;
            tr.rotation.x = p.y * 0.3;
        }
        if let Some(g) = self.orbs {
            let tr = graph.group_mut(g);
            tr.rotation.y = (t * 0.5).sin() * 0.2 + p.x;
            tr.rotation.x = (t * 0.3).cos() * 0.1 + p.y;
            tr.set_uniform_scale(pulse(1.0, 0.05, 2.0, t));
        }
        if let [l1, l2, ..] = graph.lights.as_mut_slice() {
            l1.position.x = t.sin() * 30.0;
            l2.position.x = t.cos() * 30.0;
        }
    }
}
