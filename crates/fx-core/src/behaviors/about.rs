use super::{PopulateContext, SceneBehavior};
use crate::camera::Camera;
use crate::constants::VIOLET;
use crate::geometry::{generate_point_cloud, generate_size_attribute, scatter_placements, VolumeBounds};
use crate::input::InputState;
use crate::lifecycle::FrameTime;
use crate::scene::{GroupId, Material, ObjectId, SceneGraph, SceneObject};
use crate::shapes::icosahedron_edges;
use glam::Vec3;
use std::sync::Arc;

const SHAPE_COUNT: usize = 5;
const SHAPE_SPREAD: f32 = 20.0;

/// Particle network with a few floating wireframe icosahedra and pointer
/// parallax that accumulates into the rotation.
#[derive(Default)]
pub struct AboutParticles {
    cloud: Option<ObjectId>,
    shapes: Option<GroupId>,
}

impl SceneBehavior for AboutParticles {
    fn populate(&mut self, ctx: PopulateContext<'_>, graph: &mut SceneGraph, camera: &mut Camera) {
        let cfg = ctx.config;
        let cloud = generate_point_cloud(cfg.particle_count, VolumeBounds::cube(cfg.spread), &cfg.palette, ctx.rng);
        let sizes = generate_size_attribute(cfg.particle_count, ctx.rng);
        self.cloud = Some(graph.add(
            SceneObject::points("particles", cloud, Material::vertex_colored_points(0.15, 0.8)).with_sizes(sizes),
        ));

        let group = graph.add_group(Default::default());
        let ico = Arc::new(icosahedron_edges(1.0, 0));
        for mut placement in scatter_placements(SHAPE_COUNT, VolumeBounds::cube(SHAPE_SPREAD), (1.0, 3.0), ctx.rng) {
            placement.rotation = Vec3::ZERO;
            graph.add(
                SceneObject::lines("shape", ico.clone(), Material::wire(VIOLET, 0.1))
                    .with_transform(placement)
                    .in_group(group),
            );
        }
        self.shapes = Some(group);

        camera.eye = cfg.camera.position;
    }

    fn animate(&mut self, graph: &mut SceneGraph, _camera: &mut Camera, time: FrameTime, input: &InputState) {
        let f = time.frames();
        let p = input.pointer;
        if let Some(id) = self.cloud {
            let tr = graph.transform_mut(id);
            tr.rotation.y += (0.001 + p.x * 0.05) * f;
            tr.rotation.x += (0.001 + p.y * 0.05) * f;
        }
        if let Some(g) = self.shapes {
            let tr = graph.group_mut(g);
            tr.rotation.y -= 0.002 * f;
            tr.rotation.x -= 0.002 * f;
        }
    }
}
