use super::{frame_clock, PopulateContext, SceneBehavior};
use crate::camera::Camera;
use crate::color::Rgb;
use crate::constants::{CYAN, POINTER_FOLLOW_FACTOR, VIOLET, WHITE};
use crate::geometry::{
    generate_helix_rungs, generate_helix_strand, generate_point_cloud, scatter_placements, VolumeBounds,
};
use crate::input::InputState;
use crate::lifecycle::FrameTime;
use crate::scene::{GroupId, Material, ObjectId, SceneGraph, SceneObject};
use crate::shapes::box_edges;
use crate::transform::approach;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;
use std::sync::Arc;

pub const HELIX_RADIUS: f32 = 8.0;
pub const HELIX_HEIGHT: f32 = 80.0;
pub const HELIX_TURNS: f32 = 6.0;
pub const HELIX_POINTS_PER_TURN: usize = 20;
pub const HELIX_RUNGS: usize = 40;

const CUBE_COUNT: usize = 20;
const CUBE_SPREAD: f32 = 60.0;
const CAMERA_LIFT: f32 = 20.0;

struct FloatingCube {
    id: ObjectId,
    spin: f32,
}

/// Two intertwined strands with rungs, a field of tumbling wireframe cubes
/// and an ambient two-tone particle cloud. The camera follows the pointer.
#[derive(Default)]
pub struct AboutHelix {
    helix: Option<GroupId>,
    cubes: Vec<FloatingCube>,
    particles: Option<ObjectId>,
}

impl SceneBehavior for AboutHelix {
    fn populate(&mut self, ctx: PopulateContext<'_>, graph: &mut SceneGraph, camera: &mut Camera) {
        let cfg = ctx.config;

        let helix = graph.add_group(Default::default());
        for (phase, hex) in [(0.0, CYAN), (PI, VIOLET)] {
            let strand = generate_helix_strand(
                HELIX_POINTS_PER_TURN,
                HELIX_TURNS,
                HELIX_RADIUS,
                HELIX_HEIGHT,
                phase,
                Rgb::from_hex(hex),
            );
            graph.add(SceneObject::points("strand", strand, Material::vertex_colored_points(0.4, 0.8)).in_group(helix));
        }
        let rungs = generate_helix_rungs(HELIX_RUNGS, HELIX_TURNS, HELIX_RADIUS, HELIX_HEIGHT);
        graph.add(SceneObject::lines("rungs", Arc::new(rungs), Material::wire(WHITE, 0.15)).in_group(helix));
        self.helix = Some(helix);

        let edges = Arc::new(box_edges(2.0));
        let placements = scatter_placements(CUBE_COUNT, VolumeBounds::cube(CUBE_SPREAD), (1.0, 1.0), ctx.rng);
        self.cubes = placements
            .into_iter()
            .enumerate()
            .map(|(i, placement)| {
                let hex = if i % 2 == 0 { CYAN } else { VIOLET };
                let id = graph.add(
                    SceneObject::lines("cube", edges.clone(), Material::wire(hex, 0.3)).with_transform(placement),
                );
                let spin = (ctx.rng.gen::<f32>() - 0.5) * 0.01;
                FloatingCube { id, spin }
            })
            .collect();

        let cloud = generate_point_cloud(cfg.particle_count, VolumeBounds::cube(cfg.spread), &cfg.palette, ctx.rng);
        self.particles = Some(graph.add(SceneObject::points(
            "ambient",
            cloud,
            Material::vertex_colored_points(0.15, 0.6),
        )));

        camera.eye = cfg.camera.position;
        camera.look_at(Vec3::ZERO);
    }

    fn animate(&mut self, graph: &mut SceneGraph, camera: &mut Camera, time: FrameTime, input: &InputState) {
        let f = time.frames();
        let clock = frame_clock(time);

        if let Some(g) = self.helix {
            let tr = graph.group_mut(g);
            tr.rotation.y += 0.002 * f;
            tr.rotation.x = (clock * 0.2).sin() * 0.1;
        }
        for cube in &self.cubes {
            let tr = graph.transform_mut(cube.id);
            tr.rotation.x += cube.spin * f;
            tr.rotation.y += cube.spin * f;
            tr.position.y += (clock + tr.position.x).sin() * 0.02 * f;
        }
        if let Some(id) = self.particles {
            graph.transform_mut(id).rotation.y += 0.0005 * f;
        }

        let p = input.pointer;
        camera.eye.x = approach(camera.eye.x, p.x * 10.0, POINTER_FOLLOW_FACTOR);
        camera.eye.y = approach(camera.eye.y, p.y * 10.0 + CAMERA_LIFT, POINTER_FOLLOW_FACTOR);
        camera.look_at(Vec3::ZERO);
    }
}
