//! Minimal scene graph: flat object list, one level of groups, point lights.

use crate::color::Rgb;
use crate::geometry::GeometryBuffer;
use crate::transform::Transform;
use glam::{Mat4, Vec3};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Camera-facing sprites, one per vertex.
    Points,
    /// Line list: vertices taken in pairs.
    Lines,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blending {
    Normal,
    Additive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Multiplies per-vertex colors when present.
    pub color: Rgb,
    pub opacity: f32,
    /// World-space sprite size for points; ignored for lines.
    pub size: f32,
    pub blending: Blending,
    /// Receives point-light tint.
    pub lit: bool,
}

impl Material {
    pub fn points(hex: u32, size: f32, opacity: f32) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            opacity,
            size,
            blending: Blending::Additive,
            lit: false,
        }
    }

    /// Points whose color comes entirely from the vertex colors.
    pub fn vertex_colored_points(size: f32, opacity: f32) -> Self {
        Self {
            color: Rgb::WHITE,
            ..Self::points(0xffffff, size, opacity)
        }
    }

    pub fn wire(hex: u32, opacity: f32) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            opacity,
            size: 1.0,
            blending: Blending::Normal,
            lit: false,
        }
    }

    pub fn with_blending(mut self, blending: Blending) -> Self {
        self.blending = blending;
        self
    }

    pub fn lit(mut self) -> Self {
        self.lit = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: &'static str,
    pub geometry: Arc<GeometryBuffer>,
    /// Optional per-vertex size multiplier, parallel to the positions.
    pub sizes: Option<Arc<Vec<f32>>>,
    pub primitive: Primitive,
    pub material: Material,
    pub transform: Transform,
    pub group: Option<GroupId>,
}

impl SceneObject {
    pub fn new(name: &'static str, geometry: Arc<GeometryBuffer>, primitive: Primitive, material: Material) -> Self {
        Self {
            name,
            geometry,
            sizes: None,
            primitive,
            material,
            transform: Transform::default(),
            group: None,
        }
    }

    pub fn points(name: &'static str, geometry: GeometryBuffer, material: Material) -> Self {
        Self::new(name, Arc::new(geometry), Primitive::Points, material)
    }

    pub fn lines(name: &'static str, geometry: Arc<GeometryBuffer>, material: Material) -> Self {
        Self::new(name, geometry, Primitive::Lines, material)
    }

    pub fn with_sizes(mut self, sizes: Vec<f32>) -> Self {
        self.sizes = Some(Arc::new(sizes));
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    /// Falloff reaches zero at this distance.
    pub distance: f32,
}

impl PointLight {
    pub fn new(hex: u32, intensity: f32, distance: f32, position: Vec3) -> Self {
        Self {
            position,
            color: Rgb::from_hex(hex),
            intensity,
            distance,
        }
    }

    /// Linear falloff contribution at `p`.
    pub fn attenuation(&self, p: Vec3) -> f32 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        (1.0 - p.distance(self.position) / self.distance).clamp(0.0, 1.0)
    }
}

pub const MAX_LIGHTS: usize = 2;

/// Objects, groups and lights owned by one scene.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    pub objects: Vec<SceneObject>,
    pub groups: Vec<Transform>,
    pub lights: Vec<PointLight>,
    pub ambient: f32,
}

impl SceneGraph {
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn add_group(&mut self, transform: Transform) -> GroupId {
        self.groups.push(transform);
        GroupId(self.groups.len() - 1)
    }

    /// Lights beyond `MAX_LIGHTS` are ignored by the renderer.
    pub fn add_light(&mut self, light: PointLight) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn object(&self, id: ObjectId) -> &SceneObject {
        &self.objects[id.0]
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut SceneObject {
        &mut self.objects[id.0]
    }

    pub fn transform_mut(&mut self, id: ObjectId) -> &mut Transform {
        &mut self.objects[id.0].transform
    }

    pub fn group_mut(&mut self, id: GroupId) -> &mut Transform {
        &mut self.groups[id.0]
    }

    pub fn group(&self, id: GroupId) -> &Transform {
        &self.groups[id.0]
    }

    /// Model matrix including the parent group, if any.
    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let obj = &self.objects[id.0];
        let local = obj.transform.matrix();
        match obj.group.and_then(|g| self.groups.get(g.0)) {
            Some(parent) => parent.matrix() * local,
            None => local,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> {
        (0..self.objects.len()).map(ObjectId)
    }

    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.geometry.len()).sum()
    }
}
