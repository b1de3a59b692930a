// Uniform layouts shared with `scene.wgsl`. Pure data so the packing can be
// checked on the host.

use fx_core::{Camera, Fog, Material, PointLight, Primitive, MAX_LIGHTS};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    pub pos_intensity: [f32; 4],
    pub color_distance: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    pub fog_color: [f32; 4],
    pub fog_params: [f32; 4],
    pub lights: [LightPacked; MAX_LIGHTS],
    pub ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

/// Screen-aligned basis for billboarded points.
pub fn camera_basis(camera: &Camera) -> (Vec3, Vec3) {
    let forward = (camera.target - camera.eye).normalize_or_zero();
    let mut right = forward.cross(camera.up).normalize_or_zero();
    if right == Vec3::ZERO {
        // looking straight along `up`
        right = Vec3::X;
    }
    let up = right.cross(forward).normalize_or_zero();
    (right, if up == Vec3::ZERO { Vec3::Y } else { up })
}

pub fn pack_light(light: Option<&PointLight>) -> LightPacked {
    match light {
        Some(l) => LightPacked {
            pos_intensity: [l.position.x, l.position.y, l.position.z, l.intensity],
            color_distance: [l.color.r, l.color.g, l.color.b, l.distance],
        },
        None => LightPacked::default(),
    }
}

pub fn pack_frame(
    camera: &Camera,
    fog: Option<&Fog>,
    lights: &[PointLight],
    ambient: f32,
    elapsed: f32,
) -> FrameUniforms {
    let (right, up) = camera_basis(camera);
    let fog_color = fog.map(|f| f.color().to_array()).unwrap_or([0.0; 3]);
    let mut packed = [LightPacked::default(); MAX_LIGHTS];
    for (i, slot) in packed.iter_mut().enumerate() {
        *slot = pack_light(lights.get(i));
    }
    FrameUniforms {
        view_proj: camera.view_proj().to_cols_array_2d(),
        view: camera.view_matrix().to_cols_array_2d(),
        cam_right: right.extend(0.0).to_array(),
        cam_up: up.extend(0.0).to_array(),
        fog_color: [fog_color[0], fog_color[1], fog_color[2], 1.0],
        fog_params: Fog::shader_params(fog),
        lights: packed,
        ambient: [ambient, elapsed, 0.0, 0.0],
    }
}

pub fn pack_object(model: Mat4, material: &Material, primitive: Primitive, has_sizes: bool) -> ObjectUniforms {
    let c = material.color;
    let size = match primitive {
        Primitive::Points => material.size,
        Primitive::Lines => 0.0,
    };
    ObjectUniforms {
        model: model.to_cols_array_2d(),
        color: [c.r, c.g, c.b, material.opacity.clamp(0.0, 1.0)],
        params: [
            size,
            if material.lit { 1.0 } else { 0.0 },
            if has_sizes { 1.0 } else { 0.0 },
            0.0,
        ],
    }
}
