// Host-side tests for the uniform layouts the shader reads.

#![allow(dead_code)]
mod packing {
    include!("../src/render/packing.rs");
}

use fx_core::{Camera, Fog, Material, PointLight, Primitive, MAX_LIGHTS};
use glam::{Mat4, Vec3};
use packing::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-6
}

#[test]
fn uniform_sizes_match_wgsl_layout() {
    assert_eq!(std::mem::size_of::<LightPacked>(), 32);
    assert_eq!(std::mem::size_of::<FrameUniforms>(), 272);
    assert_eq!(std::mem::size_of::<ObjectUniforms>(), 96);
    // uniform buffers bind at 16-byte granularity
    assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
}

#[test]
fn camera_basis_is_screen_aligned() {
    let cam = Camera::new(75.0, 1.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 5.0));
    let (right, up) = camera_basis(&cam);
    assert!(close(right, Vec3::X));
    assert!(close(up, Vec3::Y));
}

#[test]
fn camera_basis_survives_looking_along_up() {
    let mut cam = Camera::new(75.0, 1.0, 0.1, 1000.0, Vec3::new(0.0, 10.0, 0.0));
    cam.look_at(Vec3::ZERO);
    let (right, up) = camera_basis(&cam);
    assert!(right.is_finite() && up.is_finite());
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!((up.length() - 1.0).abs() < 1e-5);
}

#[test]
fn frame_packs_fog_lights_and_time() {
    let cam = Camera::new(75.0, 1.5, 0.1, 1000.0, Vec3::new(0.0, 0.0, 30.0));
    let fog = Fog::exp2(0x0b0e14, 0.02);
    let light = PointLight::new(0x06b6d4, 2.0, 50.0, Vec3::new(10.0, 0.0, 5.0));
    let f = pack_frame(&cam, Some(&fog), &[light], 0.3, 4.5);

    assert_eq!(f.fog_params, [1.0, 0.02, 0.0, 0.0]);
    assert_eq!(f.fog_color[3], 1.0);
    assert_eq!(f.lights[0].pos_intensity, [10.0, 0.0, 5.0, 2.0]);
    assert_eq!(f.lights[0].color_distance[3], 50.0);
    // unused slots are zero, so they contribute nothing
    for l in &f.lights[1..MAX_LIGHTS] {
        assert_eq!(*l, LightPacked::default());
    }
    assert_eq!(f.ambient, [0.3, 4.5, 0.0, 0.0]);
    assert_eq!(f.view_proj, cam.view_proj().to_cols_array_2d());
}

#[test]
fn frame_without_fog_disables_it() {
    let cam = Camera::new(60.0, 1.0, 0.1, 100.0, Vec3::new(0.0, 0.0, 10.0));
    let f = pack_frame(&cam, None, &[], 1.0, 0.0);
    assert_eq!(f.fog_params[0], 0.0);
    assert!(f.lights.iter().all(|l| *l == LightPacked::default()));
}

#[test]
fn extra_lights_are_dropped() {
    let cam = Camera::new(60.0, 1.0, 0.1, 100.0, Vec3::new(0.0, 0.0, 10.0));
    let lights: Vec<PointLight> = (0..MAX_LIGHTS + 2)
        .map(|i| PointLight::new(0xffffff, i as f32 + 1.0, 10.0, Vec3::ZERO))
        .collect();
    let f = pack_frame(&cam, None, &lights, 1.0, 0.0);
    assert_eq!(f.lights[MAX_LIGHTS - 1].pos_intensity[3], MAX_LIGHTS as f32);
}

#[test]
fn object_params_depend_on_primitive() {
    let points = Material::points(0x8b5cf6, 0.15, 0.8).lit();
    let o = pack_object(Mat4::IDENTITY, &points, Primitive::Points, true);
    assert_eq!(o.params, [0.15, 1.0, 1.0, 0.0]);
    assert_eq!(o.color[3], 0.8);

    let wire = Material::wire(0x06b6d4, 1.7);
    let o = pack_object(Mat4::from_translation(Vec3::X), &wire, Primitive::Lines, false);
    assert_eq!(o.params, [0.0, 0.0, 0.0, 0.0]);
    // opacity is clamped to 1
    assert_eq!(o.color[3], 1.0);
    assert_eq!(o.model[3][0], 1.0);
}
