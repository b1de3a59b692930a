//! Procedural geometry: flat position/color buffers for point clouds, helix
//! strands, spiral discs and scattered shape placements.
//!
//! Every generator that needs randomness takes the generator explicitly, so
//! production wiring can hand in an entropy-seeded source and tests a fixed
//! seed. Non-positive radii or heights are a caller contract violation: the
//! output is visually meaningless but nothing panics.

use crate::color::{Palette, Rgb};
use crate::constants::SPIRAL_TWIST;
use crate::transform::Transform;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Flat `[x, y, z, x, y, z, ...]` positions with optional parallel colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    pub positions: Vec<f32>,
    pub colors: Option<Vec<f32>>,
}

impl GeometryBuffer {
    pub fn with_capacity(count: usize, with_colors: bool) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: with_colors.then(|| Vec::with_capacity(count * 3)),
        }
    }

    /// Number of vertices (points, or line endpoints).
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn push(&mut self, p: Vec3) {
        self.positions.extend_from_slice(&[p.x, p.y, p.z]);
    }

    pub fn push_colored(&mut self, p: Vec3, c: Rgb) {
        self.push(p);
        if let Some(colors) = self.colors.as_mut() {
            colors.extend_from_slice(&[c.r, c.g, c.b]);
        }
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    pub fn color(&self, i: usize) -> Option<Rgb> {
        self.colors
            .as_ref()
            .map(|c| Rgb::new(c[i * 3], c[i * 3 + 1], c[i * 3 + 2]))
    }
}

/// Axis-aligned box centred on the origin, given by its full extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeBounds {
    pub size: Vec3,
}

impl VolumeBounds {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            size: Vec3::new(x, y, z),
        }
    }

    pub fn cube(edge: f32) -> Self {
        Self::new(edge, edge, edge)
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            (rng.gen::<f32>() - 0.5) * self.size.x,
            (rng.gen::<f32>() - 0.5) * self.size.y,
            (rng.gen::<f32>() - 0.5) * self.size.z,
        )
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let h = self.size * 0.5;
        p.x.abs() <= h.x && p.y.abs() <= h.y && p.z.abs() <= h.z
    }
}

/// `count` points uniformly inside `bounds`; when `palette` is non-empty
/// each point also gets a uniformly drawn color.
pub fn generate_point_cloud<R: Rng + ?Sized>(
    count: usize,
    bounds: VolumeBounds,
    palette: &Palette,
    rng: &mut R,
) -> GeometryBuffer {
    let mut buf = GeometryBuffer::with_capacity(count, !palette.is_empty());
    for _ in 0..count {
        let p = bounds.sample(rng);
        match palette.pick(rng) {
            Some(c) => buf.push_colored(p, c),
            None => buf.push(p),
        }
    }
    buf
}

/// Parameters of one helix strand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixParams {
    pub points_per_turn: usize,
    pub turns: f32,
    pub radius: f32,
    pub height: f32,
}

impl HelixParams {
    /// Total sample count over all turns (at least one sample per strand
    /// unless `points_per_turn` is zero).
    pub fn sample_count(&self) -> usize {
        (self.points_per_turn as f32 * self.turns).round().max(0.0) as usize
    }

    /// Angle and height of sample `i` out of `n`.
    #[inline]
    fn sample(&self, i: usize, n: usize, phase: f32) -> (f32, f32) {
        let s = i as f32 / n as f32;
        let theta = s * TAU * self.turns + phase;
        let t = s * self.height - self.height / 2.0;
        (theta, t)
    }
}

/// Points along `x = r cos θ, y = t, z = r sin θ`, θ swept over `turns`
/// rotations shifted by `phase_offset`, `t` spanning `[-h/2, h/2)`.
pub fn generate_helix_strand(
    points_per_turn: usize,
    turns: f32,
    radius: f32,
    height: f32,
    phase_offset: f32,
    color: Rgb,
) -> GeometryBuffer {
    let params = HelixParams {
        points_per_turn,
        turns,
        radius,
        height,
    };
    let n = params.sample_count();
    let mut buf = GeometryBuffer::with_capacity(n, true);
    for i in 0..n {
        let (theta, t) = params.sample(i, n, phase_offset);
        buf.push_colored(
            Vec3::new(theta.cos() * radius, t, theta.sin() * radius),
            color,
        );
    }
    buf
}

/// Line-list segments joining two strands half a turn apart, `rungs`
/// segments evenly spaced along the helix.
pub fn generate_helix_rungs(rungs: usize, turns: f32, radius: f32, height: f32) -> GeometryBuffer {
    let params = HelixParams {
        points_per_turn: 0,
        turns,
        radius,
        height,
    };
    let mut buf = GeometryBuffer::with_capacity(rungs * 2, false);
    for i in 0..rungs {
        let (a1, t) = params.sample(i, rungs, 0.0);
        let a2 = a1 + PI;
        buf.push(Vec3::new(a1.cos() * radius, t, a1.sin() * radius));
        buf.push(Vec3::new(a2.cos() * radius, t, a2.sin() * radius));
    }
    buf
}

/// Points on a twisted annulus between `inner_radius` and `outer_radius`
/// with out-of-plane jitter bounded by `disc_thickness / 2`.
pub fn generate_spiral_disc<R: Rng + ?Sized>(
    count: usize,
    inner_radius: f32,
    outer_radius: f32,
    disc_thickness: f32,
    palette: &Palette,
    rng: &mut R,
) -> GeometryBuffer {
    let mut buf = GeometryBuffer::with_capacity(count, !palette.is_empty());
    let span = outer_radius - inner_radius;
    for _ in 0..count {
        let angle = rng.gen::<f32>() * TAU;
        let radius = inner_radius + rng.gen::<f32>() * span;
        let a = angle + angle * SPIRAL_TWIST;
        let y = (rng.gen::<f32>() - 0.5) * disc_thickness;
        let p = Vec3::new(a.cos() * radius, y, a.sin() * radius);
        match palette.pick(rng) {
            Some(c) => buf.push_colored(p, c),
            None => buf.push(p),
        }
    }
    buf
}

/// Per-point size attribute in `[0, 1)`.
pub fn generate_size_attribute<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    (0..count).map(|_| rng.gen::<f32>()).collect()
}

/// Random placement for a floating shape: position inside `spread`, Euler
/// rotation in `[0, π)` per axis, uniform scale in `scale_range`.
pub fn scatter_placements<R: Rng + ?Sized>(
    count: usize,
    spread: VolumeBounds,
    scale_range: (f32, f32),
    rng: &mut R,
) -> Vec<Transform> {
    let (lo, hi) = scale_range;
    (0..count)
        .map(|_| {
            let position = spread.sample(rng);
            let rotation = Vec3::new(
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
            );
            let scale = lo + rng.gen::<f32>() * (hi - lo);
            Transform::at(position)
                .with_rotation(rotation)
                .with_uniform_scale(scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helix_sample_count_rounds() {
        let p = HelixParams {
            points_per_turn: 20,
            turns: 6.0,
            radius: 8.0,
            height: 80.0,
        };
        assert_eq!(p.sample_count(), 120);
        let half = HelixParams { turns: 0.5, ..p };
        assert_eq!(half.sample_count(), 10);
    }

    #[test]
    fn rungs_are_diametric() {
        let buf = generate_helix_rungs(40, 6.0, 8.0, 80.0);
        assert_eq!(buf.len(), 80);
        for i in 0..40 {
            let a = buf.position(i * 2);
            let b = buf.position(i * 2 + 1);
            assert!((a.y - b.y).abs() < 1e-5);
            assert!(((a - b).length() - 16.0).abs() < 1e-3);
        }
    }
}
