//! Wireframe primitives as line lists (pairs of endpoints).

use crate::geometry::GeometryBuffer;
use glam::Vec3;
use std::f32::consts::TAU;

const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn ico_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Triangle count of an icosphere at `detail` subdivisions.
pub fn icosahedron_triangle_count(detail: u32) -> usize {
    let n = detail as usize + 1;
    20 * n * n
}

/// Edges of an icosahedron whose faces are split into `(detail + 1)^2`
/// triangles and projected onto a sphere of `radius`. One segment per
/// triangle edge, so shared edges are drawn twice.
pub fn icosahedron_edges(radius: f32, detail: u32) -> GeometryBuffer {
    let base = ico_vertices();
    let n = detail as usize + 1;
    let mut buf = GeometryBuffer::with_capacity(icosahedron_triangle_count(detail) * 6, false);
    for face in ICO_FACES.iter() {
        let (a, b, c) = (base[face[0]], base[face[1]], base[face[2]]);
        let grid = |i: usize, j: usize| -> Vec3 {
            let fi = i as f32 / n as f32;
            let fj = j as f32 / n as f32;
            let p = a * (1.0 - fi - fj) + b * fi + c * fj;
            p.normalize() * radius
        };
        for i in 0..n {
            for j in 0..(n - i) {
                push_triangle(&mut buf, grid(i, j), grid(i + 1, j), grid(i, j + 1));
                if i + j + 1 < n {
                    push_triangle(&mut buf, grid(i + 1, j), grid(i + 1, j + 1), grid(i, j + 1));
                }
            }
        }
    }
    buf
}

fn push_triangle(buf: &mut GeometryBuffer, a: Vec3, b: Vec3, c: Vec3) {
    for (p, q) in [(a, b), (b, c), (c, a)] {
        buf.push(p);
        buf.push(q);
    }
}

/// The 12 edges of a cube with edge length `size`, centred on the origin.
pub fn box_edges(size: f32) -> GeometryBuffer {
    let h = size / 2.0;
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { h } else { -h },
            if y { h } else { -h },
            if z { h } else { -h },
        )
    };
    let mut buf = GeometryBuffer::with_capacity(24, false);
    for a in [false, true] {
        for b in [false, true] {
            // edges parallel to x, y and z
            buf.push(corner(false, a, b));
            buf.push(corner(true, a, b));
            buf.push(corner(a, false, b));
            buf.push(corner(a, true, b));
            buf.push(corner(a, b, false));
            buf.push(corner(a, b, true));
        }
    }
    buf
}

/// Closed circle of `radius` in the XY plane as `segments` line segments.
pub fn ring_edges(radius: f32, segments: usize) -> GeometryBuffer {
    let mut buf = GeometryBuffer::with_capacity(segments * 2, false);
    let point = |k: usize| {
        let a = k as f32 / segments as f32 * TAU;
        Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
    };
    for k in 0..segments {
        buf.push(point(k));
        buf.push(point(k + 1));
    }
    buf
}
