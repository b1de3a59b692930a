// Host-side tests for wireframe primitives.

use fx_core::shapes::*;

#[test]
fn icosahedron_edge_counts_follow_detail() {
    for detail in 0..3 {
        let buf = icosahedron_edges(1.0, detail);
        // three segments (six endpoints) per triangle
        assert_eq!(buf.len(), icosahedron_triangle_count(detail) * 6);
    }
    assert_eq!(icosahedron_triangle_count(0), 20);
    assert_eq!(icosahedron_triangle_count(1), 80);
    assert_eq!(icosahedron_triangle_count(2), 180);
}

#[test]
fn icosahedron_vertices_on_sphere() {
    let buf = icosahedron_edges(10.0, 1);
    for i in 0..buf.len() {
        let r = buf.position(i).length();
        assert!((r - 10.0).abs() < 1e-3, "vertex {i} at radius {r}");
    }
}

#[test]
fn box_has_twelve_unit_edges() {
    let buf = box_edges(2.0);
    assert_eq!(buf.len(), 24);
    for e in 0..12 {
        let a = buf.position(e * 2);
        let b = buf.position(e * 2 + 1);
        assert!(((a - b).length() - 2.0).abs() < 1e-6, "edge {e}");
        assert!(a.abs().max_element() <= 1.0 + 1e-6);
    }
}

#[test]
fn ring_is_closed_circle() {
    let buf = ring_edges(18.0, 100);
    assert_eq!(buf.len(), 200);
    for i in 0..buf.len() {
        let p = buf.position(i);
        assert!((p.truncate().length() - 18.0).abs() < 1e-3);
        assert_eq!(p.z, 0.0);
    }
    let first = buf.position(0);
    let last = buf.position(buf.len() - 1);
    assert!((first - last).length() < 1e-3, "ring must close on itself");
}
